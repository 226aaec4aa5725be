use crate::core::{BehaviorCheck, Case, Exercise, Scaffold, Subject};
use crate::exercises::rect::{Rect, CALCULATE_AREA};
use crate::utils::error::{HarnessError, Result};

pub const ID: &str = "square-subclass";

/// Reference solution for the square exercise: a newtype over [`Rect`]
/// standing in for the original subclass, delegating the area calculation
/// instead of overriding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    rect: Rect,
}

impl Square {
    pub fn new(length: i64) -> Self {
        Self {
            rect: Rect::new(length, length),
        }
    }

    pub fn calculate_area(&self) -> i64 {
        self.rect.calculate_area()
    }
}

impl Subject for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &[CALCULATE_AREA]
    }

    fn invoke(&self, op: &str) -> Result<i64> {
        match op {
            CALCULATE_AREA => Ok(self.calculate_area()),
            _ => Err(HarnessError::MissingCapability {
                subject: self.name().to_string(),
                op: op.to_string(),
            }),
        }
    }
}

pub struct SquareScaffold;

impl Scaffold for SquareScaffold {
    fn construct(&self, args: &[i64]) -> Box<dyn Subject> {
        let length = args.first().copied().unwrap_or(0);
        Box::new(Square::new(length))
    }
}

pub fn exercise() -> Exercise {
    Exercise {
        id: ID.to_string(),
        capabilities: vec![],
        behaviors: vec![BehaviorCheck {
            op: CALCULATE_AREA.to_string(),
            cases: vec![
                Case::new(vec![4], 16),
                Case::new(vec![10], 100),
                Case::new(vec![9], 81),
                Case::new(vec![0], 0),
                Case::new(vec![1], 1),
                Case::new(vec![450], 202500),
                Case::new(vec![32], 1024),
            ],
            hint: "That's not quite right. Did you delegate to the inner `Rect` correctly? 🤔"
                .to_string(),
        }],
    }
}
