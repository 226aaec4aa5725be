use crate::core::{BehaviorCheck, CapabilityCheck, Case, Exercise, Scaffold, Subject};
use crate::utils::error::{HarnessError, Result};

pub const ID: &str = "rect-methods";
pub const CALCULATE_AREA: &str = "calculate_area";
pub const CALCULATE_PERIMETER: &str = "calculate_perimeter";

/// Reference solution for the rectangle exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    w: i64,
    h: i64,
}

impl Rect {
    pub fn new(w: i64, h: i64) -> Self {
        Self { w, h }
    }

    pub fn calculate_area(&self) -> i64 {
        self.w * self.h
    }

    pub fn calculate_perimeter(&self) -> i64 {
        2 * self.w + 2 * self.h
    }
}

impl Subject for Rect {
    fn name(&self) -> &'static str {
        "Rect"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &[CALCULATE_AREA, CALCULATE_PERIMETER]
    }

    fn invoke(&self, op: &str) -> Result<i64> {
        match op {
            CALCULATE_AREA => Ok(self.calculate_area()),
            CALCULATE_PERIMETER => Ok(self.calculate_perimeter()),
            _ => Err(HarnessError::MissingCapability {
                subject: self.name().to_string(),
                op: op.to_string(),
            }),
        }
    }
}

pub struct RectScaffold;

impl Scaffold for RectScaffold {
    fn construct(&self, args: &[i64]) -> Box<dyn Subject> {
        // A learner may have forgotten constructor parameters; default to 0.
        let w = args.first().copied().unwrap_or(0);
        let h = args.get(1).copied().unwrap_or(0);
        Box::new(Rect::new(w, h))
    }
}

pub fn exercise() -> Exercise {
    Exercise {
        id: ID.to_string(),
        capabilities: vec![
            CapabilityCheck {
                op: CALCULATE_AREA.to_string(),
                hint: "Did you forget to define `calculate_area`? 🤔".to_string(),
            },
            CapabilityCheck {
                op: CALCULATE_PERIMETER.to_string(),
                hint: "Did you forget to define `calculate_perimeter`? 🤔".to_string(),
            },
        ],
        behaviors: vec![
            BehaviorCheck {
                op: CALCULATE_AREA.to_string(),
                cases: vec![
                    Case::new(vec![4, 4], 16),
                    Case::new(vec![9, 12], 108),
                    Case::new(vec![1, 9], 9),
                    Case::new(vec![12, 4], 48),
                    Case::new(vec![80, 97], 7760),
                    Case::new(vec![1, 1], 1),
                ],
                hint: "That's not quite right. Area is calculated as width multiplied by height. Try that. 🤔"
                    .to_string(),
            },
            BehaviorCheck {
                op: CALCULATE_PERIMETER.to_string(),
                cases: vec![
                    Case::new(vec![4, 4], 16),
                    Case::new(vec![9, 12], 42),
                    Case::new(vec![1, 9], 20),
                    Case::new(vec![12, 4], 32),
                    Case::new(vec![80, 97], 354),
                    Case::new(vec![1, 1], 4),
                ],
                hint: "That's not quite right. Perimeter is calculated as twice width plus twice height. Try that. 🤔"
                    .to_string(),
            },
        ],
    }
}
