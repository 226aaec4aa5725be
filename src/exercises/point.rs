use crate::core::{BehaviorCheck, Case, Exercise, Scaffold, Subject};
use crate::utils::error::{HarnessError, Result};

pub const ID: &str = "simple-point";
pub const X: &str = "x";
pub const Y: &str = "y";

/// Reference solution for the point exercise. Field access is modelled as
/// two zero-argument accessor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Subject for Point {
    fn name(&self) -> &'static str {
        "Point"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &[X, Y]
    }

    fn invoke(&self, op: &str) -> Result<i64> {
        match op {
            X => Ok(self.x),
            Y => Ok(self.y),
            _ => Err(HarnessError::MissingCapability {
                subject: self.name().to_string(),
                op: op.to_string(),
            }),
        }
    }
}

pub struct PointScaffold;

impl Scaffold for PointScaffold {
    fn construct(&self, args: &[i64]) -> Box<dyn Subject> {
        let x = args.first().copied().unwrap_or(0);
        let y = args.get(1).copied().unwrap_or(0);
        Box::new(Point::new(x, y))
    }
}

pub fn exercise() -> Exercise {
    let hint =
        "Did you forget to store the constructor arguments in the struct fields? 🤔".to_string();
    Exercise {
        id: ID.to_string(),
        capabilities: vec![],
        behaviors: vec![
            BehaviorCheck {
                op: X.to_string(),
                cases: vec![Case::new(vec![79, 144], 79)],
                hint: hint.clone(),
            },
            BehaviorCheck {
                op: Y.to_string(),
                cases: vec![Case::new(vec![79, 144], 144)],
                hint,
            },
        ],
    }
}
