use serde::{Deserialize, Serialize};

/// One teachable unit: which operations the student's value must expose and
/// which results they must produce.
#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: String,
    pub capabilities: Vec<CapabilityCheck>,
    pub behaviors: Vec<BehaviorCheck>,
}

/// Existence check for a required operation. Non-fatal: a miss emits the
/// hint and the run continues.
#[derive(Debug, Clone)]
pub struct CapabilityCheck {
    pub op: String,
    pub hint: String,
}

/// Correctness check for one operation over a table of cases. The first
/// mismatch emits the hint and stops the remaining cases of this check.
#[derive(Debug, Clone)]
pub struct BehaviorCheck {
    pub op: String,
    pub cases: Vec<Case>,
    pub hint: String,
}

/// One concrete input/output pair: constructor arguments and the expected
/// integer result of the checked operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub args: Vec<i64>,
    pub expected: i64,
}

impl Case {
    pub fn new(args: Vec<i64>, expected: i64) -> Self {
        Self { args, expected }
    }
}

/// A diagnostic message for the learner, addressed to a named channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub channel: String,
    pub message: String,
}

impl Hint {
    pub fn new(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            message: message.into(),
        }
    }
}

/// Per-exercise progress. Linear, one-shot: the capability step always
/// completes, the behavior step either passes or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseState {
    CapabilityChecked,
    BehaviorChecked,
    Passed,
    Failed,
}
