use crate::core::ExerciseState;
use crate::utils::error::{HarnessError, Result};
use serde::Serialize;

/// Outcome of one exercise run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub id: String,
    pub state: ExerciseState,
    /// Required operations the subject did not expose (hinted, non-fatal).
    pub missing_ops: Vec<String>,
    /// Rendered behavior failures, one per failed check.
    pub failures: Vec<String>,
    pub hints_emitted: usize,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.state == ExerciseState::Passed
    }
}

/// Aggregate over a suite run, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub reports: Vec<RunReport>,
}

impl Summary {
    pub fn from_reports(reports: Vec<RunReport>) -> Self {
        let total = reports.len();
        let passed = reports.iter().filter(|r| r.passed()).count();
        Self {
            total,
            passed,
            failed: total - passed,
            reports,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Re-signals behavior failures upward as an error the caller can map
    /// to an exit status.
    pub fn ensure_passed(&self) -> Result<()> {
        if self.all_passed() {
            Ok(())
        } else {
            Err(HarnessError::SuiteFailed {
                failed: self.failed,
                total: self.total,
            })
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
