use crate::core::report::{RunReport, Summary};
use crate::core::{BehaviorCheck, Exercise, ExerciseState, Hint, HintSink, Scaffold};
use crate::utils::error::{HarnessError, Result};

pub const DEFAULT_CHANNEL: &str = "Hint 💡";

/// One exercise paired with the scaffold that builds its subjects.
pub struct SuiteEntry {
    pub exercise: Exercise,
    pub scaffold: Box<dyn Scaffold>,
}

/// Drives the two-step check per exercise: capability probe first, then the
/// behavior case tables. Hints go to the sink; outcomes go into the report.
pub struct Runner<K: HintSink> {
    sink: K,
    channel: String,
}

impl<K: HintSink> Runner<K> {
    pub fn new(sink: K) -> Self {
        Self::with_channel(sink, DEFAULT_CHANNEL)
    }

    pub fn with_channel(sink: K, channel: impl Into<String>) -> Self {
        Self {
            sink,
            channel: channel.into(),
        }
    }

    /// Hands the sink back, with everything emitted so far.
    pub fn into_sink(self) -> K {
        self.sink
    }

    pub fn run_suite(&mut self, entries: &[SuiteEntry]) -> Summary {
        let mut reports = Vec::with_capacity(entries.len());
        for entry in entries {
            reports.push(self.run_exercise(entry.scaffold.as_ref(), &entry.exercise));
        }
        Summary::from_reports(reports)
    }

    /// One-shot run of a single exercise. Capability misses hint and
    /// continue; a behavior mismatch hints, skips the remaining cases of
    /// that check, and fails the exercise.
    pub fn run_exercise(&mut self, scaffold: &dyn Scaffold, exercise: &Exercise) -> RunReport {
        tracing::info!("Checking exercise `{}`", exercise.id);

        let mut hints_emitted = 0;
        let mut missing_ops = Vec::new();

        // Probe with the first declared case's arguments, zeros otherwise,
        // mirroring the original argument-less constructor probe.
        let probe_args = exercise
            .behaviors
            .first()
            .and_then(|check| check.cases.first())
            .map(|case| case.args.clone())
            .unwrap_or_default();
        let probe = scaffold.construct(&probe_args);

        for check in &exercise.capabilities {
            if !probe.capabilities().contains(&check.op.as_str()) {
                tracing::warn!("{} does not expose `{}`", probe.name(), check.op);
                self.emit(&check.hint);
                hints_emitted += 1;
                missing_ops.push(check.op.clone());
            }
        }

        let mut state = ExerciseState::CapabilityChecked;
        tracing::debug!(exercise = %exercise.id, ?state, "capability step done");

        let mut failures = Vec::new();
        for check in &exercise.behaviors {
            if let Err(e) = self.check_behavior(scaffold, check) {
                tracing::warn!("`{}` behavior check failed: {}", check.op, e);
                self.emit(&check.hint);
                hints_emitted += 1;
                failures.push(e.to_string());
            }
        }

        state = ExerciseState::BehaviorChecked;
        tracing::debug!(exercise = %exercise.id, ?state, "behavior step done");

        state = if failures.is_empty() {
            ExerciseState::Passed
        } else {
            ExerciseState::Failed
        };
        tracing::info!("Exercise `{}` finished: {:?}", exercise.id, state);

        RunReport {
            id: exercise.id.clone(),
            state,
            missing_ops,
            failures,
            hints_emitted,
        }
    }

    /// Strict integer equality over the check's cases, stopping at the
    /// first mismatch. The error is what gets re-signalled upward.
    fn check_behavior(&self, scaffold: &dyn Scaffold, check: &BehaviorCheck) -> Result<()> {
        for case in &check.cases {
            let subject = scaffold.construct(&case.args);
            let actual = subject.invoke(&check.op)?;
            if actual != case.expected {
                return Err(HarnessError::IncorrectResult {
                    op: check.op.clone(),
                    args: case.args.clone(),
                    expected: case.expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn emit(&mut self, message: &str) {
        let hint = Hint::new(self.channel.clone(), message);
        self.sink.emit(&hint);
    }
}
