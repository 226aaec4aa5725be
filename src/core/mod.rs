pub mod report;
pub mod runner;
pub mod sink;

pub use crate::domain::model::{BehaviorCheck, CapabilityCheck, Case, Exercise, ExerciseState, Hint};
pub use crate::domain::ports::{HintSink, Scaffold, Subject};
pub use crate::utils::error::Result;
