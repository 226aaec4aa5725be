pub mod config;
pub mod core;
pub mod domain;
pub mod exercises;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::SuiteManifest;

pub use crate::core::report::{RunReport, Summary};
pub use crate::core::runner::{Runner, SuiteEntry};
pub use crate::core::sink::{MemorySink, StdoutSink};
pub use crate::utils::error::{HarnessError, Result};
