use crate::exercises;
use crate::utils::error::Result;
use crate::utils::validation::{validate_exercise_id, validate_known_ids, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hinted-koans")]
#[command(about = "Hinted assertion runner for the object-oriented starter exercises")]
pub struct CliConfig {
    /// Run only the listed exercises (comma-separated ids).
    #[arg(long, value_delimiter = ',')]
    pub exercise: Vec<String>,

    /// Suite manifest narrowing the selection and relabelling the hint channel.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// List the known exercise ids and exit.
    #[arg(long)]
    pub list: bool,

    /// Print the run summary as JSON.
    #[arg(long)]
    pub report_json: bool,

    /// Emit logs in JSON format.
    #[arg(long)]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for id in &self.exercise {
            validate_exercise_id("exercise", id)?;
        }
        validate_known_ids("exercise", &self.exercise, &exercises::exercise_ids())?;
        Ok(())
    }
}
