use crate::utils::error::Result;
use crate::utils::validation::{validate_exercise_id, validate_non_empty, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML suite manifest. The hosting platform uses it to narrow the
/// exercise selection for a lesson and to relabel the hint channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteManifest {
    pub suite: SuiteSection,
    #[serde(default)]
    pub exercises: Vec<String>,
    pub hints: Option<HintSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintSection {
    pub channel: Option<String>,
}

impl SuiteManifest {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let manifest: SuiteManifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn channel(&self) -> Option<&str> {
        self.hints.as_ref().and_then(|h| h.channel.as_deref())
    }
}

impl Validate for SuiteManifest {
    fn validate(&self) -> Result<()> {
        validate_non_empty("suite.name", &self.suite.name)?;
        for id in &self.exercises {
            validate_exercise_id("exercises", id)?;
        }
        if let Some(channel) = self.channel() {
            validate_non_empty("hints.channel", channel)?;
        }
        Ok(())
    }
}
