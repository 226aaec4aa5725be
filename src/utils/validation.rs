use crate::utils::error::{HarnessError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Exercise identifiers use lowercase kebab-case, matching the scaffold
/// file names the learner sees.
pub fn validate_exercise_id(field_name: &str, id: &str) -> Result<()> {
    validate_non_empty(field_name, id)?;

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "exercise ids are lowercase kebab-case".to_string(),
        });
    }

    Ok(())
}

pub fn validate_known_ids(field_name: &str, requested: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for id in requested {
        if !known_set.contains(id.as_str()) {
            return Err(HarnessError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: format!("unknown exercise. Known exercises: {}", known.join(", ")),
            });
        }
    }

    Ok(())
}
