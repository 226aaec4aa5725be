use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("operation `{op}` is not exposed by {subject}")]
    MissingCapability { subject: String, op: String },

    #[error("`{op}` returned {actual} for arguments {args:?}, expected {expected}")]
    IncorrectResult {
        op: String,
        args: Vec<i64>,
        expected: i64,
        actual: i64,
    },

    #[error("{failed} of {total} exercises failed")]
    SuiteFailed { failed: usize, total: usize },

    #[error("Invalid value for `{field}`: `{value}` ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Manifest parse error: {0}")]
    ManifestError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
