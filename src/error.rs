use thiserror::Error;

#[derive(Error, Debug)]
pub enum VibefyError {
    #[error("Division by zero: RICE effort must be nonzero")]
    DivisionByZero,

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Invalid payload for method '{method}': {reason}")]
    InvalidMethodPayload { method: String, reason: String },

    #[error("Inconsistent score for item '{0}': derived fields disagree with inputs")]
    InconsistentScore(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Project not initialized. Run 'vibefy init' first.")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, VibefyError>;
