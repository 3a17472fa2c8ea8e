use thiserror::Error;

pub type RoiResult<T> = Result<T, RoiError>;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input validation error: {0}")]
    Validation(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: String, value: String },

    #[error("Scenario limit reached: at most {0} scenarios can be saved")]
    ScenarioLimit(usize),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),


    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<::config::ConfigError> for RoiError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
