use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Failed to load {dataset}: {reason}")]
    LoadFailure { dataset: String, reason: String },

    #[error("Invalid {dataset} data: {reason}")]
    ValidationFailure { dataset: String, reason: String },

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Unknown time range: {0}")]
    UnknownTimeRange(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashError {
    pub fn load(dataset: &str, reason: impl Into<String>) -> Self {
        DashError::LoadFailure {
            dataset: dataset.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid(dataset: &str, reason: impl Into<String>) -> Self {
        DashError::ValidationFailure {
            dataset: dataset.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
