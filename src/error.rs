//! Error handling for the application

/// Application error type
///
/// Step validation never surfaces here: a rejected submit is an ordinary
/// [`crate::wizard::StepOutcome`]. These are the failures around the wizard.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration value for {key}: {value:?}")]
    Config { key: String, value: String },

    #[error("Unknown step: {0}")]
    UnknownStep(u8),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Session error: {0}")]
    Session(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    pub(crate) fn config(key: &str, value: impl Into<String>) -> Self {
        tracing::error!("Invalid configuration for {}", key);
        AppError::Config {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
