use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Rate limited by data host, please try again later")]
    RateLimited,

    #[error("Failed to load {resource}: {message}")]
    JsonError { resource: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl AppError {
    pub fn json(resource: &str, err: impl std::fmt::Display) -> Self {
        AppError::JsonError {
            resource: resource.to_string(),
            message: err.to_string(),
        }
    }

    pub fn not_found(kind: &'static str, name: &str) -> Self {
        AppError::NotFound {
            kind,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
