use thiserror::Error;

/// Errors raised while assembling a request. None of these reach the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Missing required parameter '{0}'")]
    MissingParameter(String),

    #[error("Operation '{operation}' does not accept parameter '{name}'")]
    UnknownParameter {
        operation: &'static str,
        name: String,
    },

    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Parameters must serialize to a JSON object: {0}")]
    InvalidParams(String),
}
