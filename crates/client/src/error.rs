//! Client error types.

use calendly_core::{BuildError, ResponseError};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing required parameter '{0}'")]
    MissingParameter(String),

    #[error("Operation '{operation}' does not accept parameter '{name}'")]
    UnknownParameter {
        operation: &'static str,
        name: String,
    },

    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of a server error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error body parsed as JSON, when it is JSON.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            ClientError::Http { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

impl From<BuildError> for ClientError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::MissingParameter(name) => ClientError::MissingParameter(name),
            BuildError::UnknownParameter { operation, name } => {
                ClientError::UnknownParameter { operation, name }
            }
            BuildError::InvalidParameter { name, value } => {
                ClientError::InvalidParameter { name, value }
            }
            BuildError::InvalidUrl(message) | BuildError::InvalidParams(message) => {
                ClientError::InvalidRequest(message)
            }
        }
    }
}

impl From<ResponseError> for ClientError {
    fn from(err: ResponseError) -> Self {
        match err {
            ResponseError::Http { status, body } => ClientError::Http { status, body },
            ResponseError::Decode(e) => ClientError::Decode(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_http_error_accessors() {
        let err = ClientError::from(ResponseError::Http {
            status: 404,
            body: r#"{"message":"not found"}"#.to_string(),
        });

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body_json(), Some(json!({ "message": "not found" })));
        assert_eq!(err.to_string(), r#"Server returned 404: {"message":"not found"}"#);
    }

    #[test]
    fn test_build_errors_map_one_to_one() {
        let err = ClientError::from(BuildError::MissingParameter("uuid".to_string()));
        assert!(matches!(err, ClientError::MissingParameter(ref name) if name == "uuid"));
        assert_eq!(err.status(), None);

        let err = ClientError::from(BuildError::InvalidParameter {
            name: "uuid".to_string(),
            value: ".".to_string(),
        });
        assert!(matches!(err, ClientError::InvalidParameter { ref value, .. } if value == "."));

        let err = ClientError::from(BuildError::InvalidUrl("nope".to_string()));
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_non_json_body() {
        let err = ClientError::Http {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.body_json(), None);
    }
}
