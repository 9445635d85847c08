use thiserror::Error;

/// Errors raised while interpreting a response.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The server answered with a status outside 200..=299.
    #[error("Server returned {status}: {body}")]
    Http { status: u16, body: String },

    /// A JSON body was expected but could not be decoded.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}
