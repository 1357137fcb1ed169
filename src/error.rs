use http::StatusCode;
use thiserror::Error;

/// The client's error type.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A transport-level failure (connect, timeout, TLS, body decode).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx response from the API, with the server-provided message.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// The message extracted from the response body.
        message: String,
    },

    /// A validation error raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A `Result` type that uses `ApiError` as the error type.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Returns the HTTP status code when the server rejected the request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the error is a 401 from the server (expired or invalid token).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
