//! Client error taxonomy.

use thiserror::Error;

/// Result type returned by every client operation.
pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a client operation can report.
///
/// The `Display` output is the human-readable message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network failure: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A 2xx body could not be read as the expected JSON.
    #[error("server returned an invalid response")]
    MalformedResponse,
    /// Required fields were missing; nothing was sent.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
}

impl ApiError {
    /// HTTP status, when the failure came from the backend.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<crate::transport::TransportError> for ApiError {
    fn from(error: crate::transport::TransportError) -> Self {
        ApiError::Transport(error.to_string())
    }
}

/// Errors raised while resolving client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported API base URL scheme {0} (expected http or https)")]
    UnsupportedScheme(String),
}
