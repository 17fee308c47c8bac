//! Error type shared by the transport, the client, and configuration loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, TLS, or timeout failure reported by reqwest.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response envelope carried a non-zero code.
    #[error("API error {code}: {msg}")]
    Api { code: i64, msg: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The URL has no path to append endpoints to, e.g. `mailto:`.
    #[error("{0} cannot be used as a base URL")]
    NotABaseUrl(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Envelope code for `Api` errors.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
