use thiserror::Error;

/// Errors raised inside a platform adapter.
///
/// These never reach callers of the orchestrator: [`crate::fetch_platform`]
/// logs them and reports the platform as not connected.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered 2xx but reported a platform-level failure
    /// (unknown user, `"status": "FAILED"`, empty result).
    #[error("platform API error: {0}")]
    Api(String),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
