use thiserror::Error;

/// Errors returned by the relay client.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay rejected the configured token.
    #[error("relay rejected credentials (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("channel not found: {channel}")]
    ChannelNotFound { channel: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid relay URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to write media to {path}: {source}")]
    MediaWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
