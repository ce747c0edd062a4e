use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The retrieval source rejected our credentials or could not be reached.
    /// Aborts the run before any channel is processed.
    #[error("authentication with the post source failed: {0}")]
    Authentication(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
