use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read channels file {path}: {source}")]
    ChannelsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse channels file: {0}")]
    ChannelsFileParse(#[from] serde_yaml::Error),

    #[error("channels validation failed: {0}")]
    Validation(String),
}
