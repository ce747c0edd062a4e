use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub feed_url: String,
    pub feed_token: String,
    pub env: Environment,
    pub log_level: String,
    pub channels_path: PathBuf,
    /// Posts sampled per channel by `analyze`.
    pub sample_limit: u32,
    /// Posts sampled per channel by `collect`.
    pub collect_limit: u32,
    pub data_dir: PathBuf,
    pub media_dir: PathBuf,
    pub output_path: PathBuf,
    pub records_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("feed_url", &self.feed_url)
            .field("feed_token", &"[redacted]")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("channels_path", &self.channels_path)
            .field("sample_limit", &self.sample_limit)
            .field("collect_limit", &self.collect_limit)
            .field("data_dir", &self.data_dir)
            .field("media_dir", &self.media_dir)
            .field("output_path", &self.output_path)
            .field("records_path", &self.records_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
