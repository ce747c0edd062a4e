//! Shared domain types, configuration, and the retrieval port for vendorscope.

pub mod app_config;
pub mod channels;
pub mod config;
pub mod error;
pub mod posts;
pub mod scorecard;
pub mod source;

pub use app_config::{AppConfig, Environment};
pub use channels::{load_channels, ChannelConfig, ChannelsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use posts::{MediaDescriptor, MediaType, PostRecord, RawPost};
pub use scorecard::{ChannelMetrics, ChannelScorecard};
pub use source::PostSource;
