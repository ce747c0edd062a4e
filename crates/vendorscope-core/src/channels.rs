use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub username: String,
    pub notes: Option<String>,
}

impl ChannelConfig {
    /// Channel handle without a leading `@`.
    #[must_use]
    pub fn handle(&self) -> &str {
        self.username.trim().trim_start_matches('@')
    }
}

#[derive(Debug, Deserialize)]
pub struct ChannelsFile {
    pub channels: Vec<ChannelConfig>,
}

impl ChannelsFile {
    /// Channel handles in file order.
    #[must_use]
    pub fn handles(&self) -> Vec<String> {
        self.channels
            .iter()
            .map(|c| c.handle().to_string())
            .collect()
    }
}

/// Load and validate the channel list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_channels(path: &Path) -> Result<ChannelsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ChannelsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let channels_file: ChannelsFile = serde_yaml::from_str(&content)?;

    validate_channels(&channels_file)?;

    Ok(channels_file)
}

fn validate_channels(channels_file: &ChannelsFile) -> Result<(), ConfigError> {
    if channels_file.channels.is_empty() {
        return Err(ConfigError::Validation(
            "channel list must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for channel in &channels_file.channels {
        let handle = channel.handle();
        if handle.is_empty() {
            return Err(ConfigError::Validation(
                "channel username must be non-empty".to_string(),
            ));
        }
        if handle.contains(['/', '\\']) || handle.contains("..") {
            return Err(ConfigError::Validation(format!(
                "channel username must not contain path separators: '{handle}'"
            )));
        }
        if !seen.insert(handle.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate channel: '{handle}'"
            )));
        }
    }

    Ok(())
}
