//! Post shapes at both ends of the record builder.
//!
//! [`RawPost`] is what a [`crate::PostSource`] hands back for one channel
//! message. [`PostRecord`] is the normalized, persisted form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media attached to a raw post, as reported by the retrieval source.
///
/// The source tags each attachment with a `kind`. Anything that is neither a
/// photo nor a document (link previews, polls, stickers exposed as web pages)
/// deserializes to [`MediaDescriptor::Unsupported`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaDescriptor {
    Photo,
    Document {
        #[serde(default)]
        mime_type: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

/// One message as returned by the retrieval source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    /// Message id, unique within its channel.
    pub id: i64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub text: Option<String>,
    /// View counter. Absent when the source does not report one.
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub media: Option<MediaDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    None,
    Photo,
    Document,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::None => write!(f, "none"),
            MediaType::Photo => write!(f, "photo"),
            MediaType::Document => write!(f, "document"),
        }
    }
}

/// A normalized post.
///
/// `processed_text` is derived from `raw_text` and `tokens` from
/// `processed_text`. `media_path` is only set when media was persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub channel: String,
    pub message_id: i64,
    pub timestamp: DateTime<Utc>,
    pub raw_text: Option<String>,
    pub views: u64,
    pub media_type: MediaType,
    pub media_path: Option<String>,
    pub processed_text: String,
    pub tokens: Vec<String>,
}
