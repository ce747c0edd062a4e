//! Builds [`PostRecord`]s from raw posts.
//!
//! [`build_record`] is the pure part: classification, normalization, and
//! tokenization. [`PostRecordBuilder`] adds the optional persistence side
//! effects (media download and the per-post JSON document). A persistence
//! failure never invalidates the record it was computed for.

use vendorscope_core::{PostRecord, PostSource, RawPost};

use crate::media::classify;
use crate::store::RecordStore;
use crate::text::{normalize, tokenize};

/// Builds a record without touching the filesystem.
///
/// `media_path` is whatever the caller managed to persist, if anything.
#[must_use]
pub fn build_record(raw: &RawPost, channel: &str, media_path: Option<String>) -> PostRecord {
    let class = classify(raw.media.as_ref());
    let processed_text = normalize(raw.text.as_deref());
    let tokens = tokenize(Some(processed_text.as_str()));

    PostRecord {
        channel: channel.to_string(),
        message_id: raw.id,
        timestamp: raw.date,
        raw_text: raw.text.clone(),
        views: raw.views.unwrap_or(0),
        media_type: class.media_type,
        // Only attachments we know how to persist can have a path.
        media_path: class.extension.and(media_path),
        processed_text,
        tokens,
    }
}

/// Deterministic media file name: `{message_id}_{unix_timestamp}{extension}`.
#[must_use]
pub fn media_file_name(raw: &RawPost, extension: &str) -> String {
    format!("{}_{}{}", raw.id, raw.date.timestamp(), extension)
}

/// Record builder with optional persistence through a [`RecordStore`].
pub struct PostRecordBuilder<'a, S> {
    source: &'a S,
    store: Option<&'a RecordStore>,
}

impl<'a, S: PostSource> PostRecordBuilder<'a, S> {
    /// A builder that computes records only.
    #[must_use]
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            store: None,
        }
    }

    /// Persist media and per-post JSON documents into `store`.
    #[must_use]
    pub fn with_store(mut self, store: &'a RecordStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the record for `raw`, persisting media and the record itself
    /// when a store is configured.
    ///
    /// Media download and record write failures are logged; the returned
    /// record is always complete, with `media_path` left empty if the media
    /// could not be saved.
    pub async fn build(&self, raw: &RawPost, channel: &str) -> PostRecord {
        let Some(store) = self.store else {
            return build_record(raw, channel, None);
        };

        let media_path = match classify(raw.media.as_ref()).extension {
            Some(extension) => self.persist_media(store, raw, channel, extension).await,
            None => None,
        };

        let record = build_record(raw, channel, media_path);

        if let Err(e) = store.save_record(&record).await {
            tracing::warn!(
                channel,
                message_id = record.message_id,
                error = %e,
                "failed to persist post record"
            );
        }

        record
    }

    async fn persist_media(
        &self,
        store: &RecordStore,
        raw: &RawPost,
        channel: &str,
        extension: &str,
    ) -> Option<String> {
        let dest = store.media_path(&media_file_name(raw, extension));
        match self.source.download_media(channel, raw, &dest).await {
            Ok(path) => Some(path.display().to_string()),
            Err(e) => {
                tracing::warn!(
                    channel,
                    message_id = raw.id,
                    error = %e,
                    "media download failed; continuing without media path"
                );
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
