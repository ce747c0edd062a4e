//! In-memory `PostSource` for unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use vendorscope_core::{MediaDescriptor, PostSource, RawPost};

#[derive(Debug, thiserror::Error)]
#[error("fake source: {0}")]
pub(crate) struct FakeError(pub String);

#[derive(Default)]
pub(crate) struct FakeSource {
    pub reject_auth: bool,
    pub fail_media: bool,
    pub channels: HashMap<String, Result<Vec<RawPost>, String>>,
    pub fetches: AtomicUsize,
    pub downloads: AtomicUsize,
}

impl FakeSource {
    pub fn with_channel(mut self, name: &str, posts: Vec<RawPost>) -> Self {
        self.channels.insert(name.to_string(), Ok(posts));
        self
    }

    pub fn with_failing_channel(mut self, name: &str, reason: &str) -> Self {
        self.channels
            .insert(name.to_string(), Err(reason.to_string()));
        self
    }
}

impl PostSource for FakeSource {
    type Error = FakeError;

    async fn authenticate(&self) -> Result<(), FakeError> {
        if self.reject_auth {
            Err(FakeError("bad credentials".to_string()))
        } else {
            Ok(())
        }
    }

    async fn fetch_posts(&self, channel: &str, limit: u32) -> Result<Vec<RawPost>, FakeError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.channels.get(channel) {
            Some(Ok(posts)) => Ok(posts.iter().take(limit as usize).cloned().collect()),
            Some(Err(reason)) => Err(FakeError(reason.clone())),
            None => Err(FakeError(format!("unknown channel {channel}"))),
        }
    }

    async fn download_media(
        &self,
        _channel: &str,
        post: &RawPost,
        dest: &Path,
    ) -> Result<PathBuf, FakeError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        if self.fail_media {
            return Err(FakeError(format!("media for {} unavailable", post.id)));
        }
        std::fs::write(dest, b"media").map_err(|e| FakeError(e.to_string()))?;
        Ok(dest.to_path_buf())
    }
}

pub(crate) fn day(offset_days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap() + Duration::days(offset_days)
}

pub(crate) fn raw_post(id: i64, date: DateTime<Utc>, views: Option<u64>, text: Option<&str>) -> RawPost {
    RawPost {
        id,
        date,
        text: text.map(str::to_string),
        views,
        media: None,
    }
}

pub(crate) fn photo_post(id: i64, date: DateTime<Utc>) -> RawPost {
    RawPost {
        media: Some(MediaDescriptor::Photo),
        ..raw_post(id, date, Some(1), Some("photo caption"))
    }
}
