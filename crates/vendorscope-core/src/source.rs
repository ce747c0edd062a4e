//! Retrieval port.
//!
//! The pipeline never talks to the remote messaging service directly; it is
//! handed something implementing [`PostSource`]. The HTTP implementation lives
//! in `vendorscope-feed`, tests use in-memory fakes.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::posts::RawPost;

pub trait PostSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Verify credentials. Called once before any channel is fetched.
    fn authenticate(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Up to `limit` of the channel's most recent posts, in no particular order.
    fn fetch_posts(
        &self,
        channel: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<RawPost>, Self::Error>> + Send;

    /// Download the media attached to `post` into `dest`, returning the written path.
    fn download_media(
        &self,
        channel: &str,
        post: &RawPost,
        dest: &Path,
    ) -> impl Future<Output = Result<PathBuf, Self::Error>> + Send;
}
