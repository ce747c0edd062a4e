//! Relay response envelopes.

use serde::Deserialize;
use vendorscope_core::RawPost;

/// Response body of `GET /v1/channels/{channel}/posts`.
#[derive(Debug, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<RawPost>,
}
