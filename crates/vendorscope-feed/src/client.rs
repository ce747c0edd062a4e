//! HTTP client for the channel relay API.
//!
//! All requests carry the configured bearer token. Each call is a single
//! attempt; failures are surfaced as [`FeedError`] and the caller decides
//! whether they are fatal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use vendorscope_core::{PostSource, RawPost};

use crate::error::FeedError;
use crate::types::PostsResponse;

/// Client for the channel relay.
///
/// Use [`FeedClient::new`] with the base URL from configuration; tests point
/// it at a `wiremock` server.
pub struct FeedClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl FeedClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FeedError::InvalidUrl`] if `base_url`
    /// does not parse as an absolute URL.
    pub fn new(
        base_url: &str,
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so path segments append under any prefix.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FeedError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FeedError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
        })
    }

    /// Checks that the relay accepts our token via `GET /v1/me`.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Unauthorized`] on HTTP 401 or 403.
    /// - [`FeedError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`FeedError::Http`] on network failure.
    pub async fn check_auth(&self) -> Result<(), FeedError> {
        let url = self.endpoint(&["v1", "me"])?;
        let response = self.client.get(url.clone()).bearer_auth(&self.token).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FeedError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(())
    }

    /// Fetches up to `limit` recent posts for `channel`.
    ///
    /// # Errors
    ///
    /// - [`FeedError::ChannelNotFound`] on HTTP 404.
    /// - [`FeedError::Unauthorized`] on HTTP 401 or 403.
    /// - [`FeedError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`FeedError::Deserialize`] if the body is not a posts envelope.
    /// - [`FeedError::Http`] on network failure.
    pub async fn recent_posts(&self, channel: &str, limit: u32) -> Result<Vec<RawPost>, FeedError> {
        let mut url = self.endpoint(&["v1", "channels", channel, "posts"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let response = self.client.get(url.clone()).bearer_auth(&self.token).send().await?;
        let response = Self::check_channel_status(response, channel, &url)?;
        let body = response.text().await?;

        let envelope: PostsResponse =
            serde_json::from_str(&body).map_err(|e| FeedError::Deserialize {
                context: format!("posts(channel={channel})"),
                source: e,
            })?;

        tracing::debug!(channel, count = envelope.posts.len(), "fetched posts");
        Ok(envelope.posts)
    }

    /// Downloads the media payload of message `message_id` into `dest`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// - [`FeedError::ChannelNotFound`] on HTTP 404.
    /// - [`FeedError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`FeedError::MediaWrite`] if the file cannot be written.
    /// - [`FeedError::Http`] on network failure.
    pub async fn fetch_media(
        &self,
        channel: &str,
        message_id: i64,
        dest: &Path,
    ) -> Result<PathBuf, FeedError> {
        let id = message_id.to_string();
        let url = self.endpoint(&["v1", "channels", channel, "posts", &id, "media"])?;

        let response = self.client.get(url.clone()).bearer_auth(&self.token).send().await?;
        let response = Self::check_channel_status(response, channel, &url)?;
        let bytes = response.bytes().await?;

        let write_err = |source| FeedError::MediaWrite {
            path: dest.display().to_string(),
            source,
        };
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }
        tokio::fs::write(dest, &bytes).await.map_err(write_err)?;

        Ok(dest.to_path_buf())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FeedError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FeedError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn check_channel_status(
        response: reqwest::Response,
        channel: &str,
        url: &Url,
    ) -> Result<reqwest::Response, FeedError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(match status {
            StatusCode::NOT_FOUND => FeedError::ChannelNotFound {
                channel: channel.to_string(),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FeedError::Unauthorized {
                status: status.as_u16(),
            },
            _ => FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            },
        })
    }
}

impl PostSource for FeedClient {
    type Error = FeedError;

    async fn authenticate(&self) -> Result<(), FeedError> {
        self.check_auth().await
    }

    async fn fetch_posts(&self, channel: &str, limit: u32) -> Result<Vec<RawPost>, FeedError> {
        self.recent_posts(channel, limit).await
    }

    async fn download_media(
        &self,
        channel: &str,
        post: &RawPost,
        dest: &Path,
    ) -> Result<PathBuf, FeedError> {
        self.fetch_media(channel, post.id, dest).await
    }
}
