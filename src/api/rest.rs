//! REST implementation of the post source.
//!
//! Speaks the upstream's two collection endpoints:
//! - `GET {base}/posts`
//! - `GET {base}/posts/{id}/comments`
//!
//! Every call is a single attempt with no retry and no client-side timeout;
//! a slow upstream shows up as a long-running fetch, not a synthetic error.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{FetchError, PostSource};
use super::types::{Comment, Post};

/// Default API root. Overridable through config for tests and mirrors.
pub const DEFAULT_BASE_URL: &str = "https://gorest.co.in/public/v2";

/// REST-backed post source.
pub struct RestSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestSource {
    /// Creates a source rooted at `base_url`, with or without a trailing
    /// slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Runs one GET and decodes the JSON body.
    ///
    /// Decode failures are reported separately from transport failures so
    /// logs can tell a dead network from a changed schema.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GET {} failed: {} - {}", url, status, message);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("GET {} body did not decode: {}", url, e);
            FetchError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl PostSource for RestSource {
    fn name(&self) -> &str {
        "rest"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let posts: Vec<Post> = self.get_json("/posts").await?;
        info!("fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, FetchError> {
        let comments: Vec<Comment> = self.get_json(&format!("/posts/{post_id}/comments")).await?;
        info!("fetched {} comments for post {}", comments.len(), post_id);
        Ok(comments)
    }
}
