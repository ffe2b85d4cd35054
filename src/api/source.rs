//! The fetch-layer contract.
//!
//! [`PostSource`] is the seam between the app core and any concrete backend:
//! the REST client in production, scripted stubs in tests. Callers get typed
//! collections or a [`FetchError`]; they never see status codes, URLs, or
//! JSON.

use async_trait::async_trait;
use std::fmt;

use super::types::{Comment, Post, User};
use super::users;

/// Errors surfaced by a post source.
///
/// Callers treat every variant the same way (the request failed, the view
/// shows its fallback); the split exists for logs and tests.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, broken read.
    Network(String),
    /// The upstream answered with a non-success status.
    Api { status: u16, message: String },
    /// The body arrived but did not decode into the expected shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            FetchError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of posts, comments, and author profiles.
///
/// Fetches are single-attempt: no retry, no timeout beyond the transport's
/// own. Whatever order the source keeps its collections in is the order the
/// caller receives.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Short source name for logs.
    fn name(&self) -> &str;

    /// Fetches the full post collection.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Fetches the comments of one post. An empty list is a normal,
    /// successful result, not an error.
    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, FetchError>;

    /// Resolves the author profile for a user id.
    ///
    /// The default implementation goes through the local directory and never
    /// fails; the `Result` stays in the signature so callers keep their
    /// fallback path and test doubles can exercise it.
    async fn resolve_user(&self, user_id: i64) -> Result<User, FetchError> {
        Ok(users::resolve(user_id))
    }
}
