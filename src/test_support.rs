//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{Comment, FetchError, Post, PostSource, User, users};
use crate::core::state::App;

/// Scripted source for tests: canned collections, flag-controlled failures.
#[derive(Default)]
pub struct StubSource {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub fail_posts: bool,
    pub fail_comments: bool,
    pub fail_user: bool,
}

#[async_trait]
impl PostSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        if self.fail_posts {
            Err(FetchError::Network("stub: posts offline".to_string()))
        } else {
            Ok(self.posts.clone())
        }
    }

    async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, FetchError> {
        if self.fail_comments {
            Err(FetchError::Network("stub: comments offline".to_string()))
        } else {
            Ok(self
                .comments
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect())
        }
    }

    async fn resolve_user(&self, user_id: i64) -> Result<User, FetchError> {
        if self.fail_user {
            Err(FetchError::Network("stub: directory offline".to_string()))
        } else {
            Ok(users::resolve(user_id))
        }
    }
}

/// Creates a test App backed by an empty StubSource, with a fixed seed.
pub fn test_app() -> App {
    App::new(Arc::new(StubSource::default()), 7)
}

/// A post with predictable content; `user_id` mirrors the post id.
pub fn make_post(id: i64) -> Post {
    Post {
        id,
        user_id: id,
        title: format!("Post {}", id),
        body: format!("Body of post {}", id),
        image_url: None,
        timestamp: None,
    }
}

pub fn make_comment(id: i64, post_id: i64) -> Comment {
    Comment {
        id,
        post_id,
        name: format!("Commenter {}", id),
        email: format!("commenter{}@example.com", id),
        body: format!("Comment {} on post {}", id, post_id),
    }
}
