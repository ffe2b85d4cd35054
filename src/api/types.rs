//! Wire types for the posts API.
//!
//! These mirror the JSON shapes served by the remote collection endpoints.
//! Fields the upstream omits on older records (`imageUrl`, `timestamp`) are
//! optional; everything else is required and a missing field is a decode
//! error, not a default.

use serde::Deserialize;

/// A single feed item as returned by `GET /posts`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: i64,
    /// Author reference. Resolved locally, never fetched.
    pub user_id: i64,
    pub title: String,
    pub body: String,
    /// Optional hero image URL. The upstream spells this one in camelCase.
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Optional ISO-8601 creation time, kept verbatim and parsed at render
    /// time so a malformed value degrades to "no timestamp" instead of
    /// failing the whole decode.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A reply to a post as returned by `GET /posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// A display-ready author profile.
///
/// Users are synthesized by the local directory (see [`crate::api::users`]),
/// so this type has no wire representation.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_with_minimal_fields() {
        let json = r#"{"id": 101, "user_id": 7, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 101);
        assert_eq!(post.user_id, 7);
        assert_eq!(post.title, "hello");
        assert_eq!(post.body, "world");
        assert_eq!(post.image_url, None);
        assert_eq!(post.timestamp, None);
    }

    #[test]
    fn post_decodes_optional_fields_when_present() {
        let json = r#"{
            "id": 1,
            "user_id": 2,
            "title": "t",
            "body": "b",
            "imageUrl": "https://img.example/1.png",
            "timestamp": "2026-01-05T12:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.image_url.as_deref(), Some("https://img.example/1.png"));
        assert_eq!(post.timestamp.as_deref(), Some("2026-01-05T12:00:00Z"));
    }

    #[test]
    fn post_ignores_unknown_fields() {
        // The upstream adds fields without notice; decoding must not care.
        let json = r#"{"id": 1, "user_id": 2, "title": "t", "body": "b", "views": 9001}"#;
        assert!(serde_json::from_str::<Post>(json).is_ok());
    }

    #[test]
    fn post_with_missing_required_field_is_an_error() {
        let json = r#"{"id": 1, "user_id": 2, "title": "t"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn comment_decodes() {
        let json = r#"{
            "id": 33,
            "post_id": 101,
            "name": "Reader",
            "email": "reader@example.com",
            "body": "nice one"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, 33);
        assert_eq!(comment.post_id, 101);
        assert_eq!(comment.body, "nice one");
    }

    #[test]
    fn comment_collection_preserves_order() {
        let json = r#"[
            {"id": 2, "post_id": 1, "name": "a", "email": "a@example.com", "body": "second"},
            {"id": 1, "post_id": 1, "name": "b", "email": "b@example.com", "body": "first"}
        ]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();
        // Collection order is the upstream's business; decoding keeps it.
        assert_eq!(comments[0].id, 2);
        assert_eq!(comments[1].id, 1);
    }
}
