//! # Actions
//!
//! Everything that can happen in gazette becomes an `Action`.
//! User opens a post? That's `Action::OpenPost(post)`.
//! A fetch lands? That's `Action::FeedLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state. No side effects here. I/O happens elsewhere: `update` returns
//! an [`Effect`] and the event loop spawns the matching task.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch results carry the generation they were spawned under. The reducer
//! drops any result whose generation is no longer current, which is the
//! entire stale-write story: closing a screen or starting a newer fetch
//! bumps the generation, and late arrivals become no-ops.

use log::{debug, warn};

use crate::api::{Comment, FetchError, Post, User, users};
use crate::core::state::{App, CommentsState, DetailPhase, DetailState, FeedState, Screen};

#[derive(Debug)]
pub enum Action {
    /// Kick off the one feed fetch. Issued once, when the feed mounts.
    LoadFeed,
    /// The feed fetch finished, well or badly.
    FeedLoaded {
        generation: u64,
        result: Result<Vec<Post>, FetchError>,
    },
    /// A post was activated in the feed.
    OpenPost(Post),
    /// The detail screen was dismissed.
    CloseDetail,
    /// Re-fetch the open post's author and comments.
    RefreshDetail,
    /// Author resolution and the comment fetch finished together.
    ///
    /// The two complete as one action so completion order can never leave
    /// the screen half-updated.
    DetailLoaded {
        generation: u64,
        author: Result<User, FetchError>,
        comments: Result<Vec<Comment>, FetchError>,
    },
    Quit,
}

/// What the event loop must do after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the feed fetch for the current `feed_generation`.
    FetchFeed,
    /// Spawn the author + comments fetch for the current `detail_generation`.
    FetchDetail,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadFeed => {
            app.feed_generation += 1;
            app.feed = FeedState::Loading;
            app.status_message = String::from("Fetching posts...");
            Effect::FetchFeed
        }

        Action::FeedLoaded { generation, result } => {
            if generation != app.feed_generation {
                debug!(
                    "Dropping stale feed result (generation {}, current {})",
                    generation, app.feed_generation
                );
                return Effect::None;
            }
            match result {
                Ok(posts) => {
                    app.status_message = feed_summary(posts.len());
                    app.feed = FeedState::Loaded(posts);
                }
                Err(e) => {
                    warn!("Feed fetch failed: {}", e);
                    app.status_message = String::from("Feed unavailable");
                    app.feed = FeedState::Failed(e.to_string());
                }
            }
            Effect::None
        }

        Action::OpenPost(post) => {
            // The feed takes no activation while its own fetch is in flight.
            if app.feed.is_loading() {
                return Effect::None;
            }
            app.detail_generation += 1;
            app.detail = Some(DetailState::new(post));
            app.screen = Screen::Detail;
            app.status_message = String::from("Loading comments...");
            Effect::FetchDetail
        }

        Action::CloseDetail => {
            // Invalidate any in-flight detail fetch before tearing down.
            app.detail_generation += 1;
            app.detail = None;
            app.screen = Screen::Feed;
            app.status_message = match &app.feed {
                FeedState::Loading => String::from("Fetching posts..."),
                FeedState::Loaded(posts) => feed_summary(posts.len()),
                FeedState::Failed(_) => String::from("Feed unavailable"),
            };
            Effect::None
        }

        Action::RefreshDetail => match app.detail.as_mut() {
            // Refreshing only re-enters from Ready; a refresh during
            // Loading or another refresh is ignored.
            Some(detail) if detail.phase == DetailPhase::Ready => {
                detail.phase = DetailPhase::Refreshing;
                app.detail_generation += 1;
                app.status_message = String::from("Refreshing...");
                Effect::FetchDetail
            }
            _ => Effect::None,
        },

        Action::DetailLoaded {
            generation,
            author,
            comments,
        } => {
            if generation != app.detail_generation {
                debug!(
                    "Dropping stale detail result (generation {}, current {})",
                    generation, app.detail_generation
                );
                return Effect::None;
            }
            // Close bumps the generation, so a current result implies a
            // live screen; guard anyway rather than panic.
            let Some(detail) = app.detail.as_mut() else {
                warn!("Detail result arrived with no detail screen open");
                return Effect::None;
            };
            // A failed author lookup degrades to the placeholder profile;
            // the screen never errors over a missing author line.
            let user_id = detail.post.user_id;
            detail.author = Some(author.unwrap_or_else(|e| {
                debug!("Author resolution failed, using placeholder: {}", e);
                users::anonymous(user_id)
            }));
            match comments {
                Ok(comments) => {
                    app.status_message = comment_summary(comments.len());
                    detail.comments = CommentsState::Loaded(comments);
                }
                Err(e) => {
                    warn!("Comment fetch failed: {}", e);
                    app.status_message = String::from("Comments unavailable");
                    detail.comments = CommentsState::Unavailable(e.to_string());
                }
            }
            detail.phase = DetailPhase::Ready;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

fn feed_summary(count: usize) -> String {
    match count {
        0 => String::from("No posts yet"),
        1 => String::from("1 post"),
        n => format!("{} posts", n),
    }
}

fn comment_summary(count: usize) -> String {
    match count {
        0 => String::from("No comments yet"),
        1 => String::from("1 comment"),
        n => format!("{} comments", n),
    }
}
