//! # Application State
//!
//! Core business state for gazette. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn PostSource>    // posts + comments backend
//! ├── screen: Screen                 // Feed or Detail
//! ├── feed: FeedState                // Loading | Loaded | Failed
//! ├── detail: Option<DetailState>    // present while Detail is on screen
//! ├── status_message: String         // status bar text
//! ├── seed: u64                      // seeds the synthesized card counts
//! ├── feed_generation: u64           // stale feed results are dropped
//! └── detail_generation: u64         // stale detail results are dropped
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::{Comment, Post, PostSource, User};
use crate::core::config::ResolvedConfig;
use std::sync::Arc;

/// Which screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Feed,
    Detail,
}

/// Lifecycle of the post collection.
///
/// `Loaded` with an empty vec and `Failed` are distinct on purpose: an empty
/// feed renders as "no posts", a failed one as an error with the reason.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded(Vec<Post>),
    Failed(String),
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// The loaded posts, or an empty slice in any other state.
    pub fn posts(&self) -> &[Post] {
        match self {
            FeedState::Loaded(posts) => posts,
            _ => &[],
        }
    }
}

/// Lifecycle of the detail screen.
///
/// `Refreshing` is only entered from `Ready`; the first load uses `Loading`.
/// The distinction matters for rendering: a refresh keeps the previous
/// comments on screen, a first load shows a spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Loading,
    Ready,
    Refreshing,
}

/// Comments as the detail screen sees them.
///
/// `Pending` (not yet fetched) and `Loaded(vec![])` (fetched, nothing there)
/// render differently, so they are separate states rather than an empty vec
/// doing double duty.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentsState {
    Pending,
    Loaded(Vec<Comment>),
    /// The fetch failed; the screen stays usable and shows the reason.
    Unavailable(String),
}

/// Everything the detail screen needs, built around the already-loaded post.
///
/// The post itself is carried in, never re-fetched, and never mutated here.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub post: Post,
    pub phase: DetailPhase,
    pub author: Option<User>,
    pub comments: CommentsState,
}

impl DetailState {
    pub fn new(post: Post) -> Self {
        Self {
            post,
            phase: DetailPhase::Loading,
            author: None,
            comments: CommentsState::Pending,
        }
    }

    /// True while a fetch for this screen is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading | DetailPhase::Refreshing)
    }

    pub fn comment_count(&self) -> usize {
        match &self.comments {
            CommentsState::Loaded(comments) => comments.len(),
            _ => 0,
        }
    }
}

pub struct App {
    pub source: Arc<dyn PostSource>,
    pub screen: Screen,
    pub feed: FeedState,
    pub detail: Option<DetailState>,
    pub status_message: String,
    pub seed: u64,
    /// Bumped on every feed fetch; results tagged with an older value are
    /// ignored by the reducer.
    pub feed_generation: u64,
    /// Same guard for detail fetches. Also bumped when the detail screen
    /// closes, so a late result cannot write into a torn-down view.
    pub detail_generation: u64,
}

impl App {
    pub fn new(source: Arc<dyn PostSource>, seed: u64) -> Self {
        Self {
            source,
            screen: Screen::Feed,
            feed: FeedState::Loading,
            detail: None,
            status_message: String::from("Welcome to gazette!"),
            seed,
            feed_generation: 0,
            detail_generation: 0,
        }
    }

    pub fn from_config(source: Arc<dyn PostSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.seed)
    }

    /// True while the visible screen has a fetch in flight. Drives the
    /// spinner animation and the event loop's frame rate.
    pub fn is_busy(&self) -> bool {
        match self.screen {
            Screen::Feed => self.feed.is_loading(),
            Screen::Detail => self.detail.as_ref().is_some_and(|d| d.is_busy()),
        }
    }
}
