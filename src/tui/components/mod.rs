//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing screen, status, and fetch activity
//! - `PostCard`: One feed entry (author, preview, engagement row)
//! - `CommentCard`: One comment in the detail thread
//! - `LoadingView`: Centered spinner for whole-screen waits
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `FeedList`: Scrollable post collection with selection and layout caching
//! - `DetailView`: Scrollable post-plus-comments view
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally. For example, `FeedList` renders multiple
//! `PostCard` components, and `DetailView` renders `CommentCard`s.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! - State types
//! - Event types
//! - Rendering logic
//! - Event handling
//! - Tests
//!
//! **Why:** Makes components self-contained and easy to understand. You can
//! read one file to understand how a component works, rather than jumping
//! between multiple files.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields filled by the
//! parent), not by directly accessing global state. This makes dependencies
//! explicit and components testable.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── post_card.rs     (Single feed entry)
//! ├── feed_list.rs     (Scrollable post container)
//! ├── detail_view.rs   (Post with its comment thread)
//! ├── comment_card.rs  (Single comment)
//! └── spinner.rs       (Shared busy indicator)
//! ```

// Re-export components
mod title_bar;
pub use title_bar::TitleBar;

pub mod comment_card;
pub mod detail_view;
pub mod feed_list;
pub mod post_card;
pub mod spinner;
pub use comment_card::CommentCard;
pub use detail_view::{DetailView, DetailViewState};
pub use feed_list::{FeedEvent, FeedList, FeedListState};
pub use post_card::{CardState, PostCard};
pub use spinner::LoadingView;
