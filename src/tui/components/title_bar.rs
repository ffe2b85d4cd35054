//! # TitleBar Component
//!
//! Top status bar showing where the user is and what the app is doing.
//!
//! ## Responsibilities
//!
//! - Display the current screen ("Feed" or "Post")
//! - Display status messages (e.g., "Fetching posts...", "Feed unavailable")
//! - Animate a spinner while a fetch is in flight
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state, which makes it trivial to test and reason about:
//!
//! ```rust,ignore
//! let title_bar = TitleBar {
//!     screen_label: "Feed".to_string(),
//!     status_message: "Fetching posts...".to_string(),
//!     busy: true,
//!     spinner_frame: 3,
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ### State Ownership
//!
//! The props come from different sources:
//! - `screen_label`: derived from core App state (the active screen)
//! - `status_message`: core App state (set by the reducer)
//! - `busy` / `spinner_frame`: computed by the event loop each frame
//!
//! The TitleBar doesn't care where they come from. It just renders what it's
//! given.
//!
//! ## Conditional Formatting
//!
//! The title text changes based on state:
//!
//! 1. **Busy**: `"gazette (Feed) | Fetching posts... | ⠙"`
//! 2. **Status message**: `"gazette (Feed) | 12 posts"`
//! 3. **Default**: `"gazette (Feed)"`

use crate::tui::component::Component;
use crate::tui::components::spinner;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component showing screen, status, and fetch activity.
///
/// # Props
///
/// All fields are "props" (configuration from parent):
/// - `screen_label`: The active screen (e.g., "Feed", "Post")
/// - `status_message`: Transient status (e.g., "Fetching posts...")
/// - `busy`: Whether a fetch is in flight
/// - `spinner_frame`: Animation counter from the event loop
pub struct TitleBar {
    /// Active screen label (e.g., "Feed")
    pub screen_label: String,
    /// Status message (e.g., "Fetching posts...", "12 posts")
    pub status_message: String,
    /// Whether a fetch is in flight for the active screen
    pub busy: bool,
    /// Animation counter; only read while `busy`
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(
        screen_label: String,
        status_message: String,
        busy: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            screen_label,
            status_message,
            busy,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    ///
    /// # Layout
    ///
    /// The title bar is always a single line (height 1). It shows:
    /// - App and screen name (always visible)
    /// - Status message (if present)
    /// - Spinner (if busy)
    ///
    /// # Design: Why not use a Block widget?
    ///
    /// We use a plain Span rather than a Block because:
    /// 1. Title bar is always 1 line, so there is nothing to border or pad
    /// 2. Span is lighter weight (no border rendering overhead)
    /// 3. Simpler to test (just check the text content)
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = format!("gazette ({})", self.screen_label);
        if !self.status_message.is_empty() {
            title_text.push_str(&format!(" | {}", self.status_message));
        }
        if self.busy {
            title_text.push_str(&format!(" | {}", spinner::glyph(self.spinner_frame)));
        }

        frame.render_widget(Span::raw(title_text), area);
    }
}
