//! # DetailView Component
//!
//! The full post with its resolved author and comment thread.
//!
//! ## Responsibilities
//!
//! - Full (unclamped) title and body, wrapped to the viewport
//! - Author identity once resolution finishes, a placeholder before
//! - The comment thread, or the pending/empty/unavailable line for it
//! - Scrolling over the whole of the above
//!
//! During a refresh the previously loaded content stays on screen; only the
//! title bar signals that a fetch is in flight.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::api::Comment;
use crate::core::state::{CommentsState, DetailState};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::comment_card::CommentCard;
use crate::tui::components::post_card::{ellipsize, initials, relative_age};
use crate::tui::components::spinner;
use crate::tui::event::TuiEvent;

/// Scroll state for the detail screen. Persisted in the parent TuiState and
/// reset whenever a different post opens.
pub struct DetailViewState {
    pub scroll_state: ScrollViewState,
    pub viewport_height: u16,
    /// Content height from the last render, for clamping between frames.
    total_height: u16,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
            total_height: 0,
        }
    }

    /// Back to the top. The scroll position of one post must not carry over
    /// to the next.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.total_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl Default for DetailViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Detail screen component.
/// Created fresh each frame with references to state and data.
pub struct DetailView<'a> {
    pub state: &'a mut DetailViewState,
    pub detail: &'a DetailState,
    pub spinner_frame: usize,
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = &mut *self.state;
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        if content_width == 0 {
            return;
        }

        let top_lines = header_lines(self.detail, content_width, self.spinner_frame);
        let top_height = top_lines.len() as u16;

        let comments: &[Comment] = match &self.detail.comments {
            CommentsState::Loaded(list) => list,
            _ => &[],
        };
        let card_heights: Vec<u16> = comments
            .iter()
            .map(|c| CommentCard::calculate_height(c, content_width))
            .collect();
        let cards_height: u16 = card_heights.iter().sum();

        state.total_height = top_height + cards_height;
        state.viewport_height = area.height;
        state.clamp_scroll();

        let mut scroll_view =
            ScrollView::new(Size::new(content_width, state.total_height.max(1)))
                .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
                .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(
            Paragraph::new(top_lines),
            Rect::new(0, 0, content_width, top_height),
        );

        let mut y_offset = top_height;
        for (comment, height) in comments.iter().zip(card_heights) {
            scroll_view.render_widget(
                CommentCard { comment },
                Rect::new(0, y_offset, content_width, height),
            );
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);
    }
}

/// Everything above the comment cards, pre-wrapped so the line count is the
/// block's height.
fn header_lines(detail: &DetailState, width: u16, spinner_frame: usize) -> Vec<Line<'static>> {
    let meta_style = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    match &detail.author {
        Some(author) => {
            let badge = format!(" {} ", initials(&author.name));
            let name_width =
                (width as usize).saturating_sub(UnicodeWidthStr::width(badge.as_str()) + 1);
            let mut spans = vec![
                Span::styled(badge, Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    ellipsize(&author.name, name_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            spans.push(Span::styled(format!("  {}", author.email), meta_style));
            if let Some(age) = detail.post.timestamp.as_deref().and_then(relative_age) {
                spans.push(Span::styled(format!(" · {}", age), meta_style));
            }
            lines.push(Line::from(spans));
        }
        None => lines.push(Line::styled(
            "Loading author...",
            meta_style.add_modifier(Modifier::ITALIC),
        )),
    }
    lines.push(Line::default());

    for title_line in wrap_full(&detail.post.title, width) {
        lines.push(Line::styled(
            title_line,
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::default());
    for body_line in wrap_full(&detail.post.body, width) {
        lines.push(Line::from(body_line));
    }
    lines.push(Line::default());

    let section_title = match &detail.comments {
        CommentsState::Loaded(list) => comment_header(list.len()),
        _ => String::from("Comments"),
    };
    lines.push(Line::styled(
        section_title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    match &detail.comments {
        CommentsState::Pending => lines.push(Line::styled(
            format!("{} Loading comments...", spinner::glyph(spinner_frame)),
            meta_style,
        )),
        CommentsState::Loaded(list) if list.is_empty() => lines.push(Line::styled(
            "No comments yet",
            meta_style.add_modifier(Modifier::ITALIC),
        )),
        CommentsState::Unavailable(reason) => {
            for error_line in wrap_full(&format!("Comments unavailable: {}", reason), width) {
                lines.push(Line::styled(error_line, Style::default().fg(Color::Red)));
            }
        }
        CommentsState::Loaded(_) => {}
    }

    lines
}

/// Count-first section header, singular-aware.
fn comment_header(count: usize) -> String {
    if count == 1 {
        String::from("1 Comment")
    } else {
        format!("{} Comments", count)
    }
}

/// Wraps without any clamp; the detail screen shows text in full.
fn wrap_full(text: &str, width: u16) -> Vec<String> {
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let wrapped = textwrap::wrap(text.trim(), options);
    if wrapped.is_empty() {
        return vec![String::new()];
    }
    wrapped.iter().map(|l| l.to_string()).collect()
}

/// EventHandler lives on `DetailViewState` for the same reason as the feed:
/// scrolling needs state that outlives the per-frame component.
impl EventHandler for DetailViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SelectUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::SelectDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::PageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}
