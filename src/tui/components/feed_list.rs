//! # FeedList Component
//!
//! Scrollable view of the loaded posts.
//!
//! ## Responsibilities
//!
//! - Display the post collection in source order
//! - Keyboard selection and scrolling
//! - Per-card interaction state (likes, bookmarks), keyed by post id
//! - Cached card heights so the scroll canvas is sized without rendering
//!
//! ## Architecture
//!
//! `FeedList` is a transient component (created each frame) that wraps
//! `&'a mut FeedListState` (persistent state) and the loaded posts (props).
//! Posts never change after the feed loads, so cached heights only
//! invalidate when the width or the post count changes.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Post;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::post_card::{CardState, PostCard};
use crate::tui::event::TuiEvent;

/// High-level events the feed emits to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    /// The selected post (by index into the loaded collection) was opened.
    Activated(usize),
}

/// Layout, scroll, and card state for the feed.
/// Must be persisted in the parent TuiState.
pub struct FeedListState {
    pub scroll_state: ScrollViewState,
    /// Selected post index, or None until the first render after load.
    pub selected: Option<usize>,
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Number of posts seen at the last render; bounds the selection.
    pub item_count: usize,
    /// Card states keyed by post id. Entries are created on first sight of a
    /// post and live until the feed itself is dropped.
    cards: HashMap<i64, CardState>,
    seed: u64,
    cached_width: u16,
}

impl FeedListState {
    pub fn new(seed: u64) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: None,
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            viewport_height: 0,
            item_count: 0,
            cards: HashMap::new(),
            seed,
            cached_width: 0,
        }
    }

    /// The interaction state for one card, created from the seed on first
    /// access so counts are stable for the whole run.
    pub fn card_entry(&mut self, post_id: i64) -> &mut CardState {
        let seed = self.seed;
        self.cards
            .entry(post_id)
            .or_insert_with(|| CardState::seeded(post_id, seed))
    }

    /// Recompute card heights. Cheap no-op while width and count are stable.
    pub fn rebuild_layout(&mut self, posts: &[Post], content_width: u16) {
        if self.cached_width == content_width && self.heights.len() == posts.len() {
            return;
        }
        self.heights = posts
            .iter()
            .map(|p| PostCard::calculate_height(p, content_width))
            .collect();
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
        self.cached_width = content_width;
    }

    pub fn select_up(&mut self) {
        if self.item_count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    pub fn select_down(&mut self) {
        if self.item_count == 0 {
            self.selected = None;
            return;
        }
        let last = self.item_count - 1;
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
        self.scroll_to_selected();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }

        let item_top = if idx == 0 {
            0
        } else {
            self.prefix_heights[idx - 1]
        };
        let item_bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// The card indices worth rendering for the current scroll position,
    /// with half a viewport of buffer on each side.
    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}

/// Scrollable feed view component.
/// Created fresh each frame with references to state and data.
pub struct FeedList<'a> {
    pub state: &'a mut FeedListState,
    pub posts: &'a [Post],
}

impl Component for FeedList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = &mut *self.state;
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        state.rebuild_layout(self.posts, content_width);
        state.item_count = self.posts.len();
        state.viewport_height = area.height;

        // First render after load: select the top card.
        if state.selected.is_none() && !self.posts.is_empty() {
            state.selected = Some(0);
        }
        if let Some(idx) = state.selected
            && idx >= self.posts.len()
        {
            state.selected = self.posts.len().checked_sub(1);
        }

        state.clamp_scroll();

        let scroll_offset = state.scroll_state.offset().y;
        let visible_range = state.visible_range(scroll_offset, area.height);

        let total_height: u16 = state.heights.iter().sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            state.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let post = &self.posts[i];
            let height = state.heights[i];
            let is_selected = state.selected == Some(i);
            let seed = state.seed;
            let card = state
                .cards
                .entry(post.id)
                .or_insert_with(|| CardState::seeded(post.id, seed));

            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(
                PostCard {
                    post,
                    card,
                    is_selected,
                },
                card_rect,
            );
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);
    }
}

/// EventHandler lives on `FeedListState` rather than `FeedList`: event
/// handling needs the persistent scroll and selection state, and the
/// transient component is rebuilt every frame.
impl EventHandler for FeedListState {
    type Event = FeedEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SelectUp => {
                self.select_up();
                None
            }
            TuiEvent::SelectDown => {
                self.select_down();
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
            TuiEvent::Activate => self.selected.map(FeedEvent::Activated),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_post;

    fn state_with_items(count: usize, height: u16) -> FeedListState {
        let mut state = FeedListState::new(7);
        state.item_count = count;
        state.heights = vec![height; count];
        state.prefix_heights = state
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
        state
    }

    #[test]
    fn selection_moves_and_stops_at_the_edges() {
        let mut state = state_with_items(3, 5);
        assert_eq!(state.selected, None);

        state.select_down();
        assert_eq!(state.selected, Some(0));
        state.select_down();
        state.select_down();
        assert_eq!(state.selected, Some(2));
        state.select_down();
        assert_eq!(state.selected, Some(2), "clamped at the last card");

        state.select_up();
        assert_eq!(state.selected, Some(1));
        state.select_up();
        state.select_up();
        assert_eq!(state.selected, Some(0), "clamped at the first card");
    }

    #[test]
    fn selection_is_cleared_when_there_is_nothing_to_select() {
        let mut state = state_with_items(0, 5);
        state.select_down();
        assert_eq!(state.selected, None);
    }

    #[test]
    fn activate_emits_the_selected_index() {
        let mut state = state_with_items(3, 5);
        assert!(state.handle_event(&TuiEvent::Activate).is_none());

        state.handle_event(&TuiEvent::SelectDown);
        state.handle_event(&TuiEvent::SelectDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Activate),
            Some(FeedEvent::Activated(1))
        );
    }

    #[test]
    fn scrolling_down_to_a_card_below_the_viewport() {
        let mut state = state_with_items(10, 6);
        state.viewport_height = 12;
        state.selected = Some(4); // bottom edge at 30, viewport shows 0..12
        state.scroll_to_selected();
        assert_eq!(state.scroll_state.offset().y, 30 - 12);
    }

    #[test]
    fn scrolling_up_to_a_card_above_the_viewport() {
        let mut state = state_with_items(10, 6);
        state.viewport_height = 12;
        state.scroll_state.set_offset(Position { x: 0, y: 30 });
        state.selected = Some(1); // top edge at 6
        state.scroll_to_selected();
        assert_eq!(state.scroll_state.offset().y, 6);
    }

    #[test]
    fn clamp_scroll_pulls_back_overscroll() {
        let mut state = state_with_items(4, 5); // 20 rows of content
        state.viewport_height = 8;
        state.scroll_state.set_offset(Position { x: 0, y: 50 });
        state.clamp_scroll();
        assert_eq!(state.scroll_state.offset().y, 12);
    }

    #[test]
    fn visible_range_covers_viewport_plus_buffer() {
        let state = state_with_items(20, 10); // cards at 0,10,20,...
        // Viewport 20 rows at offset 50, buffer 10 → rows 40..80.
        let range = state.visible_range(50, 20);
        assert!(range.contains(&4), "card covering rows 40..50");
        assert!(range.contains(&7), "card covering rows 70..80");
        assert!(!range.contains(&1), "card well above the window");
    }

    #[test]
    fn rebuild_layout_only_reacts_to_width_and_count() {
        let posts = vec![make_post(1), make_post(2)];
        let mut state = FeedListState::new(7);

        state.rebuild_layout(&posts, 40);
        let first = state.heights.clone();
        assert_eq!(first.len(), 2);

        // Same inputs: untouched.
        state.rebuild_layout(&posts, 40);
        assert_eq!(state.heights, first);

        // Narrower: recomputed (and no shorter than before).
        state.rebuild_layout(&posts, 20);
        assert_eq!(state.heights.len(), 2);
        assert!(state.heights[0] >= first[0]);
        assert_eq!(
            state.prefix_heights.last().copied(),
            Some(state.heights.iter().sum())
        );
    }

    #[test]
    fn card_entries_are_stable_per_post() {
        let mut state = FeedListState::new(7);
        let fresh = *state.card_entry(3);
        assert_eq!(fresh, CardState::seeded(3, 7));

        state.card_entry(3).toggle_like();
        assert!(state.card_entry(3).liked, "same entry on re-access");
        assert!(!state.card_entry(4).liked, "other cards untouched");
    }
}
