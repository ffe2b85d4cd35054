use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use unicode_width::UnicodeWidthStr;

use crate::api::{Post, users};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// The feed clamps long titles to two rows.
const MAX_TITLE_LINES: usize = 2;
/// And body previews to three.
const MAX_BODY_LINES: usize = 3;

/// Author line at the top, engagement line at the bottom.
const HEADER_LINES: u16 = 1;
const FOOTER_LINES: u16 = 1;

/// Per-card interaction state: ephemeral, lives only as long as the feed.
///
/// The base counts are synthesized, not fetched; the API has no engagement
/// data. They are a pure function of `(post_id, seed)`, so a card always
/// shows the same numbers within a run and across runs with the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardState {
    pub liked: bool,
    pub bookmarked: bool,
    /// Synthesized like count, `0..1000`.
    pub base_likes: u32,
    /// Synthesized comment count, `0..100`.
    pub base_comments: u32,
}

impl CardState {
    /// Derives the card's counts from the post id and the run's seed.
    pub fn seeded(post_id: i64, seed: u64) -> Self {
        let mut hasher = DefaultHasher::new();
        (seed, post_id).hash(&mut hasher);
        let bits = hasher.finish();
        Self {
            liked: false,
            bookmarked: false,
            base_likes: (bits % 1000) as u32,
            base_comments: ((bits >> 32) % 100) as u32,
        }
    }

    /// The count the card shows: the base, plus one while liked.
    pub fn displayed_likes(&self) -> u32 {
        self.base_likes + u32::from(self.liked)
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn toggle_bookmark(&mut self) {
        self.bookmarked = !self.bookmarked;
    }
}

/// A stateless component that renders one feed entry.
///
/// `PostCard` is a transient component: created fresh each frame from the
/// post and its `CardState`. Selection lives in the parent `FeedList`.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// with `textwrap`, using options that match Ratatui's `Paragraph`
/// wrapping. The parent needs the heights up front to size its scroll
/// canvas, so the prediction must agree with what `render` produces; both
/// go through the same wrapping helpers.
#[derive(Clone, Copy)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    pub card: &'a CardState,
    pub is_selected: bool,
}

impl PostCard<'_> {
    /// Calculate the height required for this post given a width.
    pub fn calculate_height(post: &Post, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let title_lines = clamped_line_count(&post.title, content_width, MAX_TITLE_LINES);
        let body_lines = clamped_line_count(&post.body, content_width, MAX_BODY_LINES);
        let image_lines = u16::from(post.image_url.is_some());
        HEADER_LINES + title_lines + body_lines + image_lines + FOOTER_LINES + VERTICAL_OVERHEAD
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let content_width = inner_area.width;
        let meta_style = Style::default().fg(Color::DarkGray);

        // Author line, resolved locally per frame (the directory does no I/O).
        let author = users::resolve(self.post.user_id);
        let badge = format!(" {} ", initials(&author.name));
        let name_width =
            (content_width as usize).saturating_sub(UnicodeWidthStr::width(badge.as_str()) + 1);
        let mut header_spans = vec![
            Span::styled(badge, Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(
                ellipsize(&author.name, name_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(age) = self.post.timestamp.as_deref().and_then(relative_age) {
            header_spans.push(Span::styled(format!(" · {}", age), meta_style));
        }

        let mut lines = vec![Line::from(header_spans)];
        for title_line in wrap_clamped(&self.post.title, content_width, MAX_TITLE_LINES) {
            lines.push(Line::styled(
                title_line,
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        for body_line in wrap_clamped(&self.post.body, content_width, MAX_BODY_LINES) {
            lines.push(Line::styled(body_line, Style::default().fg(Color::Gray)));
        }
        // The terminal cannot show the image itself; mark that one exists.
        if self.post.image_url.is_some() {
            lines.push(Line::styled("▨ image attached", meta_style));
        }

        let like_style = if self.card.liked {
            Style::default().fg(Color::Red)
        } else {
            meta_style
        };
        let bookmark_style = if self.card.bookmarked {
            Style::default().fg(Color::Blue)
        } else {
            meta_style
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "{} {}",
                    if self.card.liked { "♥" } else { "♡" },
                    self.card.displayed_likes()
                ),
                like_style,
            ),
            Span::raw("   "),
            Span::styled(format!("{} comments", self.card.base_comments), meta_style),
            Span::raw("   "),
            Span::styled(
                if self.card.bookmarked { "◆" } else { "◇" },
                bookmark_style,
            ),
        ]));

        Paragraph::new(lines).render(inner_area, buf);
    }
}

/// `PostCard` is stateless; `Component` just delegates to the `Widget` impl.
impl Component for PostCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// How many rows `text` occupies at `width`, capped at `max_lines`.
fn clamped_line_count(text: &str, width: u16, max_lines: usize) -> u16 {
    let lines = textwrap::wrap(text.trim(), wrap_options(width)).len();
    lines.clamp(1, max_lines) as u16
}

/// Wraps `text` to at most `max_lines` rows, marking a cut with an ellipsis.
fn wrap_clamped(text: &str, width: u16, max_lines: usize) -> Vec<String> {
    let wrapped = textwrap::wrap(text.trim(), wrap_options(width));
    let mut lines: Vec<String> = wrapped
        .iter()
        .take(max_lines)
        .map(|l| l.to_string())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    if wrapped.len() > max_lines
        && let Some(last) = lines.last_mut()
    {
        let mut cut = std::mem::take(last);
        while UnicodeWidthStr::width(cut.as_str()) > (width as usize).saturating_sub(1) {
            cut.pop();
        }
        cut.push('…');
        *last = cut;
    }
    lines
}

/// Up to two uppercased initials for the avatar badge.
pub(crate) fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        String::from("?")
    } else {
        letters
    }
}

/// Truncates to at most `max_width` columns, marking a cut with an ellipsis.
pub(crate) fn ellipsize(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut out = text.to_string();
    while UnicodeWidthStr::width(out.as_str()) > max_width.saturating_sub(1) {
        out.pop();
    }
    out.push('…');
    out
}

/// "3h ago"-style age for an ISO-8601 timestamp. A malformed timestamp is
/// simply not shown.
pub(crate) fn relative_age(timestamp: &str) -> Option<String> {
    let then = DateTime::parse_from_rfc3339(timestamp).ok()?;
    Some(describe_age(then.with_timezone(&Utc), Utc::now()))
}

fn describe_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_seconds() < 60 {
        // Covers clock skew too: a timestamp from the future reads as fresh.
        String::from("just now")
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        then.format("%b %d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_post;
    use chrono::TimeZone;
    use std::collections::HashSet;

    // ==========================================================================
    // CardState tests
    // ==========================================================================

    #[test]
    fn seeded_counts_are_deterministic() {
        assert_eq!(CardState::seeded(1, 7), CardState::seeded(1, 7));
        assert_eq!(CardState::seeded(-5, 99), CardState::seeded(-5, 99));
    }

    #[test]
    fn seeded_counts_stay_in_range() {
        for post_id in -20..40 {
            let card = CardState::seeded(post_id, 0xFEED);
            assert!(card.base_likes < 1000, "likes {} out of range", card.base_likes);
            assert!(card.base_comments < 100, "comments {} out of range", card.base_comments);
        }
    }

    #[test]
    fn seeded_counts_vary_across_posts() {
        let likes: HashSet<u32> = (0..32).map(|id| CardState::seeded(id, 7).base_likes).collect();
        assert!(likes.len() > 1, "all posts got the same count");
    }

    #[test]
    fn fresh_cards_start_untouched() {
        let card = CardState::seeded(1, 7);
        assert!(!card.liked);
        assert!(!card.bookmarked);
    }

    #[test]
    fn displayed_likes_track_the_toggle() {
        let mut card = CardState::seeded(1, 7);
        let base = card.base_likes;
        assert_eq!(card.displayed_likes(), base);

        card.toggle_like();
        assert!(card.liked);
        assert_eq!(card.displayed_likes(), base + 1);
        assert_eq!(card.base_likes, base, "the base never changes");

        card.toggle_like();
        assert!(!card.liked);
        assert_eq!(card.displayed_likes(), base);
    }

    #[test]
    fn bookmark_toggles_independently() {
        let mut card = CardState::seeded(1, 7);
        card.toggle_bookmark();
        assert!(card.bookmarked);
        assert!(!card.liked);
        card.toggle_bookmark();
        assert!(!card.bookmarked);
    }

    // ==========================================================================
    // calculate_height tests
    // ==========================================================================

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        assert_eq!(PostCard::calculate_height(&make_post(1), 0), 1);
        assert_eq!(
            PostCard::calculate_height(&make_post(1), HORIZONTAL_OVERHEAD),
            1
        );
    }

    #[test]
    fn calculate_height_short_content_is_one_line_each() {
        // header + title + body + footer + borders
        assert_eq!(
            PostCard::calculate_height(&make_post(1), 80),
            HEADER_LINES + 1 + 1 + FOOTER_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_clamps_title_and_body() {
        let mut post = make_post(1);
        post.title = "word ".repeat(50);
        post.body = "word ".repeat(200);
        // Title stops at 2 rows, body at 3, however long the text.
        assert_eq!(
            PostCard::calculate_height(&post, 40),
            HEADER_LINES + 2 + 3 + FOOTER_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_matches_textwrap_when_under_the_clamp() {
        let mut post = make_post(1);
        post.title = "Hello world".to_string();
        // content_width = 9 - 4 = 5 → "Hello" | "world" = 2 rows
        assert_eq!(
            PostCard::calculate_height(&post, 9),
            HEADER_LINES + 2 + MAX_BODY_LINES as u16 + FOOTER_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_counts_the_image_marker() {
        let plain = make_post(1);
        let mut illustrated = make_post(1);
        illustrated.image_url = Some("https://picsum.photos/200".to_string());
        assert_eq!(
            PostCard::calculate_height(&illustrated, 80),
            PostCard::calculate_height(&plain, 80) + 1
        );
    }

    #[test]
    fn render_shows_badge_author_and_image_marker() {
        use ratatui::buffer::Buffer;

        let mut post = make_post(1);
        post.image_url = Some("https://picsum.photos/200".to_string());
        let card = CardState::seeded(post.id, 7);

        let area = Rect::new(0, 0, 40, PostCard::calculate_height(&post, 40));
        let mut buf = Buffer::empty(area);
        PostCard {
            post: &post,
            card: &card,
            is_selected: false,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("JS"), "author badge missing");
        assert!(text.contains("Jane Smith"));
        assert!(text.contains("▨ image attached"));
    }

    // ==========================================================================
    // Wrapping helpers
    // ==========================================================================

    #[test]
    fn wrap_clamped_keeps_short_text_unmarked() {
        assert_eq!(wrap_clamped("Hello world", 20, 2), vec!["Hello world"]);
    }

    #[test]
    fn wrap_clamped_marks_the_cut() {
        let lines = wrap_clamped("one two three four five six", 8, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'), "cut line was {:?}", lines[1]);
    }

    #[test]
    fn ellipsize_leaves_fitting_text_alone() {
        assert_eq!(ellipsize("short", 10), "short");
    }

    #[test]
    fn ellipsize_cuts_to_width() {
        let cut = ellipsize("a rather long author name", 10);
        assert!(UnicodeWidthStr::width(cut.as_str()) <= 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Anonymous User"), "AU");
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials("maria de la cruz"), "MD");
        assert_eq!(initials("  "), "?");
    }

    // ==========================================================================
    // Relative age
    // ==========================================================================

    #[test]
    fn age_buckets_scale_with_distance() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let age = |then| describe_age(then, now);

        assert_eq!(age(now - chrono::Duration::seconds(30)), "just now");
        assert_eq!(age(now - chrono::Duration::minutes(5)), "5m ago");
        assert_eq!(age(now - chrono::Duration::hours(3)), "3h ago");
        assert_eq!(age(now - chrono::Duration::days(2)), "2d ago");
        assert_eq!(age(now - chrono::Duration::days(40)), "Feb 02");
    }

    #[test]
    fn future_timestamps_read_as_fresh() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let then = now + chrono::Duration::hours(2);
        assert_eq!(describe_age(then, now), "just now");
    }

    #[test]
    fn malformed_timestamps_are_dropped() {
        assert_eq!(relative_age("not-a-date"), None);
        assert!(relative_age("2026-01-05T12:00:00Z").is_some());
    }
}
