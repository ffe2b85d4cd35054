use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::api::Comment;
use crate::tui::component::Component;
use crate::tui::components::post_card::{ellipsize, initials};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// Commenter name and email, stacked above the body.
const HEADER_LINES: u16 = 2;

/// A stateless component that renders one comment.
///
/// Comment bodies are shown in full; unlike feed cards there is no preview
/// clamp, so height is entirely wrap-driven.
#[derive(Clone, Copy)]
pub struct CommentCard<'a> {
    pub comment: &'a Comment,
}

impl CommentCard<'_> {
    /// Calculate the height required for this comment given a width.
    ///
    /// Must agree with `render`; both wrap the body with the same options.
    pub fn calculate_height(comment: &Comment, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let body = comment.body.trim();
        if body.is_empty() {
            return HEADER_LINES + VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        let body_lines = (textwrap::wrap(body, options).len() as u16).max(1);
        HEADER_LINES + body_lines + VERTICAL_OVERHEAD
    }
}

impl Widget for CommentCard<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let width = inner_area.width as usize;
        let badge = format!(" {} ", initials(self.comment.name.trim()));
        let badge_width = UnicodeWidthStr::width(badge.as_str());
        let text_width = width.saturating_sub(badge_width + 1);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(badge, Style::default().fg(Color::Black).bg(Color::Gray)),
                Span::raw(" "),
                Span::styled(
                    ellipsize(self.comment.name.trim(), text_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            // Email sits under the name, past the badge column.
            Line::from(vec![
                Span::raw(" ".repeat(badge_width + 1)),
                Span::styled(
                    ellipsize(self.comment.email.trim(), text_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        let options = textwrap::Options::new(width)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        for body_line in textwrap::wrap(self.comment.body.trim(), options) {
            lines.push(Line::from(body_line.to_string()));
        }

        Paragraph::new(lines).render(inner_area, buf);
    }
}

/// `CommentCard` is stateless; `Component` just delegates to the `Widget` impl.
impl Component for CommentCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_comment;

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let comment = make_comment(1, 1);
        assert_eq!(CommentCard::calculate_height(&comment, 0), 1);
        assert_eq!(
            CommentCard::calculate_height(&comment, HORIZONTAL_OVERHEAD),
            1
        );
    }

    #[test]
    fn calculate_height_empty_body_is_header_only() {
        let mut comment = make_comment(1, 1);
        comment.body = String::from("   ");
        assert_eq!(
            CommentCard::calculate_height(&comment, 80),
            HEADER_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_single_line_body() {
        let mut comment = make_comment(1, 1);
        comment.body = String::from("Hello");
        assert_eq!(
            CommentCard::calculate_height(&comment, 80),
            HEADER_LINES + 1 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let mut comment = make_comment(1, 1);
        comment.body = String::from("Hello world");
        // width 9 → content_width = 5 → "Hello" | "world"
        assert_eq!(
            CommentCard::calculate_height(&comment, 9),
            HEADER_LINES + 2 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_is_not_clamped() {
        let mut comment = make_comment(1, 1);
        comment.body = "word ".repeat(100);
        let height = CommentCard::calculate_height(&comment, 24);
        // 500 chars at 20 columns: well past any preview clamp.
        assert!(height > 10, "got {}", height);
    }

    #[test]
    fn render_shows_badge_name_and_email() {
        use ratatui::buffer::Buffer;

        let comment = make_comment(3, 1);
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        CommentCard { comment: &comment }.render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("C3"), "commenter badge missing");
        assert!(text.contains("Commenter 3"));
        assert!(text.contains("commenter3@example.com"));
    }
}
