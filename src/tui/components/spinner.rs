//! Braille spinner shared by the busy indicators.
//!
//! Components receive a monotonically increasing frame counter from the event
//! loop (derived from elapsed time) and map it to a glyph here, so everything
//! on screen animates in lockstep.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The glyph for a frame counter. Wraps, so callers never reset it.
pub fn glyph(index: usize) -> &'static str {
    SPINNER_FRAMES[index % SPINNER_FRAMES.len()]
}

/// Full-area busy indicator: a spinner and a label, centered.
pub struct LoadingView<'a> {
    pub label: &'a str,
    pub spinner_frame: usize,
}

impl Component for LoadingView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(area);

        let line = Line::from(vec![
            Span::styled(glyph(self.spinner_frame), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::raw(self.label),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            rows[0],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn glyph_wraps_around() {
        assert_eq!(glyph(0), glyph(SPINNER_FRAMES.len()));
        assert_eq!(glyph(3), glyph(3 + SPINNER_FRAMES.len() * 5));
    }

    #[test]
    fn loading_view_shows_the_label() {
        let backend = TestBackend::new(40, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut view = LoadingView {
            label: "Fetching posts...",
            spinner_frame: 2,
        };

        terminal.draw(|f| view.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Fetching posts..."));
        assert!(text.contains(glyph(2)));
    }
}
