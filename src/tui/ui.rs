use crate::core::state::{App, FeedState, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, FeedList, LoadingView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Top-level frame layout: title bar, active screen, key hints.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    match app.screen {
        Screen::Feed => draw_feed_screen(frame, main_area, app, tui, spinner_frame),
        Screen::Detail => draw_detail_screen(frame, main_area, app, tui, spinner_frame),
    }

    TitleBar {
        screen_label: screen_label(app.screen).to_string(),
        status_message: app.status_message.clone(),
        busy: app.is_busy(),
        spinner_frame,
    }
    .render(frame, title_area);

    frame.render_widget(help_line(app), help_area);
}

fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Feed => "Feed",
        Screen::Detail => "Post",
    }
}

fn draw_feed_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    match &app.feed {
        FeedState::Loading => LoadingView {
            label: "Fetching posts...",
            spinner_frame,
        }
        .render(frame, area),
        FeedState::Failed(reason) => draw_error_view(frame, area, reason),
        // An empty feed is a successful fetch, not an error.
        FeedState::Loaded(posts) if posts.is_empty() => draw_empty_feed(frame, area),
        FeedState::Loaded(posts) => FeedList {
            state: &mut tui.feed_list,
            posts,
        }
        .render(frame, area),
    }
}

fn draw_detail_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    // The reducer never enters Detail without an open post; render nothing
    // rather than panic if that ever breaks.
    if let Some(detail) = app.detail.as_ref() {
        DetailView {
            state: &mut tui.detail_view,
            detail,
            spinner_frame,
        }
        .render(frame, area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, reason: &str) {
    let lines = vec![
        Line::styled(
            "Feed unavailable",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::from(reason.to_string()),
    ];

    let error_paragraph = Paragraph::new(lines)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(error_paragraph, area);
}

fn draw_empty_feed(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("No posts yet", Style::default().add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::styled(
            "The feed came back empty.",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let rows = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[0],
    );
}

/// One line of key hints for the active screen.
fn help_line(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.screen {
        Screen::Feed => &[
            ("j/k", "move"),
            ("Enter", "open"),
            ("l", "like"),
            ("b", "bookmark"),
            ("q", "quit"),
        ],
        Screen::Detail => &[
            ("j/k", "scroll"),
            ("l", "like"),
            ("r", "refresh"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
