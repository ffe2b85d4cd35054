use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events, mapped from raw key codes.
///
/// Navigation is screen-relative: `SelectUp` moves the feed selection but
/// scrolls the detail view. The event loop routes by `app.screen`.
pub enum TuiEvent {
    /// q, or Ctrl+C from anywhere.
    Quit,
    /// Esc or Backspace: leave the current screen.
    Back,
    /// Enter: open the selected post.
    Activate,
    SelectUp,
    SelectDown,
    PageUp,
    PageDown,
    /// l: toggle the like on the selected card.
    ToggleLike,
    /// b: toggle the bookmark on the selected card.
    ToggleBookmark,
    /// r: re-fetch the open post's author and comments.
    Refresh,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('l')) => Some(TuiEvent::ToggleLike),
                    (_, KeyCode::Char('b')) => Some(TuiEvent::ToggleBookmark),
                    (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                    (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Some(TuiEvent::SelectUp),
                    (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Some(TuiEvent::SelectDown),
                    (_, KeyCode::Esc) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
                    (_, KeyCode::Enter) => Some(TuiEvent::Activate),
                    (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
