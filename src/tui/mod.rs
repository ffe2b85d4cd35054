//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter in the future
//! if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a fetch in flight): draws every ~80ms for a smooth spinner.
//! - **Idle** (nothing in flight): sleeps up to 500ms, only redraws on events
//!   or terminal resize. Animation math is also skipped.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::api::{Post, PostSource, RestSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailViewState, FeedEvent, FeedListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub feed_list: FeedListState,
    pub detail_view: DetailViewState,
}

impl TuiState {
    pub fn new(seed: u64) -> Self {
        Self {
            feed_list: FeedListState::new(seed),
            detail_view: DetailViewState::new(),
        }
    }
}

/// Build a post source from the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn PostSource> {
    Arc::new(RestSource::new(config.base_url.clone()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new(config.seed);

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Kick off the first fetch; the loop renders Loading until it lands.
    run_effect(update(&mut app, Action::LoadFeed), &app, &tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Determine if animations are running (a spinner somewhere)
        let animating = app.is_busy();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::Quit) {
                let effect = update(&mut app, Action::Quit);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Everything else is screen-relative
            match app.screen {
                Screen::Feed => handle_feed_event(&event, &mut app, &mut tui, &tx),
                Screen::Detail => handle_detail_event(&event, &mut app, &mut tui, &tx),
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            run_effect(effect, &app, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Keyboard handling while the feed owns the screen.
fn handle_feed_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) {
    match event {
        // The feed is fetched once per run; there is no reload.
        TuiEvent::Refresh => {}
        TuiEvent::ToggleLike => {
            if let Some(id) = selected_post(app, tui).map(|p| p.id) {
                tui.feed_list.card_entry(id).toggle_like();
            }
        }
        TuiEvent::ToggleBookmark => {
            if let Some(id) = selected_post(app, tui).map(|p| p.id) {
                tui.feed_list.card_entry(id).toggle_bookmark();
            }
        }
        // Nothing above the feed to go back to
        TuiEvent::Back => {}
        _ => {
            if let Some(FeedEvent::Activated(index)) = tui.feed_list.handle_event(event)
                && let Some(post) = app.feed.posts().get(index).cloned()
            {
                tui.detail_view.reset();
                let effect = update(app, Action::OpenPost(post));
                run_effect(effect, app, tx);
            }
        }
    }
}

/// Keyboard handling while the detail screen owns the screen.
fn handle_detail_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) {
    match event {
        TuiEvent::Back => {
            let effect = update(app, Action::CloseDetail);
            run_effect(effect, app, tx);
        }
        TuiEvent::Refresh => {
            let effect = update(app, Action::RefreshDetail);
            run_effect(effect, app, tx);
        }
        // Likes and bookmarks land on the same card the feed shows, so the
        // state is shared through the feed's card map.
        TuiEvent::ToggleLike => {
            if let Some(id) = app.detail.as_ref().map(|d| d.post.id) {
                tui.feed_list.card_entry(id).toggle_like();
            }
        }
        TuiEvent::ToggleBookmark => {
            if let Some(id) = app.detail.as_ref().map(|d| d.post.id) {
                tui.feed_list.card_entry(id).toggle_bookmark();
            }
        }
        _ => {
            tui.detail_view.handle_event(event);
        }
    }
}

/// The post under the feed cursor, if any.
fn selected_post<'a>(app: &'a App, tui: &TuiState) -> Option<&'a Post> {
    let index = tui.feed_list.selected?;
    app.feed.posts().get(index)
}

/// Translate a reducer effect into the background work that performs it.
fn run_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) {
    match effect {
        Effect::FetchFeed => spawn_feed_fetch(app, tx.clone()),
        Effect::FetchDetail => spawn_detail_fetch(app, tx.clone()),
        Effect::None | Effect::Quit => {}
    }
}

fn spawn_feed_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning feed fetch (generation {})", app.feed_generation);

    // Clone what we need for the async task
    let source = app.source.clone();
    let generation = app.feed_generation;

    tokio::spawn(async move {
        let result = source.fetch_posts().await;
        if tx.send(Action::FeedLoaded { generation, result }).is_err() {
            warn!("Failed to send feed result: receiver dropped");
        }
    });
}

fn spawn_detail_fetch(app: &App, tx: mpsc::Sender<Action>) {
    let Some(detail) = app.detail.as_ref() else {
        warn!("Detail fetch requested with no open post");
        return;
    };
    let post_id = detail.post.id;
    let user_id = detail.post.user_id;
    let generation = app.detail_generation;
    let source = app.source.clone();
    info!(
        "Spawning detail fetch for post {} (generation {})",
        post_id, generation
    );

    tokio::spawn(async move {
        // Author resolution and the comment fetch land as one action no
        // matter how the two futures interleave.
        let (author, comments) =
            futures::join!(source.resolve_user(user_id), source.fetch_comments(post_id));
        if tx
            .send(Action::DetailLoaded {
                generation,
                author,
                comments,
            })
            .is_err()
        {
            warn!("Failed to send detail result: receiver dropped");
        }
    });
}
