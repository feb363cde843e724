// ABOUTME: Terminal runtime driving the recipe browser event loop
// ABOUTME: Spawns the one-shot fetch, drains its completion and dispatches key and resize events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Terminal runtime
//!
//! All state changes happen on the UI thread through
//! [`PageController::update`]. The recipe fetch runs as a tokio task and
//! reports back through an unbounded channel that the loop drains between
//! input polls.

/// Key bindings
pub mod keys;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use culinary_core::constants::ui;
use culinary_core::errors::AppError;
use culinary_providers::RecipeSource;
use ratatui::{
    backend::Backend,
    crossterm::event::{self, Event, KeyEventKind},
    Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::controller::{Message, PageController};
use crate::views;

/// Mark the controller as loading and start the fetch task
///
/// `loading` is set before the task exists, and the task always sends exactly
/// one completion message, so the flag is cleared on every path.
pub fn start_fetch(
    controller: &mut PageController,
    source: Arc<dyn RecipeSource>,
    tx: UnboundedSender<Message>,
) -> JoinHandle<()> {
    controller.update(Message::FetchStarted);
    spawn_fetch(source, tx)
}

/// Fetch the recipe list on the tokio runtime and send the outcome to `tx`
///
/// A failed send means the UI has already exited; the result is discarded.
pub fn spawn_fetch(source: Arc<dyn RecipeSource>, tx: UnboundedSender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let message = match source.fetch_recipes().await {
            Ok(recipes) => {
                info!(source = source.name(), count = recipes.len(), "Recipe fetch completed");
                Message::RecipesLoaded(recipes)
            }
            Err(e) => {
                let error = AppError::from(e);
                error!(
                    source = source.name(),
                    code = ?error.code,
                    error = %error,
                    "Failed to fetch recipes"
                );
                Message::FetchFailed(error.to_string())
            }
        };

        if tx.send(message).is_err() {
            debug!("Browser closed before the recipe fetch completed, dropping result");
        }
    })
}

/// Apply every message already waiting on `rx`; returns how many were applied
pub fn drain_pending(controller: &mut PageController, rx: &mut UnboundedReceiver<Message>) -> usize {
    let mut applied = 0;
    while let Ok(message) = rx.try_recv() {
        controller.update(message);
        applied += 1;
    }
    applied
}

/// Translate one terminal event into a controller message
#[must_use]
pub fn event_to_message(controller: &PageController, event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            keys::map_key(controller.state().focus, key)
        }
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Draw, drain fetch results and handle input until the user quits
///
/// # Errors
///
/// Returns an error if drawing or reading terminal events fails.
pub fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut PageController,
    rx: &mut UnboundedReceiver<Message>,
) -> Result<()> {
    let poll_interval = Duration::from_millis(ui::EVENT_POLL_INTERVAL_MS);

    loop {
        drain_pending(controller, rx);
        terminal
            .draw(|frame| views::render(frame, controller))
            .context("Failed to draw frame")?;

        if controller.state().should_quit {
            info!("Quit requested");
            return Ok(());
        }

        if event::poll(poll_interval).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            if let Some(message) = event_to_message(controller, event) {
                controller.update(message);
            }
        }
    }
}

/// Run the browser in the current terminal until the user quits
///
/// Blocks the calling thread while polling for input. Call it from a thread
/// inside a tokio runtime that may block, such as
/// [`tokio::task::spawn_blocking`], since the fetch is spawned on that runtime.
///
/// # Errors
///
/// Returns an error if the terminal cannot be sized, drawn or read.
pub fn run(source: Arc<dyn RecipeSource>) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = terminal
        .size()
        .context("Failed to read terminal size")
        .and_then(|size| {
            let mut controller = PageController::with_size(size.width, size.height);
            let (tx, mut rx) = mpsc::unbounded_channel();
            let _fetch = start_fetch(&mut controller, source, tx);
            event_loop(&mut terminal, &mut controller, &mut rx)
        });
    ratatui::restore();
    result
}
