// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! `App::update` borrows its fields into an [`UpdateContext`] and dispatches
//! to the handler functions here, keeping the root module focused on state
//! and wiring.

use super::{Message, Screen};
use crate::diagnostics::{DiagnosticsHandle, EventKind, UserAction};
use crate::ui::grid;
use crate::ui::navbar;
use iced::window;
use iced::Task;

/// Mutable view over the application state for one update call.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub grid: &'a mut grid::State,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub diagnostics: &'a DiagnosticsHandle,
}

/// Handles a message forwarded to the grid component.
pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    if let grid::Message::RawEvent { window, .. } = &message {
        *ctx.window_id = Some(*window);
    }

    let (effect, task) = ctx.grid.handle_message(message);
    let follow_up = apply_grid_effect(ctx, effect);
    Task::batch([task.map(Message::Grid), follow_up])
}

/// Handles a navbar message.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::SwitchScreen(target) => handle_screen_switch(ctx, target),
    }
}

/// Switches to `target`, recording the navigation.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen != target {
        *ctx.screen = target;
        ctx.diagnostics.log_action(UserAction::SwitchScreen {
            name: target.name(),
        });
    }
    Task::none()
}

/// Tears down the grid (cancelling pending linger deadlines) and closes the
/// window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.grid.teardown();
    window::close(id)
}

/// Applies a grid side effect, returning any follow-up task.
fn apply_grid_effect(ctx: &mut UpdateContext<'_>, effect: grid::Effect) -> Task<Message> {
    match effect {
        grid::Effect::None => Task::none(),
        grid::Effect::RevealOpened => {
            ctx.diagnostics.log_action(UserAction::OpenReveal);
            Task::none()
        }
        grid::Effect::RevealDismissed => {
            ctx.diagnostics.log_action(UserAction::DismissReveal);
            Task::none()
        }
        grid::Effect::GridRebuilt { columns, rows } => {
            ctx.diagnostics.record(EventKind::GridRebuilt { columns, rows });
            Task::none()
        }
        grid::Effect::ToggleFullscreen => set_fullscreen(ctx, !*ctx.fullscreen),
        grid::Effect::ExitFullscreen => set_fullscreen(ctx, false),
    }
}

/// Moves the window in or out of fullscreen and re-lays out the grid over
/// the changed chrome.
fn set_fullscreen(ctx: &mut UpdateContext<'_>, desired: bool) -> Task<Message> {
    if *ctx.fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = *ctx.window_id else {
        return Task::none();
    };

    *ctx.fullscreen = desired;
    ctx.diagnostics
        .log_action(UserAction::ToggleFullscreen { enabled: desired });

    if let grid::Effect::GridRebuilt { columns, rows } = ctx.grid.set_chrome_hidden(desired) {
        ctx.diagnostics.record(EventKind::GridRebuilt { columns, rows });
    }

    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}
