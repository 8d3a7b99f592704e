// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, mouse, touch,
//! window) to the grid component based on the current application state.

use super::{Message, Screen};
use crate::ui::grid;
use iced::{event, time, Subscription};
use std::time::Duration;

/// How often linger deadlines are checked while any are outstanding.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the appropriate event subscription based on the current screen.
///
/// - Grid: routes all unhandled events to the grid component
/// - Contact/Activity: routes only window size changes, so the grid geometry
///   stays current while it is not on screen
///
/// Window close requests are handled on all screens for cleanup.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Grid => event::listen_with(|event, status, window_id| {
            // Handle window close request for cleanup
            if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            match status {
                event::Status::Ignored => Some(Message::Grid(grid::Message::RawEvent {
                    window: window_id,
                    event,
                })),
                event::Status::Captured => None,
            }
        }),
        Screen::Contact | Screen::Activity => event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            // Keep the grid geometry in sync with the window while another
            // screen is showing.
            if matches!(
                event,
                event::Event::Window(
                    iced::window::Event::Resized(_) | iced::window::Event::Opened { .. }
                )
            ) {
                return Some(Message::Grid(grid::Message::RawEvent {
                    window: window_id,
                    event,
                }));
            }

            None
        }),
    }
}

/// Creates a periodic tick subscription for linger expiry.
///
/// Only active while the grid has pending deactivation deadlines, so an idle
/// application schedules no wakeups.
pub fn create_tick_subscription(has_pending: bool) -> Subscription<Message> {
    if has_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
