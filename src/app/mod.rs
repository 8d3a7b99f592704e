// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the grid component, localization, theming,
//! and the activity log, and translates messages into side effects like
//! fullscreen switches or window teardown. Policy decisions (window sizing,
//! tick cadence, event routing) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::I18n;
use crate::ui::grid;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Root Iced application state bridging the UI components, localization, and
/// preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    grid: grid::State,
    fullscreen: bool,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
    /// In-memory activity log backing the activity screen.
    diagnostics: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Grid,
            grid: grid::State::new(
                &config,
                Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ),
            fullscreen: false,
            window_id: None,
            theme_mode: ThemeMode::System,
            diagnostics: DiagnosticsHandle::new(),
        }
    }
}

impl App {
    /// Initializes application state from the launcher `Flags` and the
    /// persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (mut config, config_warning) = config::load();
        if let Some(caption) = flags.caption {
            config.overlay.caption = Some(caption);
        }

        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsHandle::new();
        if let Some(key) = config_warning {
            diagnostics.log_warning(key);
        }

        let app = App {
            i18n,
            screen: Screen::Grid,
            grid: grid::State::new(
                &config,
                Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ),
            fullscreen: false,
            window_id: None,
            theme_mode: config.general.theme_mode,
            diagnostics,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(self.grid.has_pending());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            grid: &mut self.grid,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            diagnostics: &self.diagnostics,
        };

        match message {
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Tick(now) => {
                update::handle_grid_message(&mut ctx, grid::Message::Tick(now))
            }
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            grid: &self.grid,
            fullscreen: self.fullscreen,
            theme_mode: self.theme_mode,
            diagnostics: &self.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{event, mouse, Point};

    fn raw(event: event::Event) -> Message {
        Message::Grid(grid::Message::RawEvent {
            window: window::Id::unique(),
            event,
        })
    }

    #[test]
    fn app_starts_on_the_grid_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Grid);
        assert!(!app.fullscreen);
    }

    #[test]
    fn switching_screens_records_an_activity_event() {
        let mut app = App::default();

        let _ = app.update(Message::SwitchScreen(Screen::Contact));

        assert_eq!(app.screen, Screen::Contact);
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn switching_to_the_same_screen_records_nothing() {
        let mut app = App::default();

        let _ = app.update(Message::SwitchScreen(Screen::Grid));

        assert!(app.diagnostics.is_empty());
    }

    #[test]
    fn raw_events_track_the_window_id() {
        let mut app = App::default();

        let _ = app.update(raw(event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(10.0, 10.0),
        })));

        assert!(app.window_id.is_some());
    }

    #[test]
    fn close_request_drains_pending_linger_deadlines() {
        let mut app = App::default();

        // Hover a circle, then leave the window so a deadline is pending.
        let center = {
            let geometry = app.grid.geometry();
            let cell = crate::domain::grid::CellId::from_row_major(1).unwrap();
            let area = Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32 - crate::ui::design_tokens::sizing::NAVBAR_HEIGHT,
            );
            let point = geometry.cell_center(cell, area);
            Point::new(
                point.x,
                point.y + crate::ui::design_tokens::sizing::NAVBAR_HEIGHT,
            )
        };
        let _ = app.update(raw(event::Event::Mouse(mouse::Event::CursorMoved {
            position: center,
        })));
        let _ = app.update(raw(event::Event::Mouse(mouse::Event::CursorLeft)));
        assert!(app.grid.has_pending());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(!app.grid.has_pending());
    }

    #[test]
    fn f11_toggles_fullscreen_and_records_it() {
        let mut app = App::default();
        let f11 = || {
            raw(event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: iced::keyboard::Key::Named(iced::keyboard::key::Named::F11),
                modified_key: iced::keyboard::Key::Named(iced::keyboard::key::Named::F11),
                physical_key: iced::keyboard::key::Physical::Code(iced::keyboard::key::Code::F11),
                location: iced::keyboard::Location::Standard,
                modifiers: iced::keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }))
        };

        let _ = app.update(f11());
        assert!(app.fullscreen);

        let _ = app.update(f11());
        assert!(!app.fullscreen);

        // Both switches were recorded (plus any grid rebuilds they caused).
        let events = app.diagnostics.snapshot();
        let toggles = events
            .iter()
            .filter(|event| event.kind().to_string().contains("fullscreen"))
            .count();
        assert_eq!(toggles, 2);
    }
}
