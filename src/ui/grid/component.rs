// SPDX-License-Identifier: MPL-2.0
//! Circle grid screen component.
//!
//! Owns the layout geometry, the per-cell highlight state, and the reveal
//! overlay. Raw window, mouse, touch, and keyboard events are routed in by
//! the application subscription; the component resolves pointer positions to
//! cells, feeds the linger tracker, and reports side effects (fullscreen
//! toggles, reveal open/close, grid rebuilds) back to the application.

use super::canvas::DotField;
use super::interaction::LingerTracker;
use super::layout::{self, Geometry};
use super::reveal::RevealState;
use crate::config::{Config, GridConfig, COMPACT_WIDTH_BREAKPOINT, DEFAULT_CAPTION};
use crate::domain::grid::CellId;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{self, ColorScheme};
use iced::widget::{button, canvas, container, text, Stack};
use iced::{event, keyboard, mouse, touch, window, Color, Element, Length, Point, Size, Task};
use std::collections::HashMap;
use std::time::Instant;

/// Messages consumed by [`State::handle_message`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A raw runtime event routed in by the application subscription.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Periodic tick driving linger expiry. Only subscribed while
    /// deactivation deadlines are outstanding.
    Tick(Instant),
    /// The explicit close control of the reveal overlay was pressed.
    CloseReveal,
}

/// Side effects the application should perform after handling a grid message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The reveal overlay was opened from the sentinel circle.
    RevealOpened,
    /// The reveal overlay was dismissed.
    RevealDismissed,
    /// The cell population changed after a resize or mode flip.
    GridRebuilt { columns: usize, rows: usize },
    ToggleFullscreen,
    ExitFullscreen,
}

/// Environment information required to render the grid.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
}

/// Complete grid component state.
pub struct State {
    grid_config: GridConfig,
    caption: String,
    tracker: LingerTracker,
    reveal: RevealState,
    geometry: Geometry,
    window_size: Size,
    compact: bool,
    /// Whether the navbar is hidden (fullscreen), freeing its strip for cells.
    chrome_hidden: bool,
    /// Last pointer position in window coordinates.
    cursor: Option<Point>,
    /// The single touch point being tracked; later fingers are ignored until
    /// it lifts.
    tracked_finger: Option<touch::Finger>,
    /// Per-cell fill colors parsed from the config overrides.
    style_overrides: HashMap<CellId, Color>,
}

impl State {
    /// Builds the component from the loaded configuration and the initial
    /// window size.
    #[must_use]
    pub fn new(config: &Config, window_size: Size) -> Self {
        let style_overrides = config
            .grid
            .cell_styles
            .iter()
            .filter_map(|(cell, value)| theming::parse_hex_color(value).map(|color| (*cell, color)))
            .collect();

        let mut state = Self {
            grid_config: config.grid.clone(),
            caption: config
                .overlay
                .caption
                .clone()
                .unwrap_or_else(|| DEFAULT_CAPTION.to_string()),
            tracker: LingerTracker::new(
                config.interaction.default_linger(),
                config.interaction.overrides(),
            ),
            reveal: RevealState::new(),
            geometry: Geometry {
                circle_size: 0.0,
                gap_size: 0.0,
                columns: 0,
                rows: 0,
            },
            window_size,
            compact: false,
            chrome_hidden: false,
            cursor: None,
            tracked_finger: None,
            style_overrides,
        };
        state.rebuild();
        state
    }

    /// Handles a component message.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::RawEvent { window: _, event } => self.handle_event_at(event, Instant::now()),
            Message::Tick(now) => {
                self.tracker.tick(now);
                (Effect::None, Task::none())
            }
            Message::CloseReveal => (self.dismiss_reveal(), Task::none()),
        }
    }

    /// Handles a raw runtime event with an explicit clock.
    ///
    /// [`State::handle_message`] calls this with `Instant::now()`; tests call
    /// it directly so linger deadlines are reproducible.
    pub fn handle_event_at(&mut self, event: event::Event, now: Instant) -> (Effect, Task<Message>) {
        let effect = match event {
            event::Event::Window(window::Event::Resized(size)) => self.window_resized(size),
            event::Event::Window(window::Event::Opened { size, .. }) => self.window_resized(size),
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.pointer_moved(position, now);
                    Effect::None
                }
                mouse::Event::CursorLeft => {
                    self.cursor = None;
                    self.tracker.pointer_left(now);
                    Effect::None
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    self.interaction_completed(self.cursor)
                }
                _ => Effect::None,
            },
            event::Event::Touch(touch_event) => self.handle_touch(touch_event, now),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::F11),
                ..
            }) => Effect::ToggleFullscreen,
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => {
                if self.reveal.is_visible() {
                    self.dismiss_reveal()
                } else {
                    Effect::ExitFullscreen
                }
            }
            _ => Effect::None,
        };
        (effect, Task::none())
    }

    fn handle_touch(&mut self, touch_event: touch::Event, now: Instant) -> Effect {
        match touch_event {
            touch::Event::FingerPressed { id, position } => {
                // Single active pointer: later fingers are ignored.
                if self.tracked_finger.is_none() {
                    self.tracked_finger = Some(id);
                    self.pointer_moved(position, now);
                }
                Effect::None
            }
            touch::Event::FingerMoved { id, position } => {
                if self.tracked_finger == Some(id) {
                    self.pointer_moved(position, now);
                }
                Effect::None
            }
            touch::Event::FingerLifted { id, position } => {
                if self.tracked_finger != Some(id) {
                    return Effect::None;
                }
                self.tracked_finger = None;
                let effect = self.interaction_completed(Some(position));
                self.cursor = None;
                self.tracker.pointer_left(now);
                effect
            }
            touch::Event::FingerLost { id, .. } => {
                if self.tracked_finger == Some(id) {
                    self.tracked_finger = None;
                    self.cursor = None;
                    self.tracker.pointer_left(now);
                }
                Effect::None
            }
        }
    }

    /// The pointer moved to `position` (window coordinates).
    ///
    /// The sentinel is exempt from highlighting: hovering it reads as a miss
    /// to the tracker, so the previous cell lingers out normally.
    fn pointer_moved(&mut self, position: Point, now: Instant) {
        self.cursor = Some(position);
        let sentinel = self.geometry.sentinel();
        let effective = self
            .hit_at(position)
            .filter(|cell| Some(*cell) != sentinel);
        self.tracker.pointer_over(effective, now);
    }

    /// A press was released at `position`. Opens the reveal when the release
    /// lands on the sentinel; dismisses it when it is already open.
    fn interaction_completed(&mut self, position: Option<Point>) -> Effect {
        if self.reveal.is_visible() {
            return self.dismiss_reveal();
        }
        let hit = position.and_then(|point| self.hit_at(point));
        if hit.is_some() && hit == self.geometry.sentinel() {
            self.reveal.open(&self.caption);
            Effect::RevealOpened
        } else {
            Effect::None
        }
    }

    fn dismiss_reveal(&mut self) -> Effect {
        if self.reveal.is_visible() {
            self.reveal.close();
            Effect::RevealDismissed
        } else {
            Effect::None
        }
    }

    /// Resolves a window-coordinate point to the circle under it.
    fn hit_at(&self, position: Point) -> Option<CellId> {
        let point = Point::new(position.x, position.y - self.navbar_offset());
        if point.y < 0.0 {
            return None;
        }
        self.geometry.cell_at_point(point, self.grid_area())
    }

    fn window_resized(&mut self, size: Size) -> Effect {
        self.window_size = size;
        self.rebuild()
    }

    /// Shows or hides the navbar strip (fullscreen), re-laying out the grid.
    pub fn set_chrome_hidden(&mut self, hidden: bool) -> Effect {
        self.chrome_hidden = hidden;
        self.rebuild()
    }

    /// Recomputes the geometry for the current window size and reconciles
    /// interaction state with the new cell population.
    fn rebuild(&mut self) -> Effect {
        let previous = (self.geometry.columns, self.geometry.rows);
        self.compact = self.window_size.width <= COMPACT_WIDTH_BREAKPOINT;
        self.geometry = layout::compute_geometry(
            self.grid_area(),
            self.grid_config.bounds(self.compact),
            self.grid_config.gap(),
        );
        self.tracker.retain_within(self.geometry.cell_count());

        let current = (self.geometry.columns, self.geometry.rows);
        if current == previous {
            Effect::None
        } else {
            Effect::GridRebuilt {
                columns: self.geometry.columns,
                rows: self.geometry.rows,
            }
        }
    }

    /// Cancels every pending linger deadline. Called on shutdown so no
    /// expiry outlives the component.
    pub fn teardown(&mut self) {
        self.tracker.clear_all();
    }

    fn navbar_offset(&self) -> f32 {
        if self.chrome_hidden {
            0.0
        } else {
            sizing::NAVBAR_HEIGHT
        }
    }

    /// The area available to the grid: the window minus the navbar strip.
    fn grid_area(&self) -> Size {
        Size::new(
            self.window_size.width,
            (self.window_size.height - self.navbar_offset()).max(0.0),
        )
    }

    /// Returns the geometry of the current layout pass.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns whether `cell` is currently highlighted.
    #[must_use]
    pub fn is_active(&self, cell: CellId) -> bool {
        self.tracker.is_active(cell)
    }

    /// Returns the configured fill color override for `cell`, if any.
    #[must_use]
    pub fn style_override(&self, cell: CellId) -> Option<Color> {
        self.style_overrides.get(&cell).copied()
    }

    /// Returns the reveal overlay state.
    #[must_use]
    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    /// Returns whether any linger deadline is outstanding. Gates the tick
    /// subscription.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.tracker.has_pending()
    }

    /// Returns whether the compact size bounds are in effect.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Renders the circle field, stacking the close control on top while the
    /// reveal overlay is open.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let field = canvas::Canvas::new(DotField::new(self, env.scheme))
            .width(Length::Fill)
            .height(Length::Fill);

        if !self.reveal.is_visible() {
            return field.into();
        }

        let close = button(text(env.i18n.tr("reveal-close-button")).size(typography::BODY))
            .on_press(Message::CloseReveal)
            .style(styles::overlay::close_button);

        let controls = container(close)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right)
            .padding(spacing::MD);

        Stack::new().push(field).push(controls).into()
    }
}
