// SPDX-License-Identifier: MPL-2.0
use iced_dots::config::{self, Config};
use iced_dots::domain::grid::{CellId, GapRatio, SizeBounds};
use iced_dots::i18n::I18n;
use iced_dots::ui::grid::layout;
use iced_dots::ui::grid::{Effect, Message, State};
use iced::{event, mouse, Point, Size};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn cell(index: usize) -> CellId {
    CellId::from_row_major(index).unwrap()
}

/// A config whose compact and regular bounds agree, so the reference
/// 400x300 grid area yields the 6x5 layout regardless of window width.
fn reference_config() -> Config {
    let mut config = Config::default();
    config.grid.min_size = Some(40.0);
    config.grid.max_size = Some(50.0);
    config.grid.compact_min_size = Some(40.0);
    config.grid.compact_max_size = Some(50.0);
    config.overlay.caption = Some("Hi!".to_string());
    config
}

/// A 400x348 window leaves a 400x300 grid area below the 48px navbar.
fn reference_state() -> State {
    State::new(&reference_config(), Size::new(400.0, 348.0))
}

/// Window-coordinate center of a cell in the reference state.
fn center_of(state: &State, index: usize) -> Point {
    let center = state
        .geometry()
        .cell_center(cell(index), Size::new(400.0, 300.0));
    Point::new(center.x, center.y + 48.0)
}

fn moved(position: Point) -> event::Event {
    event::Event::Mouse(mouse::Event::CursorMoved { position })
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("navbar-contact-button"), "Contact");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cell_overrides_survive_a_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.grid.cell_styles.insert(cell(5), "#ff6b35".to_string());
    config.interaction.linger_overrides.insert(cell(5), 1200);

    config::save_to_path(&config, &path).expect("Failed to save config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.grid.cell_styles.get(&cell(5)).unwrap(), "#ff6b35");
    assert_eq!(*loaded.interaction.linger_overrides.get(&cell(5)).unwrap(), 1200);
}

#[test]
fn test_reference_layout_matches_the_expected_grid() {
    let geometry = layout::compute_geometry(
        Size::new(400.0, 300.0),
        SizeBounds::new(40.0, 50.0),
        GapRatio::new(0.2),
    );

    assert_eq!(geometry.circle_size, 50.0);
    assert_eq!(geometry.gap_size, 10.0);
    assert_eq!(geometry.columns, 6);
    assert_eq!(geometry.rows, 5);
    assert_eq!(geometry.sentinel(), Some(cell(30)));
}

#[test]
fn test_hover_and_leave_lingers_the_highlight_out() {
    let mut state = reference_state();
    let now = Instant::now();

    let _ = state.handle_event_at(moved(center_of(&state, 5)), now);
    assert!(state.is_active(cell(5)));

    let _ = state.handle_event_at(event::Event::Mouse(mouse::Event::CursorLeft), now);
    assert!(state.is_active(cell(5)));
    assert!(state.has_pending());

    // Before the linger elapses the highlight persists...
    let _ = state.handle_message(Message::Tick(now + Duration::from_millis(100)));
    assert!(state.is_active(cell(5)));

    // ...and after it elapses the highlight is gone.
    let _ = state.handle_message(Message::Tick(now + Duration::from_secs(2)));
    assert!(!state.is_active(cell(5)));
    assert!(!state.has_pending());
}

#[test]
fn test_moving_between_adjacent_cells_keeps_both_lit_mid_transition() {
    let mut state = reference_state();
    let now = Instant::now();

    let _ = state.handle_event_at(moved(center_of(&state, 5)), now);
    let _ = state.handle_event_at(moved(center_of(&state, 6)), now);

    assert!(state.is_active(cell(5)));
    assert!(state.is_active(cell(6)));

    let _ = state.handle_message(Message::Tick(now + Duration::from_secs(2)));
    assert!(!state.is_active(cell(5)));
    assert!(state.is_active(cell(6)));
}

#[test]
fn test_sentinel_release_reveals_the_caption_letters() {
    let mut state = reference_state();
    let now = Instant::now();

    let _ = state.handle_event_at(moved(center_of(&state, 30)), now);
    let (effect, _) = state.handle_event_at(
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        now,
    );

    assert_eq!(effect, Effect::RevealOpened);
    assert_eq!(state.reveal().letter_for(cell(1)), Some('H'));
    assert_eq!(state.reveal().letter_for(cell(2)), Some('i'));
    assert_eq!(state.reveal().letter_for(cell(3)), Some('!'));
    assert_eq!(state.reveal().letter_for(cell(4)), None);
    assert_eq!(state.reveal().letter_for(cell(30)), None);
}

#[test]
fn test_disposal_cancels_every_scheduled_deactivation() {
    let mut state = reference_state();
    let now = Instant::now();

    let _ = state.handle_event_at(moved(center_of(&state, 5)), now);
    let _ = state.handle_event_at(moved(center_of(&state, 6)), now);
    let _ = state.handle_event_at(event::Event::Mouse(mouse::Event::CursorLeft), now);
    assert!(state.has_pending());

    state.teardown();
    assert!(!state.has_pending());
    assert!(!state.is_active(cell(5)));
    assert!(!state.is_active(cell(6)));

    // A late tick mutates nothing.
    let _ = state.handle_message(Message::Tick(now + Duration::from_secs(30)));
    assert!(!state.has_pending());
}
