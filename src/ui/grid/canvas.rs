// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering for the circle grid.

use super::component::{Message, State};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas;
use iced::{mouse, Rectangle, Theme};

/// Relative size of a revealed letter to its circle.
const LETTER_SCALE: f32 = 0.55;

/// Draws the circle field: resting, highlighted, and sentinel circles, and the
/// revealed caption letters while the overlay is open.
pub struct DotField<'a> {
    state: &'a State,
    scheme: ColorScheme,
}

impl<'a> DotField<'a> {
    pub fn new(state: &'a State, scheme: ColorScheme) -> Self {
        Self { state, scheme }
    }
}

impl canvas::Program<Message> for DotField<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let container = bounds.size();
        let geometry = self.state.geometry();
        let sentinel = geometry.sentinel();
        let radius = geometry.circle_size / 2.0;

        for cell in geometry.cells() {
            let color = if sentinel == Some(cell) {
                self.scheme.circle_sentinel
            } else if self.state.is_active(cell) {
                self.scheme.circle_active
            } else {
                self.state
                    .style_override(cell)
                    .unwrap_or(self.scheme.circle_resting)
            };

            let center = geometry.cell_center(cell, container);
            let path = canvas::Path::circle(center, radius);
            frame.fill(&path, color);
        }

        if self.state.reveal().is_visible() {
            let backdrop = canvas::Path::rectangle(iced::Point::ORIGIN, container);
            frame.fill(&backdrop, self.scheme.overlay_background);

            for cell in geometry.cells() {
                let Some(letter) = self.state.reveal().letter_for(cell) else {
                    continue;
                };
                let center = geometry.cell_center(cell, container);
                frame.fill_text(canvas::Text {
                    content: letter.to_string(),
                    position: center,
                    color: self.scheme.overlay_text,
                    size: (geometry.circle_size * LETTER_SCALE).into(),
                    align_x: iced::widget::text::Alignment::Center,
                    align_y: iced::alignment::Vertical::Center,
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

const _: () = {
    assert!(LETTER_SCALE > 0.0 && LETTER_SCALE < 1.0);
};
