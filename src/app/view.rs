// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::I18n;
use crate::ui::activity_screen::{self, ViewContext as ActivityViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::grid;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub grid: &'a grid::State,
    pub fullscreen: bool,
    pub theme_mode: ThemeMode,
    pub diagnostics: &'a DiagnosticsHandle,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Grid => ctx
            .grid
            .view(grid::ViewEnv {
                i18n: ctx.i18n,
                scheme: ColorScheme::for_mode(ctx.theme_mode),
            })
            .map(Message::Grid),
        Screen::Contact => contact::view(ContactViewContext { i18n: ctx.i18n }),
        Screen::Activity => activity_screen::view(ActivityViewContext {
            i18n: ctx.i18n,
            diagnostics: ctx.diagnostics,
        }),
    };

    // In fullscreen mode the grid takes the whole window, navbar included.
    if ctx.fullscreen && ctx.screen == Screen::Grid {
        return current_view;
    }

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
    })
    .map(Message::Navbar);

    iced::widget::Column::new()
        .push(navbar_view)
        .push(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
