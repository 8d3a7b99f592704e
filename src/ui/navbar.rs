// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! A slim strip above the grid with one entry per screen. Hidden entirely in
//! fullscreen mode.

use crate::app::Screen;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ShowGrid,
    ShowContact,
    ShowActivity,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SwitchScreen(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ShowGrid => Event::SwitchScreen(Screen::Grid),
        Message::ShowContact => Event::SwitchScreen(Screen::Contact),
        Message::ShowActivity => Event::SwitchScreen(Screen::Activity),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let entry = |label: String, message: Message, target: Screen| {
        button(text(label).size(typography::BODY))
            .on_press(message)
            .style(styles::button::navbar(ctx.screen == target))
    };

    let entries = Row::new()
        .spacing(spacing::SM)
        .push(entry(
            ctx.i18n.tr("navbar-grid-button"),
            Message::ShowGrid,
            Screen::Grid,
        ))
        .push(entry(
            ctx.i18n.tr("navbar-contact-button"),
            Message::ShowContact,
            Screen::Contact,
        ))
        .push(entry(
            ctx.i18n.tr("navbar-activity-button"),
            Message::ShowActivity,
            Screen::Activity,
        ));

    container(entries)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(iced::alignment::Vertical::Center)
        .padding([0.0, spacing::MD])
        .style(styles::container::navbar)
        .into()
}
