// SPDX-License-Identifier: MPL-2.0
//! Contact screen.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row};
use iced::{Element, Length};

/// Contextual data needed to render the contact screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the contact card.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let labeled = |label: String, value: String| {
        Row::new()
            .spacing(spacing::SM)
            .push(text(label).size(typography::BODY))
            .push(text(value).size(typography::BODY))
    };

    let card = Column::new()
        .spacing(spacing::MD)
        .max_width(480.0)
        .push(text(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(text(ctx.i18n.tr("contact-intro")).size(typography::BODY))
        .push(labeled(
            ctx.i18n.tr("contact-email-label"),
            ctx.i18n.tr("contact-email"),
        ))
        .push(labeled(
            ctx.i18n.tr("contact-source-label"),
            ctx.i18n.tr("contact-source"),
        ));

    container(
        container(card)
            .padding(spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .into()
}
