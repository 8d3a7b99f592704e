// SPDX-License-Identifier: MPL-2.0
//! Activity screen listing the recent diagnostic events.

use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length};

/// Contextual data needed to render the activity screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub diagnostics: &'a DiagnosticsHandle,
}

/// Render the activity list, newest event first.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let events = ctx.diagnostics.snapshot();

    let mut list = Column::new().spacing(spacing::XS);
    if events.is_empty() {
        list = list.push(text(ctx.i18n.tr("activity-empty")).size(typography::BODY));
    } else {
        for event in events.iter().rev() {
            let line = format!("{:>4}s  {}", event.age_secs(), event.kind());
            list = list.push(text(line).size(typography::CAPTION));
        }
    }

    let count = ctx
        .i18n
        .tr_with("activity-count", &[("count", events.len().to_string())]);

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(640.0)
        .push(text(ctx.i18n.tr("activity-title")).size(typography::TITLE_LG))
        .push(text(count).size(typography::CAPTION))
        .push(scrollable(list).height(Length::Fill));

    container(
        container(content)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(iced::alignment::Horizontal::Center)
    .into()
}
