// SPDX-License-Identifier: MPL-2.0
//! Page footer with the copyright line for the current year.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use fluent_bundle::FluentArgs;
use iced::widget::{Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the footer. Pure display, no messages.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let year = chrono::Local::now().year();
    let mut args = FluentArgs::new();
    args.set("year", year);

    let line = Text::new(ctx.i18n.tr_with("footer-copyright", &args)).size(typography::BODY_SM);

    Container::new(line)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::footer)
        .into()
}
