// SPDX-License-Identifier: MPL-2.0
//! About section: three paragraphs introducing the artist.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about section. Pure display, no messages.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(sizing::SECTION_TEXT_WIDTH)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("about-paragraph-styles")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-paragraph-studies")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-paragraph-invitation")).size(typography::BODY_LG));

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext { i18n: &i18n });
    }
}
