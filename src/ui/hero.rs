// SPDX-License-Identifier: MPL-2.0
//! Hero banner: headline and tagline over the remote background photo.
//!
//! The background arrives asynchronously after startup; until then (or if
//! the fetch failed) the banner renders over a plain surface. There is no
//! retry and no local fallback image.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Image, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the hero banner.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Remote background, present once the startup fetch has succeeded.
    pub background: Option<&'a image::Handle>,
}

/// Render the hero banner. The section emits no messages of its own.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let headline = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::BODY_LG));

    let overlay_style = if ctx.background.is_some() {
        styles::container::hero_overlay
    } else {
        styles::container::hero_blank
    };

    let text_layer = Container::new(headline)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .style(overlay_style);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT));

    if let Some(handle) = ctx.background {
        layers = layers.push(
            Image::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    layers.push(text_layer).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn hero_renders_without_background() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            background: None,
        });
    }

    #[test]
    fn hero_renders_with_background() {
        let i18n = I18n::default();
        let handle = image::Handle::from_rgba(1, 1, vec![255_u8; 4]);
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            background: Some(&handle),
        });
    }
}
