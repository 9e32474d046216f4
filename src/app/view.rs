// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Assembles the fixed page order (navbar, hero, about, paintings, contact,
//! footer) inside one scrollable, and stacks the lightbox overlay on top
//! while the gallery holds a selection.

use super::Message;
use crate::catalog::Painting;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::contact;
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::hero;
use crate::ui::navbar;
use iced::widget::{image, Column, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Id of the page scrollable, shared with the scroll-to-section tasks.
pub fn page_scroll_id() -> Id {
    Id::new("page")
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub paintings: &'a [Painting],
    pub hero_background: Option<&'a image::Handle>,
    pub gallery: &'a gallery::State,
    pub contact: &'a contact::State,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext { i18n: ctx.i18n }).map(Message::Navbar);

    let page = Column::new()
        .width(Length::Fill)
        .push(hero::view(hero::ViewContext {
            i18n: ctx.i18n,
            background: ctx.hero_background,
        }))
        .push(about::view(about::ViewContext { i18n: ctx.i18n }))
        .push(
            gallery::view(gallery::ViewContext {
                i18n: ctx.i18n,
                paintings: ctx.paintings,
            })
            .map(Message::Gallery),
        )
        .push(
            contact::view(contact::ViewContext {
                i18n: ctx.i18n,
                state: ctx.contact,
            })
            .map(Message::Contact),
        )
        .push(footer::view(footer::ViewContext { i18n: ctx.i18n }));

    let base = Column::new()
        .push(navbar)
        .push(
            Scrollable::new(page)
                .id(page_scroll_id())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    match gallery::lightbox(gallery::LightboxContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
    }) {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(overlay.map(Message::Gallery))
            .into(),
        None => base.into(),
    }
}
