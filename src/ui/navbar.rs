// SPDX-License-Identifier: MPL-2.0
//! Sticky navigation bar at the top of the page.
//!
//! Renders the gallery title and one button per page section. The navbar
//! owns no state: a click is translated into a navigation event the root
//! resolves against its section anchors.

use crate::app::section::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionPressed(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Section),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionPressed(section) => Event::Navigate(section),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    for section in Section::ALL {
        row = row.push(
            button(Text::new(ctx.i18n.tr(section.nav_label_key())).size(typography::BODY))
                .on_press(Message::SectionPressed(section))
                .style(styles::button::nav_link)
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }

    #[test]
    fn every_section_press_emits_its_navigation_event() {
        for section in Section::ALL {
            let event = update(Message::SectionPressed(section));
            assert!(matches!(event, Event::Navigate(target) if target == section));
        }
    }
}
