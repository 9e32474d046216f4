// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dark sticky toolbar at the top of the page.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Dimming layer between the hero photo and the hero text.
pub fn hero_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::HERO_DIM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Fallback hero surface when the remote background never arrived.
pub fn hero_blank(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_600)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Light band behind the contact form.
pub fn contact_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        ..container::Style::default()
    }
}

/// Dark page footer.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Translucent backdrop behind the lightbox dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// The lightbox dialog surface.
pub fn dialog(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}
