// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (send, close).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Navigation-bar link: transparent over the dark toolbar, white label.
pub fn nav_link(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: 0.15,
            ..palette::WHITE
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: 0.25,
            ..palette::WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Painting card: a white surface that lifts slightly on hover.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, card_shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Color::from_rgb(0.99, 0.99, 0.99), shadow::MD)
        }
        _ => (WHITE, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_900,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: card_shadow,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn nav_link_is_transparent_until_hovered() {
        let theme = Theme::Light;
        let normal = nav_link(&theme, button::Status::Active);
        let hover = nav_link(&theme, button::Status::Hovered);

        assert!(normal.background.is_none());
        assert!(hover.background.is_some());
    }
}
