// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the gallery page.
//!
//! Organized the same way across the codebase: palette, opacity, spacing,
//! sizing, typography, radius, and shadows. Components never hardcode raw
//! values; they reach for a token so the page stays visually consistent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Footer background.
    pub const GRAY_900: Color = Color::from_rgb(0.13, 0.13, 0.13);
    /// Navigation bar background.
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const GRAY_600: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    /// Contact-section background.
    pub const GRAY_50: Color = Color::from_rgb(0.973, 0.973, 0.973);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimming layered over the hero background photo.
    pub const HERO_DIM: f32 = 0.4;
    /// Backdrop behind the lightbox dialog.
    pub const BACKDROP: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the sticky navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Height of the hero banner.
    pub const HERO_HEIGHT: f32 = 480.0;

    /// Width of one painting card in the grid.
    pub const CARD_WIDTH: f32 = 300.0;

    /// Height of the card image area.
    pub const CARD_IMAGE_HEIGHT: f32 = 200.0;

    /// Fitted height of the lightbox image; the enlarged presentation
    /// multiplies this by the zoom factor.
    pub const LIGHTBOX_IMAGE_HEIGHT: f32 = 420.0;

    /// Width of the lightbox dialog.
    pub const LIGHTBOX_WIDTH: f32 = 720.0;

    /// Maximum width of running text in the about section.
    pub const SECTION_TEXT_WIDTH: f32 = 680.0;

    /// Width of the contact form column.
    pub const FORM_WIDTH: f32 = 420.0;

    /// Height of the multi-line message editor.
    pub const MESSAGE_EDITOR_HEIGHT: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 44.0;

    /// Section headings (About, Featured Paintings, Get in Touch).
    pub const TITLE_LG: f32 = 30.0;

    /// Dialog title, navbar brand.
    pub const TITLE_MD: f32 = 20.0;

    /// Hero subtitle, lead paragraphs.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body text, labels, descriptions.
    pub const BODY: f32 = 14.0;

    /// Card descriptions, footer line, feedback line.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::HERO_DIM > 0.0 && opacity::HERO_DIM < 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    // Sizing validation
    assert!(sizing::LIGHTBOX_WIDTH > sizing::CARD_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
