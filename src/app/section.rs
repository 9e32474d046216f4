// SPDX-License-Identifier: MPL-2.0
//! Page sections and the navigation contract between the navbar and the
//! root composition.
//!
//! The four anchor tokens ("home", "about", "paintings", "contact") are the
//! stable identifiers any collaborator must use to request navigation. Each
//! section also knows its landing position within the page scrollable.

use iced::widget::scrollable::RelativeOffset;

/// The four addressable sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Paintings,
    Contact,
}

impl Section {
    /// Display order, which is also the vertical page order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Paintings,
        Section::Contact,
    ];

    /// Stable anchor token. Part of the navigation contract; never rename.
    pub fn token(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Paintings => "paintings",
            Section::Contact => "contact",
        }
    }

    /// Resolves an anchor token back to its section.
    pub fn from_token(token: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.token() == token)
    }

    /// Localization key for the section's navbar button label.
    pub fn nav_label_key(self) -> &'static str {
        match self {
            Section::Home => "navbar-home-button",
            Section::About => "navbar-about-button",
            Section::Paintings => "navbar-paintings-button",
            Section::Contact => "navbar-contact-button",
        }
    }

    /// Landing position of the section within the page scrollable.
    pub fn page_offset(self) -> RelativeOffset {
        let y = match self {
            Section::Home => 0.0,
            Section::About => 0.34,
            Section::Paintings => 0.62,
            Section::Contact => 1.0,
        };
        RelativeOffset { x: 0.0, y }
    }
}
