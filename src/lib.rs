// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a single-page art gallery showcase built with the Iced
//! GUI framework.
//!
//! It renders a scrollable page (hero, about, paintings, contact, footer)
//! with a zoomable lightbox dialog and a contact form that forwards
//! submissions to a transactional-email provider, and demonstrates
//! internationalization with Fluent and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod email;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;

/// User agent sent with every outbound HTTP request.
pub(crate) const HTTP_USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));
