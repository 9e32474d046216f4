// SPDX-License-Identifier: MPL-2.0
//! UI components for the gallery page, one module per section plus the
//! shared design tokens and widget styles.

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod styles;
