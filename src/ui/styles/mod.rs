// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared by the page sections.

pub mod button;
pub mod container;
