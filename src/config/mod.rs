// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language preference
//! - `[email]` - Delivery-provider identifiers for the contact form
//!
//! The email identifiers carry build-time defaults (see [`defaults`]), so a
//! missing or partial config file still yields a working application. Tests
//! substitute the endpoint and identifiers through this structure instead of
//! reaching for compile-time constants.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! let mut config = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Identifiers for the transactional-email provider backing the contact form.
///
/// These are configuration with static lifetime for the duration of the
/// process; they are never derived from user input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailConfig {
    /// Provider-side service identifier.
    #[serde(default = "defaults::default_service_id")]
    pub service_id: String,

    /// Identifier of the contact-form template.
    #[serde(default = "defaults::default_template_id")]
    pub template_id: String,

    /// Recipient-side public key.
    #[serde(default = "defaults::default_public_key")]
    pub public_key: String,

    /// REST endpoint the submission is posted to.
    #[serde(default = "defaults::default_endpoint")]
    pub endpoint: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: defaults::default_service_id(),
            template_id: defaults::default_template_id(),
            public_key: defaults::default_public_key(),
            endpoint: defaults::default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when the file is
/// missing or unreadable. A malformed file is reported through the log and
/// never prevents startup.
pub fn load() -> Config {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return config,
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
                }
            }
        }
    }
    Config::default()
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("malformed settings file, using defaults: {}", err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
