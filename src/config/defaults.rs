// SPDX-License-Identifier: MPL-2.0
//! Default values for the configuration.
//!
//! Centralizing the defaults here keeps `mod.rs` focused on structure and
//! (de)serialization, and gives tests a single place to reference the
//! build-time fallbacks.

/// Default delivery service identifier used when `[email] service_id` is
/// absent from `settings.toml`.
pub const DEFAULT_EMAIL_SERVICE_ID: &str = "service_p9drovh";

/// Default template identifier for the contact-form template.
pub const DEFAULT_EMAIL_TEMPLATE_ID: &str = "template_jtll4rk";

/// Default recipient-side public key.
pub const DEFAULT_EMAIL_PUBLIC_KEY: &str = "VrpDi-K1Twuhs1iBE";

/// Default REST endpoint of the delivery provider.
pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub(super) fn default_service_id() -> String {
    DEFAULT_EMAIL_SERVICE_ID.to_string()
}

pub(super) fn default_template_id() -> String {
    DEFAULT_EMAIL_TEMPLATE_ID.to_string()
}

pub(super) fn default_public_key() -> String {
    DEFAULT_EMAIL_PUBLIC_KEY.to_string()
}

pub(super) fn default_endpoint() -> String {
    DEFAULT_EMAIL_ENDPOINT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_https() {
        assert!(DEFAULT_EMAIL_ENDPOINT.starts_with("https://"));
    }
}
