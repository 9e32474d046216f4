// SPDX-License-Identifier: MPL-2.0
//! Outbound contact-form delivery through an EmailJS-compatible REST endpoint.
//!
//! The provider accepts a service identifier, a template identifier, a
//! public key, and a map of named template variables, and answers with a
//! plain success or failure. Nothing else from the response is consumed.

use crate::config::EmailConfig;
use crate::error::EmailError;
use serde::Serialize;

/// Template variables for one contact-form submission.
///
/// Field names are part of the wire contract with the mail template and must
/// not be renamed. `Id` is an opaque pass-through value whose meaning belongs
/// to the template; it may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
    #[serde(rename = "Id")]
    pub correlation_id: String,
}

/// Request envelope understood by the provider.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Payload,
}

/// Client for the delivery provider. Cheap to clone; the HTTP client is
/// built per call so a failed builder never wedges the application.
#[derive(Debug, Clone)]
pub struct Client {
    config: EmailConfig,
}

impl Client {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Sends one submission. Resolves to `Ok(())` on provider acceptance and
    /// to a categorized [`EmailError`] otherwise. No retry, no local timeout:
    /// the caller decides how long it is willing to wait.
    pub async fn send(&self, payload: Payload) -> Result<(), EmailError> {
        let http = reqwest::Client::builder()
            .user_agent(crate::HTTP_USER_AGENT)
            .build()
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: &payload,
        };

        let response = http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            // The body is kept for the operator log only; the visitor gets a
            // generic failure message.
            let body = response.text().await.unwrap_or_default();
            Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
