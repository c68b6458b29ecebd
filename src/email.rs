//! Email delivery client.
//!
//! The contact form relays through an EmailJS-style transactional-email
//! API. The service is an opaque collaborator: one send call, HTTP 200 is
//! success, anything else is failure. The base URL is configurable so
//! tests can point at a mock server.

use crate::config::Config;
use crate::validation::ContactSubmission;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SendEmailRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Debug, Serialize)]
struct TemplateParams {
    from_name: String,
    reply_to: String,
    message: String,
}

/// Relay a contact submission through the email delivery API.
pub async fn send_contact_email(config: &Config, submission: &ContactSubmission) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{}/api/v1.0/email/send", config.emailjs_api_url);

    let request = SendEmailRequest {
        service_id: config.emailjs_service_id.clone(),
        template_id: config.emailjs_template_id.clone(),
        user_id: config.emailjs_public_key.clone(),
        template_params: TemplateParams {
            from_name: submission.name.trim().to_string(),
            reply_to: submission.email.trim().to_string(),
            message: submission.message.trim().to_string(),
        },
    };

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .context("Failed to send request to email delivery API")?;

    // The collaborator contract is exactly 200, not any 2xx
    if response.status().as_u16() != 200 {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Email delivery API error ({}): {}", status, body);
    }

    Ok(())
}
