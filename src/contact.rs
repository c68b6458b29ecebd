//! Contact submission flow.
//!
//! Orchestrates one logical submission: field validation, the rate-limit
//! check, delegation to the email delivery collaborator, and user-facing
//! feedback on the page. The delivery call is the only suspend point; the
//! rate limiter is updated only after delivery is confirmed, so a failed or
//! hung relay never costs the visitor an attempt.

use crate::config::Config;
use crate::email::send_contact_email;
use crate::page::{BannerKind, Document};
use crate::rate_limit::RateLimiter;
use crate::validation::{validate, ContactSubmission, ValidationError};
use chrono::Utc;
use tracing::{info, warn};

const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";
const WAIT_MESSAGE: &str = "Please wait before sending another message";

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Invalid(ValidationError),
    RateLimited,
    DeliveryFailed,
}

impl SubmissionOutcome {
    /// The message shown to the visitor, matching the page banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionOutcome::Sent => SUCCESS_MESSAGE.to_string(),
            SubmissionOutcome::Invalid(error) => error.to_string(),
            SubmissionOutcome::RateLimited => WAIT_MESSAGE.to_string(),
            SubmissionOutcome::DeliveryFailed => FAILURE_MESSAGE.to_string(),
        }
    }
}

/// The contact-form service.
pub struct ContactForm {
    limiter: RateLimiter,
}

impl ContactForm {
    pub fn new(limiter: RateLimiter) -> Self {
        Self { limiter }
    }

    /// Run one submission through validation, the rate limiter and the
    /// delivery collaborator, leaving a feedback banner on the document.
    ///
    /// Side-effect ordering: nothing is recorded for rejected submissions;
    /// the form fields reset and the attempt is counted only once delivery
    /// reports success.
    pub async fn submit(
        &self,
        config: &Config,
        document: &mut Document,
        submission: ContactSubmission,
    ) -> SubmissionOutcome {
        let now = Utc::now().timestamp_millis();

        if let Err(error) = validate(&submission) {
            info!("Rejected contact submission: {}", error);
            document.set_banner(BannerKind::Error, &error.to_string(), now);
            return SubmissionOutcome::Invalid(error);
        }

        if !self.limiter.check_allowed(now) {
            info!("Rejected contact submission: rate limit reached");
            document.set_banner(BannerKind::Error, WAIT_MESSAGE, now);
            return SubmissionOutcome::RateLimited;
        }

        // Mirror the entered values into the form state for the duration of
        // the relay; they survive a failed attempt so nothing is lost.
        fill_fields(document, &submission);

        match send_contact_email(config, &submission).await {
            Ok(()) => {
                let now = Utc::now().timestamp_millis();
                info!("Contact submission delivered");
                document.set_banner(BannerKind::Success, SUCCESS_MESSAGE, now);
                reset_fields(document);
                self.limiter.record_attempt(now);
                SubmissionOutcome::Sent
            }
            Err(e) => {
                let now = Utc::now().timestamp_millis();
                warn!("Contact submission delivery failed: {:#}", e);
                document.set_banner(BannerKind::Error, FAILURE_MESSAGE, now);
                SubmissionOutcome::DeliveryFailed
            }
        }
    }
}

fn fill_fields(document: &mut Document, submission: &ContactSubmission) {
    for (id, value) in [
        ("name", &submission.name),
        ("email", &submission.email),
        ("message", &submission.message),
    ] {
        if let Some(node) = document.node_mut(id) {
            node.value = value.trim().to_string();
        }
    }
}

fn reset_fields(document: &mut Document) {
    for id in ["name", "email", "message"] {
        if let Some(node) = document.node_mut(id) {
            node.value.clear();
        }
    }
}
