//! Contact-form field validation.
//!
//! Client-side checks mirrored server-side: name and message length bounds,
//! a deliberately simple email shape, and a small set of spam patterns.
//! Each failure maps to the specific inline message shown to the user.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// A contact-form submission as entered by the visitor.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was rejected before any side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name (at least 2 characters)")]
    NameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("Message must be less than 1000 characters")]
    MessageTooLong,

    #[error("Message appears to contain spam content")]
    SpamDetected,
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static SPAM_KEYWORD_REGEX: OnceLock<Regex> = OnceLock::new();
static SPAM_PHRASE_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validate a submission. The first failing check wins; a passing
/// submission causes no side effects here.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    let name = submission.name.trim();
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }

    let email_regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    if !email_regex.is_match(submission.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }

    let message = submission.message.trim();
    let length = message.chars().count();
    if length < MIN_MESSAGE_LENGTH {
        return Err(ValidationError::MessageTooShort);
    }
    if length > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::MessageTooLong);
    }

    if is_spam(message) {
        return Err(ValidationError::SpamDetected);
    }

    Ok(())
}

/// Basic spam detection: known keywords, call-to-action phrases, and URLs
/// in the message body.
fn is_spam(message: &str) -> bool {
    let keywords = SPAM_KEYWORD_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\b(viagra|cialis|casino|lottery|winner|prize)\b").unwrap()
    });
    let phrases = SPAM_PHRASE_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\b(click here|buy now|limited offer)\b").unwrap()
    });
    let urls = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s]+").unwrap());

    keywords.is_match(message) || phrases.is_match(message) || urls.is_match(message)
}
