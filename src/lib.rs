//! Bilingual portfolio application.
//!
//! The crate is organized as explicit service objects wired once at startup:
//! a [`page::Document`] view model, the [`i18n`] language switcher, the
//! [`rate_limit::RateLimiter`] guarding the contact form, and the
//! [`contact::ContactForm`] orchestration that relays submissions through an
//! external email-delivery API. A small axum front end in [`server`] exposes
//! the page and the two user actions (toggle language, submit the form).

pub mod config;
pub mod contact;
pub mod email;
pub mod i18n;
pub mod nav;
pub mod page;
pub mod rate_limit;
pub mod server;
pub mod storage;
pub mod validation;
