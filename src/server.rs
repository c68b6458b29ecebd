//! HTTP front end.
//!
//! The application is wired once at startup into an [`App`] of explicit
//! service objects and exposed through three routes: the rendered page, the
//! language toggle, and the contact-form submission. A single mutex guards
//! the app, preserving the page's single-threaded event model: while a
//! submission is relaying, no other event can interleave.

use crate::config::Config;
use crate::contact::{ContactForm, SubmissionOutcome};
use crate::i18n::{CatalogValidator, LanguageSwitcher};
use crate::nav::Navigation;
use crate::page::{portfolio_document, Document};
use crate::rate_limit::RateLimiter;
use crate::storage::PreferenceStore;
use crate::validation::ContactSubmission;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// The wired application: page state plus the services operating on it.
pub struct App {
    pub document: Document,
    pub switcher: LanguageSwitcher,
    pub navigation: Navigation,
    pub contact: ContactForm,
}

impl App {
    /// Construct and wire all services, restore the persisted language and
    /// apply it to a fresh portfolio document.
    pub fn new(config: &Config) -> Self {
        let report = CatalogValidator::validate();
        for error in &report.errors {
            warn!("Translation catalog: {}", error);
        }
        for warning in &report.warnings {
            warn!("Translation catalog: {}", warning);
        }

        let store = PreferenceStore::open(&config.storage_file);
        let mut document = portfolio_document();

        let mut switcher = LanguageSwitcher::new(store.clone());
        switcher.bind(&document);
        switcher.initialize(config.host_locale.as_deref());
        switcher.apply(&mut document);
        switcher.persist();

        let navigation = Navigation::new(&document);
        let contact = ContactForm::new(RateLimiter::new(store));

        Self {
            document,
            switcher,
            navigation,
            contact,
        }
    }
}

/// Shared state behind the router.
pub struct AppState {
    pub config: Config,
    pub app: Mutex<App>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let app = App::new(&config);
        Self {
            config,
            app: Mutex::new(app),
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/language/toggle", post(toggle_language))
        .route("/api/contact", post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut app = state.app.lock().await;
    app.document.prune_banner(Utc::now().timestamp_millis());
    Html(app.document.render())
}

async fn toggle_language(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut app = state.app.lock().await;
    let App {
        document, switcher, ..
    } = &mut *app;

    let language = switcher.toggle();
    switcher.apply(document);
    switcher.persist();

    Json(json!({ "language": language.code() }))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<Value>) {
    let mut app = state.app.lock().await;
    let App {
        document, contact, ..
    } = &mut *app;

    let outcome = contact.submit(&state.config, document, submission).await;

    let (status, label) = match outcome {
        SubmissionOutcome::Sent => (StatusCode::OK, "sent"),
        SubmissionOutcome::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid"),
        SubmissionOutcome::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "rate_limited"),
        SubmissionOutcome::DeliveryFailed => (StatusCode::BAD_GATEWAY, "delivery_failed"),
    };

    (
        status,
        Json(json!({ "status": label, "message": outcome.user_message() })),
    )
}
