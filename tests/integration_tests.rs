//! Integration tests for the portfolio site.
//!
//! These tests exercise the wired application end to end: the HTTP routes,
//! the language switcher against real preference storage, and the contact
//! flow against a mocked email delivery API.

use portfolio_site::config::Config;
use portfolio_site::server::{router, AppState};
use portfolio_site::storage::{PreferenceStore, PREFERRED_LANGUAGE_KEY, RATE_LIMIT_KEY};
use serde_json::{json, Value};
use serial_test::serial;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ==================== Test Helpers ====================

/// Create a test config pointing at a mocked delivery API and a
/// temporary preference store.
fn create_test_config(email_api_url: &str, temp_dir: &TempDir) -> Config {
    Config {
        emailjs_service_id: "service_test".to_string(),
        emailjs_template_id: "template_test".to_string(),
        emailjs_public_key: "public_key_test".to_string(),
        emailjs_api_url: email_api_url.to_string(),
        storage_file: temp_dir
            .path()
            .join("preferences.json")
            .to_string_lossy()
            .into_owned(),
        host_locale: None,
        port: 0,
    }
}

/// Spawn the application on an ephemeral port and return its base URL.
async fn spawn_app(config: Config) -> String {
    let state = Arc::new(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

fn valid_submission() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "message": "I would like to discuss a new project with you."
    })
}

async fn mount_delivery(mock_server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

// ==================== Contact Flow Tests ====================

#[tokio::test]
async fn test_valid_submission_delivers_exactly_once() {
    let mock_server = MockServer::start().await;
    mount_delivery(&mock_server, 200, 1).await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &temp_dir);
    let storage_file = config.storage_file.clone();
    let base = spawn_app(config).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/contact", base))
        .json(&valid_submission())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "sent");

    // The accepted submission is counted against the rate limit
    let store = PreferenceStore::open(&storage_file);
    let record: Value = serde_json::from_str(&store.get(RATE_LIMIT_KEY).unwrap()).unwrap();
    assert_eq!(record["count"], 1);

    // The success banner shows on the page
    let page = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();
    assert!(page.contains("form-message-success"));
}

#[tokio::test]
async fn test_failed_delivery_is_not_counted() {
    let mock_server = MockServer::start().await;
    mount_delivery(&mock_server, 500, 1).await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &temp_dir);
    let storage_file = config.storage_file.clone();
    let base = spawn_app(config).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/contact", base))
        .json(&valid_submission())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "delivery_failed");

    // No attempt recorded for the failed relay
    let store = PreferenceStore::open(&storage_file);
    assert_eq!(store.get(RATE_LIMIT_KEY), None);

    // The error banner shows on the page
    let page = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();
    assert!(page.contains("form-message-error"));
}

#[tokio::test]
async fn test_fourth_submission_is_rate_limited() {
    let mock_server = MockServer::start().await;
    // Only the three allowed submissions may reach the collaborator
    mount_delivery(&mock_server, 200, 3).await;
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(create_test_config(&mock_server.uri(), &temp_dir)).await;

    let client = reqwest::Client::new();
    for _ in 0..3 {
        let response = client
            .post(format!("{}/api/contact", base))
            .json(&valid_submission())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    let response = client
        .post(format!("{}/api/contact", base))
        .json(&valid_submission())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 429);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "rate_limited");
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_collaborator() {
    let mock_server = MockServer::start().await;
    mount_delivery(&mock_server, 200, 0).await;
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(create_test_config(&mock_server.uri(), &temp_dir)).await;

    let client = reqwest::Client::new();
    for (field, value) in [
        ("name", "A"),
        ("email", "a@b"),
        ("message", "short"),
    ] {
        let mut submission = valid_submission();
        submission[field] = json!(value);

        let response = client
            .post(format!("{}/api/contact", base))
            .json(&submission)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 422, "field {} should fail", field);
    }
}

// ==================== Language Persistence Tests ====================

#[tokio::test]
async fn test_language_choice_survives_restart() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &temp_dir);
    let base = spawn_app(config.clone()).await;

    let client = reqwest::Client::new();
    let response: Value = client
        .post(format!("{}/api/language/toggle", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(response["language"], "sv");

    // A second app instance over the same store restores Swedish
    let base2 = spawn_app(config).await;
    let page = reqwest::get(format!("{}/", base2)).await.unwrap().text().await.unwrap();
    assert!(page.contains("<html lang=\"sv\">"));
    assert!(page.contains("Skicka meddelande"));
}

#[tokio::test]
async fn test_unsupported_persisted_language_falls_back_to_english() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &temp_dir);

    let store = PreferenceStore::open(&config.storage_file);
    store.set(PREFERRED_LANGUAGE_KEY, "fr").unwrap();

    let base = spawn_app(config).await;
    let page = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();
    assert!(page.contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn test_host_locale_used_when_nothing_persisted() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&mock_server.uri(), &temp_dir);
    config.host_locale = Some("sv_SE.UTF-8".to_string());

    let base = spawn_app(config).await;
    let page = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();
    assert!(page.contains("<html lang=\"sv\">"));
}

// ==================== Config Tests ====================

#[test]
#[serial]
fn test_config_from_env_with_defaults() {
    std::env::set_var("EMAILJS_SERVICE_ID", "service_x");
    std::env::set_var("EMAILJS_TEMPLATE_ID", "template_x");
    std::env::set_var("EMAILJS_PUBLIC_KEY", "key_x");
    std::env::remove_var("EMAILJS_API_URL");
    std::env::remove_var("STORAGE_FILE");
    std::env::remove_var("PORT");

    let config = Config::from_env().expect("Config should load");
    assert_eq!(config.emailjs_service_id, "service_x");
    assert_eq!(config.emailjs_api_url, "https://api.emailjs.com");
    assert_eq!(config.storage_file, "data/preferences.json");
    assert_eq!(config.port, 8080);
}

#[test]
#[serial]
fn test_config_from_env_missing_required_var_fails() {
    std::env::remove_var("EMAILJS_SERVICE_ID");
    std::env::set_var("EMAILJS_TEMPLATE_ID", "template_x");
    std::env::set_var("EMAILJS_PUBLIC_KEY", "key_x");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("EMAILJS_SERVICE_ID"));
}

#[test]
#[serial]
fn test_config_host_locale_override_wins_over_lang() {
    std::env::set_var("EMAILJS_SERVICE_ID", "service_x");
    std::env::set_var("EMAILJS_TEMPLATE_ID", "template_x");
    std::env::set_var("EMAILJS_PUBLIC_KEY", "key_x");
    std::env::set_var("LANG", "en_US.UTF-8");
    std::env::set_var("HOST_LOCALE", "sv_SE.UTF-8");

    let config = Config::from_env().expect("Config should load");
    assert_eq!(config.host_locale.as_deref(), Some("sv_SE.UTF-8"));

    std::env::remove_var("HOST_LOCALE");
}
