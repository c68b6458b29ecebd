use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // EmailJS delivery service
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    pub emailjs_api_url: String,

    // Preference storage
    pub storage_file: String,

    // Locale fallback when no preference is persisted
    pub host_locale: Option<String>,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // EmailJS - service, template and public key identify the account
            emailjs_service_id: std::env::var("EMAILJS_SERVICE_ID")
                .context("EMAILJS_SERVICE_ID not set")?,
            emailjs_template_id: std::env::var("EMAILJS_TEMPLATE_ID")
                .context("EMAILJS_TEMPLATE_ID not set")?,
            emailjs_public_key: std::env::var("EMAILJS_PUBLIC_KEY")
                .context("EMAILJS_PUBLIC_KEY not set")?,
            emailjs_api_url: std::env::var("EMAILJS_API_URL")
                .unwrap_or_else(|_| "https://api.emailjs.com".to_string()),

            // Storage
            storage_file: std::env::var("STORAGE_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            // Locale - HOST_LOCALE overrides the system LANG
            host_locale: std::env::var("HOST_LOCALE")
                .or_else(|_| std::env::var("LANG"))
                .ok(),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
