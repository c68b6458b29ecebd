//! Language type: validated language representation.
//!
//! `Language` wraps a code that has been checked against the registry, so
//! only supported, enabled languages can be constructed. The two-element
//! language set cycles with [`Language::next`], which is what the page's
//! toggle button drives.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "sv")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SWEDISH: Language = Language { code: "sv" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "sv")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The default page language (English).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// The next language in the fixed cycle of enabled languages. With two
    /// languages this is a simple flip.
    pub fn next(self) -> Language {
        let enabled = LanguageRegistry::get().list_enabled();
        let position = enabled
            .iter()
            .position(|config| config.code == self.code)
            .unwrap_or(0);
        let next = enabled[(position + 1) % enabled.len()];
        Language { code: next.code }
    }

    /// The ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Language constructed via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// The language name in its native form.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the default page language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
