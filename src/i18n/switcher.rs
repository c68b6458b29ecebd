//! Language switcher: the state controller for the active page language.
//!
//! Owns the current language, loads and persists the user's choice, and
//! applies the active dictionary to every translatable node of a document.
//! Every failure mode here is recoverable: corrupt or missing persisted
//! state falls back to the default language, a missing toggle anchor only
//! disables interactive switching, and a missing translation key leaves the
//! node untouched.

use crate::i18n::{Catalog, Language};
use crate::page::{Document, NodeKind};
use crate::storage::{PreferenceStore, PREFERRED_LANGUAGE_KEY};
use tracing::{debug, warn};

const TOGGLE_BUTTON_ID: &str = "languageToggle";

/// The language state controller.
pub struct LanguageSwitcher {
    current: Language,
    store: PreferenceStore,
    /// Cleared when the toggle anchor is missing from the page.
    interactive: bool,
}

impl LanguageSwitcher {
    pub fn new(store: PreferenceStore) -> Self {
        Self {
            current: Language::default_language(),
            store,
            interactive: true,
        }
    }

    /// Check the document for the toggle anchor. A missing anchor disables
    /// interactive switching but is not an error.
    pub fn bind(&mut self, document: &Document) {
        self.interactive = document.node(TOGGLE_BUTTON_ID).is_some();
        if !self.interactive {
            warn!("Language toggle button not found, language switching disabled");
        }
    }

    /// Resolve the initial language.
    ///
    /// Order: persisted preference (ignored when unsupported or corrupt),
    /// then the host locale if it names a supported language, then the
    /// default. Never fails.
    pub fn initialize(&mut self, host_locale: Option<&str>) {
        if let Some(saved) = self.store.get(PREFERRED_LANGUAGE_KEY) {
            match Language::from_code(&saved) {
                Ok(language) => {
                    debug!("Restored persisted language preference '{}'", saved);
                    self.current = language;
                    return;
                }
                Err(_) => {
                    warn!("Ignoring unsupported persisted language '{}'", saved);
                }
            }
        }

        if let Some(locale) = host_locale {
            if let Some(language) = language_from_locale(locale) {
                debug!("Using host locale '{}' for initial language", locale);
                self.current = language;
                return;
            }
        }

        self.current = Language::default_language();
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Advance to the next language in the fixed cycle. A no-op when the
    /// toggle anchor was missing at bind time.
    pub fn toggle(&mut self) -> Language {
        if !self.interactive {
            warn!("Ignoring language toggle: switching is disabled");
            return self.current;
        }
        self.current = self.current.next();
        self.current
    }

    /// Apply the active language to the document: the language attribute,
    /// the page title, the toggle button's accessible name, and the text or
    /// placeholder of every node carrying a translation key. A key missing
    /// from the dictionary leaves its node untouched and is reported as a
    /// non-fatal diagnostic. Idempotent.
    pub fn apply(&self, document: &mut Document) {
        let catalog = Catalog::get();
        let language = self.current;

        document.lang = language.code().to_string();

        match catalog.lookup(language, "page-title") {
            Some(title) => document.title = title.to_string(),
            None => warn!("Translation key not found: page-title ({})", language.code()),
        }

        if let Some(button) = document.node_mut(TOGGLE_BUTTON_ID) {
            if let Some(label) = catalog.lookup(language, "lang-toggle-aria") {
                button.aria_label = label.to_string();
            }
        }

        for node in document.nodes_mut() {
            let Some(key) = node.translate_key.as_deref() else {
                continue;
            };
            match catalog.lookup(language, key) {
                Some(translation) => match node.kind {
                    NodeKind::Field => node.placeholder = translation.to_string(),
                    NodeKind::Text => node.text = translation.to_string(),
                },
                None => {
                    warn!("Translation key not found: {} ({})", key, language.code());
                }
            }
        }
    }

    /// Persist the current language. Write failures are logged, never
    /// propagated.
    pub fn persist(&self) {
        if let Err(e) = self.store.set(PREFERRED_LANGUAGE_KEY, self.current.code()) {
            warn!("Failed to save language preference: {:#}", e);
        }
    }
}

/// Map a host locale string ("sv_SE.UTF-8", "en-US") to a supported
/// language via its leading language subtag.
fn language_from_locale(locale: &str) -> Option<Language> {
    let subtag: String = locale
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    Language::from_code(&subtag).ok()
}
