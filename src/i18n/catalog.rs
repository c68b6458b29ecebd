//! Static translation catalog.
//!
//! One dictionary per language, mapping a translation key (the value of a
//! node's `data-translate` attribute) to its display string. The catalog is
//! built once on first access and immutable thereafter. Keys missing from a
//! dictionary surface as lookup misses; the switcher reports them without
//! failing.

use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The translation dictionaries for all supported languages.
pub struct Catalog {
    tables: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the global catalog instance, initializing it on first call.
    pub fn get() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            let mut tables = HashMap::new();
            tables.insert("en", ENGLISH.iter().copied().collect());
            tables.insert("sv", SWEDISH.iter().copied().collect());
            Catalog { tables }
        })
    }

    /// Look up the display string for `key` in `language`.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables
            .get(language.code())
            .and_then(|table| table.get(key).copied())
    }

    /// All keys present in the dictionary for `language`.
    pub fn keys(&self, language: Language) -> Vec<&'static str> {
        self.tables
            .get(language.code())
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default()
    }
}

const ENGLISH: &[(&str, &str)] = &[
    // Navigation
    ("nav-home", "Home"),
    ("nav-about", "About"),
    ("nav-skills", "Skills"),
    ("nav-projects", "Projects"),
    ("nav-contact", "Contact"),
    ("nav-cv", "Download CV"),
    ("lang-toggle", "EN"),
    ("lang-toggle-aria", "Switch language"),
    // Hero
    ("hero-line1", "CRAFTING INTELLIGENT"),
    ("hero-line2", "SOLUTIONS WITH AI"),
    (
        "hero-desc",
        "Crafting intelligent solutions through code. Specialized in AI development, machine learning, and creating cutting-edge applications that push technology boundaries.",
    ),
    ("hero-btn-projects", "View AI Projects"),
    ("hero-btn-contact", "Contact Me"),
    ("hero-btn-cv", "Download CV"),
    // About
    ("about-title", "About Me"),
    ("about-subtitle", "AI Developer & Machine Learning Engineer"),
    (
        "about-p1",
        "My journey into the world of AI is rooted in two years of full-time studies in web development, which gave me a deep understanding of what constitutes high-quality and sustainable code.",
    ),
    (
        "about-p2",
        "I always design my solutions with a modular architecture, making the code reusable, easy to test, and simple to scale. My philosophy is to write code that not only works today but is also easy for the entire team to maintain and debug in the future.",
    ),
    (
        "about-p3",
        "By combining traditional engineering practices with a modern, AI-assisted workflow I can accelerate development while keeping the outcome professional and sustainable over time.",
    ),
    // Skills
    ("skills-title", "Technical Skills"),
    ("skill-ml", "Machine Learning"),
    ("skill-python", "Python"),
    ("skill-dataviz", "Data Visualization"),
    ("skill-nlp", "Natural Language Processing"),
    ("skill-cv", "Computer Vision"),
    ("skill-dl", "Deep Learning (TensorFlow)"),
    // Projects
    ("projects-title", "Featured Projects"),
    ("project1-title", "AI Assistant Platform"),
    (
        "project1-desc",
        "A conversational AI platform that understands and responds to user queries in natural language.",
    ),
    ("project2-title", "Computer Vision System"),
    (
        "project2-desc",
        "An advanced object detection and recognition system for persistent video streams. Built with high accuracy.",
    ),
    ("project3-title", "Predictive Analytics Tool"),
    (
        "project3-desc",
        "A machine learning-based tool that provides sales forecasts and identifies potential market trends.",
    ),
    ("project-link", "View Live Project"),
    // Contact
    ("contact-title", "Get In Touch"),
    ("contact-subtitle", "Let's Connect"),
    (
        "contact-desc",
        "I'm always open to discussing new projects, creative ideas or opportunities. Feel free to reach out using the form or through my contact details.",
    ),
    ("contact-location", "Karlstad, Sweden"),
    ("contact-email", "hello@example.dev"),
    ("contact-phone", "+46 70 123 45 67"),
    ("form-name", "Name"),
    ("form-email", "Email"),
    ("form-message", "Message"),
    ("form-submit", "Send Message"),
    // Page title
    ("page-title", "AI Coder Portfolio"),
];

const SWEDISH: &[(&str, &str)] = &[
    // Navigation
    ("nav-home", "Hem"),
    ("nav-about", "Om mig"),
    ("nav-skills", "Färdigheter"),
    ("nav-projects", "Projekt"),
    ("nav-contact", "Kontakt"),
    ("nav-cv", "Ladda ner CV"),
    ("lang-toggle", "SV"),
    ("lang-toggle-aria", "Byt språk"),
    // Hero
    ("hero-line1", "SKAPAR INTELLIGENTA"),
    ("hero-line2", "LÖSNINGAR MED AI"),
    (
        "hero-desc",
        "Skapar intelligenta lösningar genom kod. Specialiserad på AI-utveckling, maskininlärning och att skapa banbrytande applikationer som tänjer teknikens gränser.",
    ),
    ("hero-btn-projects", "Visa AI-projekt"),
    ("hero-btn-contact", "Kontakta mig"),
    ("hero-btn-cv", "Ladda ner CV"),
    // About
    ("about-title", "Om mig"),
    ("about-subtitle", "AI-utvecklare & Maskininlärningsingenjör"),
    (
        "about-p1",
        "Min resa in i AI-världen har sin grund i två års heltidsstudier inom webbutveckling, vilket gav mig en djup förståelse för vad som utgör högkvalitativ och hållbar kod.",
    ),
    (
        "about-p2",
        "Jag designar alltid mina lösningar med en modulär arkitektur, vilket gör koden återanvändbar, lätt att testa och enkel att skala. Min filosofi är att skriva kod som inte bara fungerar idag utan också är lätt för hela teamet att underhålla och felsöka i framtiden.",
    ),
    (
        "about-p3",
        "Genom att kombinera traditionella ingenjörsprinciper med ett modernt, AI-assisterat arbetsflöde kan jag accelerera utvecklingen och samtidigt hålla resultatet professionellt och långsiktigt hållbart.",
    ),
    // Skills
    ("skills-title", "Tekniska färdigheter"),
    ("skill-ml", "Maskininlärning"),
    ("skill-python", "Python"),
    ("skill-dataviz", "Datavisualisering"),
    ("skill-nlp", "Naturlig språkbehandling"),
    ("skill-cv", "Datorseende"),
    ("skill-dl", "Djupinlärning (TensorFlow)"),
    // Projects
    ("projects-title", "Utvalda projekt"),
    ("project1-title", "AI-assistentplattform"),
    (
        "project1-desc",
        "En konversations-AI-plattform som förstår och svarar på användarfrågor på naturligt språk.",
    ),
    ("project2-title", "Datorseendesystem"),
    (
        "project2-desc",
        "Ett avancerat objektdetekterings- och igenkänningssystem för kontinuerliga videoströmmar. Byggt med hög precision.",
    ),
    ("project3-title", "Prediktivt analysverktyg"),
    (
        "project3-desc",
        "Ett maskininlärningsbaserat verktyg som ger försäljningsprognoser och identifierar potentiella marknadstrender.",
    ),
    ("project-link", "Visa live-projekt"),
    // Contact
    ("contact-title", "Kontakta mig"),
    ("contact-subtitle", "Låt oss koppla upp"),
    (
        "contact-desc",
        "Jag är alltid öppen för att diskutera nya projekt, kreativa idéer eller möjligheter. Kontakta mig gärna via formuläret eller genom mina kontaktuppgifter.",
    ),
    ("contact-location", "Karlstad, Sverige"),
    ("contact-email", "hello@example.dev"),
    ("contact-phone", "+46 70 123 45 67"),
    ("form-name", "Namn"),
    ("form-email", "E-post"),
    ("form-message", "Meddelande"),
    ("form-submit", "Skicka meddelande"),
    // Page title
    ("page-title", "AI-kodare Portfolio"),
];

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_english_key() {
        let catalog = Catalog::get();
        assert_eq!(catalog.lookup(Language::ENGLISH, "nav-home"), Some("Home"));
    }

    #[test]
    fn test_lookup_swedish_key() {
        let catalog = Catalog::get();
        assert_eq!(catalog.lookup(Language::SWEDISH, "nav-home"), Some("Hem"));
    }

    #[test]
    fn test_lookup_missing_key_returns_none() {
        let catalog = Catalog::get();
        assert_eq!(catalog.lookup(Language::ENGLISH, "no-such-key"), None);
    }

    #[test]
    fn test_page_title_differs_per_language() {
        let catalog = Catalog::get();
        let en = catalog.lookup(Language::ENGLISH, "page-title").unwrap();
        let sv = catalog.lookup(Language::SWEDISH, "page-title").unwrap();
        assert_ne!(en, sv);
    }

    #[test]
    fn test_toggle_labels_name_each_language() {
        let catalog = Catalog::get();
        assert_eq!(catalog.lookup(Language::ENGLISH, "lang-toggle"), Some("EN"));
        assert_eq!(catalog.lookup(Language::SWEDISH, "lang-toggle"), Some("SV"));
    }

    // ==================== Key Set Tests ====================

    #[test]
    fn test_keys_nonempty_for_both_languages() {
        let catalog = Catalog::get();
        assert!(!catalog.keys(Language::ENGLISH).is_empty());
        assert!(!catalog.keys(Language::SWEDISH).is_empty());
    }

    #[test]
    fn test_dictionaries_have_no_duplicate_keys() {
        for table in [ENGLISH, SWEDISH] {
            let mut keys: Vec<_> = table.iter().map(|(k, _)| *k).collect();
            let before = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(before, keys.len());
        }
    }
}
