//! Page view model.
//!
//! The portfolio page is a flat collection of nodes plus document-level
//! state (language attribute, title, transient form banner). Instead of
//! inspecting runtime element types, every node carries an explicit kind
//! tag describing the capability that matters for translation: `Text`
//! nodes expose a visible-text property, `Field` nodes expose a
//! placeholder (and hold the user-entered value).
//!
//! Rendering is a pure function of the current node state and produces the
//! HTML body served by the front end.

use std::collections::BTreeSet;

/// How long a form feedback banner stays visible.
pub const BANNER_TTL_MS: i64 = 5_000;

/// Capability tag for a page node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Supports a visible-text property.
    Text,
    /// Input-like: supports a placeholder property and holds a value.
    Field,
}

/// A single addressable element of the page.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    /// Translation key (the `data-translate` contract); `None` for
    /// structural nodes that carry no translatable copy.
    pub translate_key: Option<String>,
    pub text: String,
    pub placeholder: String,
    pub value: String,
    pub aria_label: String,
    pub classes: BTreeSet<String>,
}

impl Node {
    pub fn text(id: &str) -> Self {
        Self::new(id, NodeKind::Text, None)
    }

    pub fn text_keyed(id: &str, key: &str) -> Self {
        Self::new(id, NodeKind::Text, Some(key.to_string()))
    }

    pub fn field(id: &str, key: &str) -> Self {
        Self::new(id, NodeKind::Field, Some(key.to_string()))
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    fn new(id: &str, kind: NodeKind, translate_key: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            kind,
            translate_key,
            text: String::new(),
            placeholder: String::new(),
            value: String::new(),
            aria_label: String::new(),
            classes: BTreeSet::new(),
        }
    }
}

/// Kind of feedback banner shown after a form submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "form-message-success",
            BannerKind::Error => "form-message-error",
        }
    }
}

/// A transient feedback message, removed once its deadline passes.
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub expires_at: i64,
}

/// The page document: language attribute, title, nodes and banner state.
#[derive(Debug, Clone)]
pub struct Document {
    pub lang: String,
    pub title: String,
    nodes: Vec<Node>,
    banner: Option<Banner>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            lang: String::new(),
            title: String::new(),
            nodes: Vec::new(),
            banner: None,
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Add `class` to the node `id`. Missing nodes are ignored.
    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.insert(class.to_string());
        }
    }

    /// Remove `class` from the node `id`. Missing nodes are ignored.
    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.remove(class);
        }
    }

    /// Toggle `class` on the node `id`; returns whether the class is now
    /// present. Missing nodes are ignored and report `false`.
    pub fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                if node.classes.remove(class) {
                    false
                } else {
                    node.classes.insert(class.to_string());
                    true
                }
            }
            None => false,
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.node(id).is_some_and(|n| n.classes.contains(class))
    }

    /// Show a feedback banner, replacing any existing one.
    pub fn set_banner(&mut self, kind: BannerKind, message: &str, now_ms: i64) {
        self.banner = Some(Banner {
            kind,
            message: message.to_string(),
            expires_at: now_ms + BANNER_TTL_MS,
        });
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Drop the banner once its deadline has passed.
    pub fn prune_banner(&mut self, now_ms: i64) {
        if let Some(banner) = &self.banner {
            if now_ms >= banner.expires_at {
                self.banner = None;
            }
        }
    }

    /// Render the document to an HTML string reflecting the current state.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&self.lang)));
        html.push_str("<head><meta charset=\"utf-8\"><title>");
        html.push_str(&escape_html(&self.title));
        html.push_str("</title></head>\n<body>\n");

        for node in &self.nodes {
            html.push_str(&render_node(node));
            html.push('\n');
        }

        if let Some(banner) = &self.banner {
            html.push_str(&format!(
                "<div class=\"form-message {}\">{}</div>\n",
                banner.kind.css_class(),
                escape_html(&banner.message)
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn render_node(node: &Node) -> String {
    let classes = node.classes.iter().cloned().collect::<Vec<_>>().join(" ");
    let mut attrs = format!("id=\"{}\"", escape_html(&node.id));
    if !classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", escape_html(&classes)));
    }
    if !node.aria_label.is_empty() {
        attrs.push_str(&format!(" aria-label=\"{}\"", escape_html(&node.aria_label)));
    }

    match node.kind {
        NodeKind::Field => {
            attrs.push_str(&format!(" placeholder=\"{}\"", escape_html(&node.placeholder)));
            if !node.value.is_empty() {
                attrs.push_str(&format!(" value=\"{}\"", escape_html(&node.value)));
            }
            format!("<input {}>", attrs)
        }
        NodeKind::Text => format!("<span {}>{}</span>", attrs, escape_html(&node.text)),
    }
}

/// Escape text for safe interpolation into HTML content and attributes.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Build the portfolio page: navigation, hero, about, skills, projects and
/// the contact section with its form. Copy is filled in by the language
/// switcher; only structure is defined here.
pub fn portfolio_document() -> Document {
    let mut doc = Document::new();

    // Header and navigation
    doc.push(Node::text("header").with_class("header"));
    doc.push(Node::text("hamburger").with_class("hamburger"));
    doc.push(Node::text("nav-links").with_class("nav-links"));
    doc.push(Node::text_keyed("nav-home", "nav-home"));
    doc.push(Node::text_keyed("nav-about", "nav-about"));
    doc.push(Node::text_keyed("nav-skills", "nav-skills"));
    doc.push(Node::text_keyed("nav-projects", "nav-projects"));
    doc.push(Node::text_keyed("nav-contact", "nav-contact"));
    doc.push(Node::text_keyed("nav-cv", "nav-cv"));
    doc.push(Node::text("languageToggle").with_class("lang-toggle"));
    doc.push(Node::text_keyed("lang-text", "lang-toggle").with_class("lang-text"));

    // Hero
    doc.push(Node::text_keyed("hero-line1", "hero-line1"));
    doc.push(Node::text_keyed("hero-line2", "hero-line2"));
    doc.push(Node::text_keyed("hero-desc", "hero-desc"));
    doc.push(Node::text_keyed("hero-btn-projects", "hero-btn-projects"));
    doc.push(Node::text_keyed("hero-btn-contact", "hero-btn-contact"));
    doc.push(Node::text_keyed("hero-btn-cv", "hero-btn-cv"));

    // About
    doc.push(Node::text_keyed("about-title", "about-title"));
    doc.push(Node::text_keyed("about-subtitle", "about-subtitle"));
    doc.push(Node::text_keyed("about-p1", "about-p1"));
    doc.push(Node::text_keyed("about-p2", "about-p2"));
    doc.push(Node::text_keyed("about-p3", "about-p3"));

    // Skills
    doc.push(Node::text_keyed("skills-title", "skills-title"));
    doc.push(Node::text_keyed("skill-ml", "skill-ml"));
    doc.push(Node::text_keyed("skill-python", "skill-python"));
    doc.push(Node::text_keyed("skill-dataviz", "skill-dataviz"));
    doc.push(Node::text_keyed("skill-nlp", "skill-nlp"));
    doc.push(Node::text_keyed("skill-cv", "skill-cv"));
    doc.push(Node::text_keyed("skill-dl", "skill-dl"));

    // Projects (the link label key is shared by all three cards)
    doc.push(Node::text_keyed("projects-title", "projects-title"));
    doc.push(Node::text_keyed("project1-title", "project1-title"));
    doc.push(Node::text_keyed("project1-desc", "project1-desc"));
    doc.push(Node::text_keyed("project1-link", "project-link"));
    doc.push(Node::text_keyed("project2-title", "project2-title"));
    doc.push(Node::text_keyed("project2-desc", "project2-desc"));
    doc.push(Node::text_keyed("project2-link", "project-link"));
    doc.push(Node::text_keyed("project3-title", "project3-title"));
    doc.push(Node::text_keyed("project3-desc", "project3-desc"));
    doc.push(Node::text_keyed("project3-link", "project-link"));

    // Contact
    doc.push(Node::text_keyed("contact-title", "contact-title"));
    doc.push(Node::text_keyed("contact-subtitle", "contact-subtitle"));
    doc.push(Node::text_keyed("contact-desc", "contact-desc"));
    doc.push(Node::text_keyed("contact-location", "contact-location"));
    doc.push(Node::text_keyed("contact-email", "contact-email"));
    doc.push(Node::text_keyed("contact-phone", "contact-phone"));
    doc.push(Node::field("name", "form-name").with_class("contact-input"));
    doc.push(Node::field("email", "form-email").with_class("contact-input"));
    doc.push(Node::field("message", "form-message").with_class("contact-input"));
    doc.push(Node::text_keyed("form-submit", "form-submit").with_class("submit-button"));

    doc
}
