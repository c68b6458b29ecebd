//! Navigation service: mobile menu state and header scroll state.

use crate::page::Document;
use tracing::warn;

const HAMBURGER_ID: &str = "hamburger";
const NAV_LINKS_ID: &str = "nav-links";
const HEADER_ID: &str = "header";

/// Scroll offset in pixels past which the header is marked as scrolled.
pub const SCROLL_THRESHOLD: u32 = 50;

/// Controls the hamburger menu and the header's scrolled state.
pub struct Navigation {
    /// Cleared when the menu anchors are missing from the page.
    interactive: bool,
}

impl Navigation {
    /// Create the service, checking the document for its anchors. Missing
    /// anchors disable menu behavior without failing.
    pub fn new(document: &Document) -> Self {
        let interactive =
            document.node(HAMBURGER_ID).is_some() && document.node(NAV_LINKS_ID).is_some();
        if !interactive {
            warn!("Navigation elements not found, menu toggling disabled");
        }
        Self { interactive }
    }

    /// Toggle the mobile menu open or closed.
    pub fn toggle_menu(&self, document: &mut Document) {
        if !self.interactive {
            return;
        }
        document.toggle_class(NAV_LINKS_ID, "nav-active");
        document.toggle_class(HAMBURGER_ID, "toggle");
    }

    /// Close the mobile menu if it is open (used when a link is followed).
    pub fn close_menu(&self, document: &mut Document) {
        if !self.interactive {
            return;
        }
        if document.has_class(NAV_LINKS_ID, "nav-active") {
            document.remove_class(NAV_LINKS_ID, "nav-active");
            document.remove_class(HAMBURGER_ID, "toggle");
        }
    }

    /// Update the header state for the given scroll offset.
    pub fn on_scroll(&self, document: &mut Document, scroll_y: u32) {
        if scroll_y > SCROLL_THRESHOLD {
            document.add_class(HEADER_ID, "scrolled");
        } else {
            document.remove_class(HEADER_ID, "scrolled");
        }
    }
}
