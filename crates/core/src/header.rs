//! Site header view-model derivation.
//!
//! The header is a logo image (backend content) plus a short static
//! navigation link list whose labels come from the message catalog.

use serde::Serialize;

use crate::content::{ImageRender, LocaleContent};
use crate::messages::MessageCatalog;

/// Bounding box for the header logo.
pub const LOGO_MAX_WIDTH: u32 = 480;
pub const LOGO_MAX_HEIGHT: u32 = 300;

/// (message key, href) pairs for the static navigation links.
const NAV_LINKS: &[(&str, &str)] = &[
    ("header.work", "/"),
    ("header.about", "/about"),
    ("header.faq", "/faq"),
];

/// One navigation link with its resolved label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

/// The derived header view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub logo: ImageRender,
    pub links: Vec<NavLink>,
}

/// Derive the header view for one locale.
pub fn derive_header(
    content: &LocaleContent,
    messages: &MessageCatalog,
    locale: &str,
) -> HeaderView {
    HeaderView {
        logo: content.header.logo.constrain(LOGO_MAX_WIDTH, LOGO_MAX_HEIGHT),
        links: NAV_LINKS
            .iter()
            .map(|(key, href)| NavLink {
                name: messages.resolve(locale, key),
                href: (*href).to_string(),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
