//! Content records supplied by the headless backend.
//!
//! These are the typed shapes the content crate decodes backend payloads
//! into. They are fetched once at startup and never mutated afterwards; all
//! view-model derivation borrows from them.

use serde::{Deserialize, Serialize};

/// URL-safe unique identifier for a project or category.
pub type Slug = String;

/// Reference to a CMS-hosted image asset.
///
/// `width`/`height` are the source dimensions reported by the backend, not
/// the dimensions anything renders at. Use [`ImageRef::constrain`] to derive
/// render dimensions for a bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute URL of the source asset.
    pub url: String,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// Optional alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An image reference resolved against a bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRender {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageRef {
    /// Scale the source dimensions down to fit within `max_width` x
    /// `max_height`, preserving aspect ratio. Sources smaller than the box
    /// are never upscaled. Dimensions are floored at 1px.
    pub fn constrain(&self, max_width: u32, max_height: u32) -> ImageRender {
        let scale_w = f64::from(max_width) / f64::from(self.width.max(1));
        let scale_h = f64::from(max_height) / f64::from(self.height.max(1));
        let scale = scale_w.min(scale_h).min(1.0);

        ImageRender {
            url: self.url.clone(),
            width: ((f64::from(self.width) * scale).round() as u32).max(1),
            height: ((f64::from(self.height) * scale).round() as u32).max(1),
            alt: self.description.clone(),
        }
    }
}

/// A selectable project category.
///
/// Backend categories always carry a slug. The synthetic "all categories"
/// entry is the only category without one; it never comes from the backend
/// and is prepended at view time (see [`crate::home::assemble_categories`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, already localized by the backend's per-locale query.
    pub name: String,
    pub slug: Option<Slug>,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: Slug,
    pub title: String,
    pub preview_image: ImageRef,
    /// Categories this project belongs to, in backend order.
    pub categories: Vec<Category>,
}

/// Site header content for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub logo: ImageRef,
}

/// Everything the backend returns for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleContent {
    pub projects: Vec<Project>,
    pub categories: Vec<Category>,
    pub header: Header,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
