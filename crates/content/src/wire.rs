//! Wire format of the content delivery API.
//!
//! The backend serves one JSON document per locale with camelCase field
//! names. These DTOs decode that document and convert it into the core
//! content types; nothing outside this module sees the wire shapes.

use folio_core::content::{Category, Header, ImageRef, LocaleContent, Project};
use serde::Deserialize;

/// Top-level per-locale content document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub projects: Vec<WireProject>,
    pub categories: Vec<WireCategory>,
    pub header: WireHeader,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProject {
    pub slug: String,
    pub title: String,
    pub preview_image: WireImage,
    #[serde(default)]
    pub categories: Vec<WireCategory>,
}

/// Backend categories always carry a slug on the wire; the slug-less
/// synthetic "all" entry exists only in assembled view models.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCategory {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHeader {
    pub logo: WireImage,
}

impl From<WireImage> for ImageRef {
    fn from(image: WireImage) -> Self {
        ImageRef {
            url: image.url,
            width: image.width,
            height: image.height,
            description: image.description,
        }
    }
}

impl From<WireCategory> for Category {
    fn from(category: WireCategory) -> Self {
        Category {
            name: category.name,
            slug: Some(category.slug),
        }
    }
}

impl From<WireProject> for Project {
    fn from(project: WireProject) -> Self {
        Project {
            slug: project.slug,
            title: project.title,
            preview_image: project.preview_image.into(),
            categories: project.categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ContentDocument> for LocaleContent {
    fn from(document: ContentDocument) -> Self {
        LocaleContent {
            projects: document.projects.into_iter().map(Into::into).collect(),
            categories: document.categories.into_iter().map(Into::into).collect(),
            header: Header {
                logo: document.header.logo.into(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
