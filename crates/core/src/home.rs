//! Home page view-model derivation.
//!
//! The home page shows the localized project grid, filtered by the
//! `category` query parameter, under a category navigation list. Everything
//! here is a pure function of immutable inputs; the API layer calls
//! [`derive_home`] on every request with the startup content snapshot and
//! the parsed route query.

use serde::Serialize;

use crate::content::{Category, ImageRender, LocaleContent, Project};
use crate::messages::MessageCatalog;
use crate::reveal::Reveal;
use crate::route::{CategoryParam, RouteQuery};

/// Bounding box for project preview images.
pub const PREVIEW_MAX_WIDTH: u32 = 720;
pub const PREVIEW_MAX_HEIGHT: u32 = 420;

/// One selectable entry in the category navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNavItem {
    pub name: String,
    /// `None` only for the synthetic "all categories" entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Whether this entry matches the active filter.
    pub active: bool,
}

/// One project card in the filtered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub preview_image: ImageRender,
    pub reveal: Reveal,
}

/// The fully derived home page view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    /// Localized page title.
    pub title: String,
    /// Category navigation, synthetic "all" entry first.
    pub categories: Vec<CategoryNavItem>,
    /// Filtered project cards, backend order preserved.
    pub projects: Vec<ProjectCard>,
}

/// Stable category filter.
///
/// - No usable filter ([`CategoryParam::Unset`] or
///   [`CategoryParam::Ambiguous`]): the full list, order preserved.
/// - A selected slug: exactly the projects where some category carries that
///   slug, order preserved. An unknown slug yields an empty list, not an
///   error.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    category: &CategoryParam,
) -> Vec<&'a Project> {
    match category.slug() {
        None => projects.iter().collect(),
        Some(selected) => projects
            .iter()
            .filter(|project| {
                project
                    .categories
                    .iter()
                    .any(|category| category.slug.as_deref() == Some(selected))
            })
            .collect(),
    }
}

/// Build the category navigation list.
///
/// The synthetic "all categories" entry (localized label, no slug) always
/// comes first, followed by the backend categories in their original order.
/// The active entry is determined by slug equality with the current filter;
/// the synthetic entry is active when no filter is set.
pub fn assemble_categories(
    categories: &[Category],
    active: &CategoryParam,
    messages: &MessageCatalog,
    locale: &str,
) -> Vec<CategoryNavItem> {
    let selected = active.slug();

    let mut nav = Vec::with_capacity(categories.len() + 1);
    nav.push(CategoryNavItem {
        name: messages.resolve(locale, "category.all"),
        slug: None,
        active: selected.is_none(),
    });

    nav.extend(categories.iter().map(|category| CategoryNavItem {
        name: category.name.clone(),
        slug: category.slug.clone(),
        active: category.slug.as_deref() == selected && selected.is_some(),
    }));

    nav
}

/// Derive the complete home view for one request.
pub fn derive_home(
    content: &LocaleContent,
    messages: &MessageCatalog,
    locale: &str,
    query: &RouteQuery,
) -> HomeView {
    let projects = filter_projects(&content.projects, &query.category)
        .into_iter()
        .enumerate()
        .map(|(index, project)| ProjectCard {
            slug: project.slug.clone(),
            title: project.title.clone(),
            preview_image: project
                .preview_image
                .constrain(PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT),
            reveal: Reveal::at_index(index),
        })
        .collect();

    HomeView {
        title: messages.resolve(locale, "works"),
        categories: assemble_categories(&content.categories, &query.category, messages, locale),
        projects,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
