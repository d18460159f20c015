//! Route-parameter parsing.
//!
//! The active category filter is derived from the raw URL query string, not
//! from a typed extractor: a repeated `category` key is malformed input that
//! must fail open to the unfiltered view instead of rejecting the request.

use url::form_urlencoded;

use crate::content::Slug;

/// The `category` query parameter after fail-open normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParam {
    /// No usable `category` key in the query string.
    Unset,
    /// Exactly one non-empty value.
    One(Slug),
    /// The key appeared more than once. Treated as "no filter".
    Ambiguous,
}

impl CategoryParam {
    /// The selected slug, if the parameter narrows the view at all.
    pub fn slug(&self) -> Option<&str> {
        match self {
            CategoryParam::One(slug) => Some(slug),
            CategoryParam::Unset | CategoryParam::Ambiguous => None,
        }
    }
}

/// View-relevant parameters of a request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub category: CategoryParam,
    /// Requested locale tag, if any. Resolution against the loaded locales
    /// happens in the API layer.
    pub locale: Option<String>,
}

impl RouteQuery {
    /// Parse a raw query string (without the leading `?`).
    ///
    /// Percent-encoding is decoded. Unknown keys are ignored. `category`
    /// normalization:
    ///
    /// - absent, or present once with an empty value: [`CategoryParam::Unset`]
    /// - present once with a non-empty value: [`CategoryParam::One`]
    /// - present more than once: [`CategoryParam::Ambiguous`]
    ///
    /// An empty single value counts as unset, consistent with the
    /// absent-parameter case; repeated keys count every occurrence, empty
    /// values included.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut category_values: Vec<String> = Vec::new();
        let mut locale = None;

        for (key, value) in form_urlencoded::parse(raw.unwrap_or("").as_bytes()) {
            match key.as_ref() {
                "category" => category_values.push(value.into_owned()),
                "locale" => {
                    if locale.is_none() && !value.is_empty() {
                        locale = Some(value.into_owned());
                    }
                }
                _ => {}
            }
        }

        let category = match category_values.len() {
            0 => CategoryParam::Unset,
            1 => {
                let value = category_values.remove(0);
                if value.is_empty() {
                    CategoryParam::Unset
                } else {
                    CategoryParam::One(value)
                }
            }
            _ => CategoryParam::Ambiguous,
        };

        RouteQuery { category, locale }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- category ------------------------------------------------------------

    #[test]
    fn absent_query_is_unset() {
        assert_eq!(RouteQuery::parse(None).category, CategoryParam::Unset);
    }

    #[test]
    fn empty_query_is_unset() {
        assert_eq!(RouteQuery::parse(Some("")).category, CategoryParam::Unset);
    }

    #[test]
    fn single_value_is_selected() {
        assert_eq!(
            RouteQuery::parse(Some("category=design")).category,
            CategoryParam::One("design".to_string())
        );
    }

    #[test]
    fn empty_value_counts_as_unset() {
        assert_eq!(
            RouteQuery::parse(Some("category=")).category,
            CategoryParam::Unset
        );
    }

    #[test]
    fn repeated_key_is_ambiguous() {
        assert_eq!(
            RouteQuery::parse(Some("category=a&category=b")).category,
            CategoryParam::Ambiguous
        );
    }

    #[test]
    fn repeated_key_with_empty_value_is_still_ambiguous() {
        // `?category=&category=a` carries two occurrences of the key; the
        // malformed-multiplicity rule applies before empty-value handling.
        assert_eq!(
            RouteQuery::parse(Some("category=&category=a")).category,
            CategoryParam::Ambiguous
        );
    }

    #[test]
    fn percent_encoding_is_decoded() {
        assert_eq!(
            RouteQuery::parse(Some("category=dise%C3%B1o")).category,
            CategoryParam::One("diseño".to_string())
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = RouteQuery::parse(Some("utm_source=mail&category=dev"));
        assert_eq!(query.category, CategoryParam::One("dev".to_string()));
    }

    // -- locale --------------------------------------------------------------

    #[test]
    fn locale_is_extracted() {
        let query = RouteQuery::parse(Some("locale=en&category=dev"));
        assert_eq!(query.locale.as_deref(), Some("en"));
    }

    #[test]
    fn missing_locale_is_none() {
        assert_eq!(RouteQuery::parse(Some("category=dev")).locale, None);
    }

    #[test]
    fn first_locale_occurrence_wins() {
        let query = RouteQuery::parse(Some("locale=en&locale=es"));
        assert_eq!(query.locale.as_deref(), Some("en"));
    }

    // -- CategoryParam::slug -------------------------------------------------

    #[test]
    fn slug_is_none_for_unset_and_ambiguous() {
        assert_eq!(CategoryParam::Unset.slug(), None);
        assert_eq!(CategoryParam::Ambiguous.slug(), None);
    }

    #[test]
    fn slug_returns_selected_value() {
        assert_eq!(CategoryParam::One("dev".to_string()).slug(), Some("dev"));
    }
}
