#![forbid(unsafe_code)]

//! Visible-item selection.

use crate::payload::{Catalog, Item};

/// Normalized free-text query. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterText(String);

impl FilterText {
    /// Trim and lowercase raw input.
    ///
    /// Trimming also strips U+FEFF, which browsers treat as whitespace.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(
            raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .to_lowercase(),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an item's search haystack contains this query.
    ///
    /// Items without a haystack never match.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        item.search
            .as_deref()
            .is_some_and(|haystack| haystack.contains(self.0.as_str()))
    }
}

/// Items to display for the given category and filter.
///
/// With no filter this is the active category's list (empty if the category
/// is unknown). With a filter, every category is searched in catalog order
/// and the active category is ignored.
#[must_use]
pub fn visible_items<'a>(catalog: &'a Catalog, active: &str, filter: &FilterText) -> Vec<&'a Item> {
    if filter.is_empty() {
        return catalog
            .get(active)
            .map(|items| items.iter().collect())
            .unwrap_or_default();
    }

    catalog
        .iter()
        .flat_map(|(_, items)| items.iter())
        .filter(|item| filter.matches(item))
        .collect()
}
