#![forbid(unsafe_code)]

//! Embedded payload parsing.
//!
//! The page ships its catalog as a JSON blob inside a data element:
//!
//! ```json
//! { "active_class": "scout",
//!   "items_by_class": { "scout": [ { "name": "Bat", "search": "bat melee" } ] } }
//! ```
//!
//! Validation happens once, here. The top level must be an object with an
//! object-valued `items_by_class`; everything below that is defaulted rather
//! than rejected, so downstream code works with fully-populated records.
//! Category order follows the document, which is the order filtering walks.

use core::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Classification applied to segments that do not carry one.
pub const NEUTRAL_SEGMENT_CLASS: &str = "neutral";

/// Why an embedded payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The data-bearing element is not on the page.
    MissingElement,
    /// The element exists but holds no text.
    Empty,
    /// The text is not valid JSON.
    InvalidJson(String),
    /// The JSON document is not an object.
    NotAnObject,
    /// `items_by_class` is absent or null.
    MissingCatalog,
    /// `items_by_class` is present but not an object.
    CatalogNotAnObject,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement => write!(f, "payload element not found"),
            Self::Empty => write!(f, "payload element is empty"),
            Self::InvalidJson(msg) => write!(f, "payload is not valid JSON: {msg}"),
            Self::NotAnObject => write!(f, "payload is not a JSON object"),
            Self::MissingCatalog => write!(f, "payload has no items_by_class"),
            Self::CatalogNotAnObject => write!(f, "payload items_by_class is not an object"),
        }
    }
}

impl std::error::Error for PayloadError {}

/// One styled fragment of an item's effect description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Classification tag (e.g. `buff`, `nerf`); `neutral` when unspecified.
    pub cls: String,
    /// Display text; empty when unspecified.
    pub text: String,
}

impl Segment {
    #[must_use]
    pub fn new(cls: impl Into<String>, text: impl Into<String>) -> Self {
        let cls = cls.into();
        Self {
            cls: if cls.is_empty() {
                NEUTRAL_SEGMENT_CLASS.to_string()
            } else {
                cls
            },
            text: text.into(),
        }
    }

    /// Segment without a classification.
    #[must_use]
    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(NEUTRAL_SEGMENT_CLASS, text)
    }

    fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::neutral("");
        };
        Self::new(
            non_empty_string(obj, "cls").unwrap_or_default(),
            string_field(obj, "text").unwrap_or_default(),
        )
    }
}

/// One displayable catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Display label; empty when unspecified.
    pub name: String,
    /// Preferred tile title.
    pub title: Option<String>,
    /// Image locator for the tile icon.
    pub icon: Option<String>,
    /// Lowercase haystack for free-text matching. Items without one never
    /// match a filter.
    pub search: Option<String>,
    pub effects: Vec<Segment>,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title: String = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        let icon: String = icon.into();
        self.icon = (!icon.is_empty()).then_some(icon);
        self
    }

    /// Set the search haystack. It is lowercased here so matching can assume
    /// both sides are normalized.
    #[must_use]
    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = Some(search.as_ref().to_lowercase());
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<Segment>) -> Self {
        self.effects = effects;
        self
    }

    /// Title shown on the tile: `title`, else `name`, else empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let effects = match obj.get("effects") {
            Some(Value::Array(segments)) => segments.iter().map(Segment::from_value).collect(),
            _ => Vec::new(),
        };
        Self {
            name: string_field(obj, "name").unwrap_or_default(),
            title: non_empty_string(obj, "title"),
            icon: non_empty_string(obj, "icon"),
            search: string_field(obj, "search").map(|s| s.to_lowercase()),
            effects,
        }
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    string_field(obj, key).filter(|s| !s.is_empty())
}

fn items_from_value(value: &Value) -> Vec<Item> {
    match value {
        Value::Array(items) => items.iter().map(Item::from_value).collect(),
        _ => Vec::new(),
    }
}

/// Immutable mapping from category key to its ordered items.
///
/// Keys keep their document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, Vec<Item>>,
}

impl Catalog {
    /// Build a catalog from ordered entries. A repeated key replaces the
    /// earlier items but keeps the earlier position.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<Item>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Items of one category, if the category exists.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Item]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Categories with their items, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.entries
            .iter()
            .map(|(k, items)| (k.as_str(), items.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total items across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// A validated payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Category the page asks to start on.
    pub active_class: Option<String>,
    pub catalog: Catalog,
}

impl Payload {
    /// Parse payload JSON.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        if text.trim().is_empty() {
            return Err(PayloadError::Empty);
        }
        let value: Value =
            serde_json::from_str(text).map_err(|err| PayloadError::InvalidJson(err.to_string()))?;
        let root = value.as_object().ok_or(PayloadError::NotAnObject)?;
        let classes = match root.get("items_by_class") {
            None | Some(Value::Null) => return Err(PayloadError::MissingCatalog),
            Some(Value::Object(classes)) => classes,
            Some(_) => return Err(PayloadError::CatalogNotAnObject),
        };
        Ok(Self {
            active_class: non_empty_string(root, "active_class"),
            catalog: Catalog::from_entries(
                classes
                    .iter()
                    .map(|(key, items)| (key.clone(), items_from_value(items))),
            ),
        })
    }

    /// Parse the text content of the data element, where `None` means the
    /// element is missing.
    pub fn from_element_text(text: Option<&str>) -> Result<Self, PayloadError> {
        text.ok_or(PayloadError::MissingElement)
            .and_then(Self::from_json)
    }
}

/// Boot-time boundary: any rejection means "no payload".
#[must_use]
pub fn parse_payload(text: Option<&str>) -> Option<Payload> {
    match Payload::from_element_text(text) {
        Ok(payload) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                categories = payload.catalog.len(),
                items = payload.catalog.item_count(),
                "payload parsed"
            );
            Some(payload)
        }
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "payload rejected");
            None
        }
    }
}
