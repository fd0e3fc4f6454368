#![forbid(unsafe_code)]

//! Host-independent tile model.
//!
//! A [`Tile`] holds every resolved string a host needs to build the tile
//! markup:
//!
//! ```text
//! <a href="#" class="on" title="{title}">
//!   <img class="btn-icon" src="{icon}">
//!   <span class="btn-label">{title}</span>
//!   <div class="effects"><span class="seg {cls}">{text}</span>...</div>
//! </a>
//! ```

use crate::payload::{Item, Segment};

/// Class on the tile's link container.
pub const TILE_LINK_CLASS: &str = "on";
/// Inert link target; navigation is suppressed by the host.
pub const TILE_LINK_HREF: &str = "#";
pub const TILE_ICON_CLASS: &str = "btn-icon";
pub const TILE_LABEL_CLASS: &str = "btn-label";
pub const TILE_EFFECTS_CLASS: &str = "effects";
/// Base class shared by every effect segment.
pub const SEGMENT_BASE_CLASS: &str = "seg";
/// Class of the empty-state element.
pub const EMPTY_STATE_CLASS: &str = "empty";
/// Class toggled on the active category button.
pub const ACTIVE_BUTTON_CLASS: &str = "active";

/// One effect fragment as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSegment {
    pub cls: String,
    pub text: String,
}

impl TileSegment {
    /// Full class attribute, e.g. `seg buff`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{SEGMENT_BASE_CLASS} {}", self.cls)
    }
}

impl From<&Segment> for TileSegment {
    fn from(segment: &Segment) -> Self {
        Self {
            cls: segment.cls.clone(),
            text: segment.text.clone(),
        }
    }
}

/// Visual representation of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Tooltip and label text.
    pub title: String,
    /// Icon locator; `None` leaves the image without a source.
    pub icon: Option<String>,
    pub segments: Vec<TileSegment>,
}

impl Tile {
    /// Resolve an item into a tile. Never fails: absent fields are already
    /// defaulted on the item.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.display_title().to_string(),
            icon: item.icon.clone(),
            segments: item.effects.iter().map(TileSegment::from).collect(),
        }
    }

    /// Text shown in the label element.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segments_keep_order_and_default_class() {
        let item = Item::new("Force-A-Nature").with_effects(vec![
            Segment::new("buff", "+25% damage"),
            Segment::neutral("no class"),
        ]);
        let tile = Tile::from_item(&item);
        assert_eq!(
            tile.segments,
            vec![
                TileSegment {
                    cls: "buff".into(),
                    text: "+25% damage".into()
                },
                TileSegment {
                    cls: "neutral".into(),
                    text: "no class".into()
                },
            ]
        );
        assert_eq!(tile.segments[0].class_name(), "seg buff");
        assert_eq!(tile.segments[1].class_name(), "seg neutral");
    }

    #[test]
    fn label_prefers_title() {
        let tile = Tile::from_item(&Item::new("Bat").with_title("The Sandman"));
        assert_eq!(tile.label(), "The Sandman");
        assert_eq!(Tile::from_item(&Item::new("Bat")).label(), "Bat");
    }

    #[test]
    fn all_fields_absent() {
        let tile = Tile::from_item(&Item::default());
        assert_eq!(
            tile,
            Tile {
                title: String::new(),
                icon: None,
                segments: Vec::new(),
            }
        );
    }

    #[test]
    fn icon_is_carried_through() {
        let tile = Tile::from_item(&Item::new("Bat").with_icon("/img/bat.png"));
        assert_eq!(tile.icon.as_deref(), Some("/img/bat.png"));
    }
}
