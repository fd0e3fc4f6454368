#![forbid(unsafe_code)]

//! View controller: the single owner of mutable view state.
//!
//! The controller is host-driven. The embedding page forwards category clicks
//! and search input; the controller updates [`ViewState`] and re-renders
//! through a [`ViewHost`]. Rendering is derived entirely from the catalog and
//! the current state (see [`render_plan`]), so the same state always produces
//! the same output.

use crate::config::InfoPageConfig;
use crate::feedback::ClickCue;
use crate::filter::{FilterText, visible_items};
use crate::payload::{Catalog, Payload, parse_payload};
use crate::tile::Tile;

/// Page-side surface the controller renders into.
pub trait ViewHost {
    /// Mark the category button(s) for `active` and unmark all others.
    fn highlight_category(&mut self, active: &str);
    /// Remove every child of the tile container.
    fn clear_tiles(&mut self);
    /// Append one tile to the container.
    fn append_tile(&mut self, tile: &Tile);
    /// Append the empty-state element.
    fn show_empty(&mut self, message: &str);
}

/// Session-scoped view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_category: String,
    filter: FilterText,
}

impl ViewState {
    #[must_use]
    pub fn new(active_category: impl Into<String>) -> Self {
        Self {
            active_category: active_category.into(),
            filter: FilterText::default(),
        }
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    #[must_use]
    pub fn filter(&self) -> &FilterText {
        &self.filter
    }
}

/// What a render should put in the tile container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    /// No item qualifies; show the empty-state message.
    Empty,
    /// Tiles in display order. Never empty.
    Tiles(Vec<Tile>),
}

impl RenderPlan {
    #[must_use]
    pub fn tile_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Tiles(tiles) => tiles.len(),
        }
    }
}

/// Compute the render output for a state.
#[must_use]
pub fn render_plan(catalog: &Catalog, state: &ViewState) -> RenderPlan {
    let items = visible_items(catalog, &state.active_category, &state.filter);
    if items.is_empty() {
        RenderPlan::Empty
    } else {
        RenderPlan::Tiles(items.into_iter().map(Tile::from_item).collect())
    }
}

/// Owns the catalog and view state, and drives a host.
#[derive(Debug)]
pub struct ViewController<H, C> {
    catalog: Catalog,
    state: ViewState,
    config: InfoPageConfig,
    host: H,
    cue: C,
}

impl<H: ViewHost, C: ClickCue> ViewController<H, C> {
    /// Parse the payload text and, if valid, start the view.
    ///
    /// Returns `None` when there is no usable payload; the host is left
    /// untouched in that case.
    pub fn boot(
        payload_text: Option<&str>,
        host: H,
        cue: C,
        config: InfoPageConfig,
    ) -> Option<Self> {
        let payload = parse_payload(payload_text)?;
        Some(Self::start(payload, host, cue, config))
    }

    /// Start the view from an already-validated payload: sync button
    /// highlighting and perform the initial render.
    pub fn start(payload: Payload, host: H, cue: C, config: InfoPageConfig) -> Self {
        let mut controller = Self::new(payload, host, cue, config);
        controller.refresh();
        controller
    }

    /// Build the controller without touching the host.
    ///
    /// Hosts that must finish wiring before the page changes call
    /// [`refresh`](Self::refresh) once wiring succeeds.
    pub fn new(payload: Payload, host: H, cue: C, config: InfoPageConfig) -> Self {
        let active = config.initial_category(payload.active_class.as_deref());
        Self {
            catalog: payload.catalog,
            state: ViewState::new(active),
            config,
            host,
            cue,
        }
    }

    /// Sync button highlighting and re-render from current state.
    pub fn refresh(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::info!(
            categories = self.catalog.len(),
            active = %self.state.active_category,
            "tile view refreshed"
        );
        self.host.highlight_category(&self.state.active_category);
        self.render();
    }

    /// Switch the active category.
    ///
    /// Empty keys and the current key are ignored (no render, no cue).
    /// Returns whether the category changed.
    pub fn select_category(&mut self, key: &str) -> bool {
        if key.is_empty() || key == self.state.active_category {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.state.active_category, to = key, "category selected");
        self.state.active_category = key.to_string();
        self.host.highlight_category(key);
        self.render();
        self.cue.play();
        true
    }

    /// Replace the filter with normalized `raw` input and re-render.
    pub fn update_filter(&mut self, raw: &str) {
        self.state.filter = FilterText::normalize(raw);
        #[cfg(feature = "tracing")]
        tracing::debug!(filter = self.state.filter.as_str(), "filter updated");
        self.render();
    }

    /// Rebuild the tile container from current state. Returns the number of
    /// tiles rendered.
    pub fn render(&mut self) -> usize {
        let plan = render_plan(&self.catalog, &self.state);
        self.host.clear_tiles();
        let count = plan.tile_count();
        match plan {
            RenderPlan::Empty => self.host.show_empty(&self.config.empty_message),
            RenderPlan::Tiles(tiles) => {
                for tile in &tiles {
                    self.host.append_tile(tile);
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(tiles = count, "rendered");
        count
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &InfoPageConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn cue(&self) -> &C {
        &self.cue
    }
}
