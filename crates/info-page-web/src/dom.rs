#![forbid(unsafe_code)]

//! DOM-backed [`ViewHost`].

use info_page_core::tile::{
    ACTIVE_BUTTON_CLASS, EMPTY_STATE_CLASS, TILE_EFFECTS_CLASS, TILE_ICON_CLASS,
    TILE_LABEL_CLASS, TILE_LINK_CLASS, TILE_LINK_HREF,
};
use info_page_core::{Tile, ViewHost};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, NodeList};

/// Renders into the tile container and highlights buttons in the class bar.
pub(crate) struct DomHost {
    document: Document,
    class_bar: Element,
    container: Element,
    button_selector: String,
    class_attribute: String,
}

impl DomHost {
    pub(crate) fn new(
        document: Document,
        class_bar: Element,
        container: Element,
        button_selector: String,
        class_attribute: String,
    ) -> Self {
        Self {
            document,
            class_bar,
            container,
            button_selector,
            class_attribute,
        }
    }

    fn element(&self, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        el.set_class_name(class);
        if text.is_some() {
            el.set_text_content(text);
        }
        Ok(el)
    }

    fn build_tile(&self, tile: &Tile) -> Result<Element, JsValue> {
        let link = self.element("a", TILE_LINK_CLASS, None)?;
        link.set_attribute("href", TILE_LINK_HREF)?;
        link.set_attribute("title", &tile.title)?;

        let icon = self.element("img", TILE_ICON_CLASS, None)?;
        if let Some(src) = &tile.icon {
            icon.set_attribute("src", src)?;
        }

        let label = self.element("span", TILE_LABEL_CLASS, Some(tile.label()))?;

        let effects = self.element("div", TILE_EFFECTS_CLASS, None)?;
        for segment in &tile.segments {
            let span = self.element("span", &segment.class_name(), Some(&segment.text))?;
            effects.append_child(&span)?;
        }

        link.append_child(&icon)?;
        link.append_child(&label)?;
        link.append_child(&effects)?;
        Ok(link)
    }
}

/// Elements of a `NodeList`, skipping non-element nodes.
pub(crate) fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

impl ViewHost for DomHost {
    fn highlight_category(&mut self, active: &str) {
        let buttons = match self.class_bar.query_selector_all(&self.button_selector) {
            Ok(buttons) => buttons,
            Err(err) => {
                warn!(error = ?err, "class button lookup failed");
                return;
            }
        };
        for button in elements(&buttons) {
            let is_active = button.get_attribute(&self.class_attribute).as_deref() == Some(active);
            // Toggle only fails for invalid tokens; the class name is a constant.
            let _ = button
                .class_list()
                .toggle_with_force(ACTIVE_BUTTON_CLASS, is_active);
        }
    }

    fn clear_tiles(&mut self) {
        self.container.set_text_content(None);
    }

    fn append_tile(&mut self, tile: &Tile) {
        let appended = self
            .build_tile(tile)
            .and_then(|el| self.container.append_child(&el));
        if let Err(err) = appended {
            warn!(error = ?err, title = %tile.title, "tile render failed");
        }
    }

    fn show_empty(&mut self, message: &str) {
        let appended = self
            .element("div", EMPTY_STATE_CLASS, Some(message))
            .and_then(|el| self.container.append_child(&el));
        if let Err(err) = appended {
            warn!(error = ?err, "empty state render failed");
        }
    }
}
