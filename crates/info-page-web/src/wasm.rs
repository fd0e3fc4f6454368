#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use info_page_core::tile::TILE_LINK_CLASS;
use info_page_core::{InfoPageConfig, Payload, ViewController};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlInputElement};

use crate::audio::AudioCue;
use crate::dom::{DomHost, elements};
use crate::{BootError, claim_boot, config_from_options, release_boot};

type SharedView = Rc<RefCell<ViewController<DomHost, AudioCue>>>;

/// Module entry point: boot with default options once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        boot_logged(InfoPageConfig::default());
        return;
    }

    let on_ready = Closure::once_into_js(move || {
        boot_logged(InfoPageConfig::default());
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    ) {
        warn!(error = ?err, "could not wait for DOMContentLoaded");
    }
}

/// Boot the tile view manually with a partial options object.
///
/// Returns `true` when the view started and `false` when the page lacks the
/// payload or required elements, or a view is already running. Throws only
/// for malformed options.
#[wasm_bindgen(js_name = bootInfoPage)]
pub fn boot_info_page(options: Option<JsValue>) -> Result<bool, JsValue> {
    let options = options
        .filter(|value| !value.is_undefined() && !value.is_null())
        .map(|value| js_sys::JSON::stringify(&value).map(String::from))
        .transpose()?;
    let config = config_from_options(options.as_deref())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(boot_logged(config))
}

fn boot_logged(config: InfoPageConfig) -> bool {
    match boot(config) {
        Ok(()) => true,
        Err(
            err @ (BootError::Payload(_) | BootError::MissingElement(_) | BootError::AlreadyBooted),
        ) => {
            debug!(error = %err, "info page view not started");
            false
        }
        Err(err) => {
            warn!(error = %err, "info page view not started");
            false
        }
    }
}

fn js_error(value: JsValue) -> BootError {
    BootError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn query(document: &Document, selector: &str) -> Result<Element, BootError> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| BootError::MissingElement(selector.to_string()))
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), BootError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Listeners live for the page session.
    closure.forget();
    Ok(())
}

fn boot(config: InfoPageConfig) -> Result<(), BootError> {
    if !claim_boot() {
        return Err(BootError::AlreadyBooted);
    }
    let result = wire(config);
    // A DOM failure may leave listeners attached; keep the claim so a retry
    // cannot add a second set.
    if matches!(&result, Err(err) if !matches!(err, BootError::Js(_))) {
        release_boot();
    }
    result
}

/// Look up the page, attach listeners, then render. The page is not touched
/// until every listener is in place.
fn wire(config: InfoPageConfig) -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;

    let payload_text = document
        .get_element_by_id(&config.data_element_id)
        .map(|el| el.text_content().unwrap_or_default());
    let payload = Payload::from_element_text(payload_text.as_deref())?;

    let class_bar = query(&document, &config.class_bar_selector)?;
    let container = query(&document, &config.container_selector)?;
    let search: HtmlInputElement = query(&document, &config.search_selector)?
        .dyn_into()
        .map_err(|_| BootError::MissingElement(config.search_selector.clone()))?;

    let button_selector = config.class_button_selector.clone();
    let class_attribute = config.class_attribute.clone();
    let host = DomHost::new(
        document,
        class_bar.clone(),
        container.clone(),
        button_selector.clone(),
        class_attribute.clone(),
    );
    let cue = AudioCue::new(&config.click_sound_path, config.effective_volume());
    let view: SharedView = Rc::new(RefCell::new(ViewController::new(
        payload, host, cue, config,
    )));

    let buttons = class_bar
        .query_selector_all(&button_selector)
        .map_err(js_error)?;
    for button in elements(&buttons) {
        let view = Rc::clone(&view);
        let attribute = class_attribute.clone();
        let target = button.clone();
        listen(&button, "click", move |_event| {
            let key = target.get_attribute(&attribute).unwrap_or_default();
            match view.try_borrow_mut() {
                Ok(mut view) => {
                    view.select_category(&key);
                }
                Err(_) => debug!("category click dropped during render"),
            }
        })?;
    }

    {
        let view = Rc::clone(&view);
        let input = search.clone();
        listen(&search, "input", move |_event| match view.try_borrow_mut() {
            Ok(mut view) => view.update_filter(&input.value()),
            Err(_) => debug!("filter input dropped during render"),
        })?;
    }

    let tile_link = format!("a.{TILE_LINK_CLASS}");
    let root = container.clone();
    listen(&container, "click", move |event| {
        let on_tile = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&tile_link).ok().flatten())
            .is_some_and(|link| root.contains(Some(link.as_ref())));
        if on_tile {
            event.prevent_default();
        }
    })?;

    view.try_borrow_mut()
        .map_err(|_| BootError::Js("view busy during boot".to_string()))?
        .refresh();

    info!(buttons = buttons.length(), "info page view started");
    Ok(())
}
