#![forbid(unsafe_code)]

//! WASM frontend for the info page tile view.
//!
//! This crate binds `info-page-core` to a real page:
//! - reads the embedded JSON payload,
//! - renders tiles and the empty state into the DOM,
//! - wires class buttons and the search input to the view controller,
//! - plays the click cue through an `HTMLAudioElement`.
//!
//! The module starts itself on instantiation (waiting for `DOMContentLoaded`
//! if needed). Any missing payload or element leaves the page untouched.

mod error;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::BootError;

#[cfg(target_arch = "wasm32")]
pub use wasm::boot_info_page;

use std::cell::Cell;

use info_page_core::InfoPageConfig;

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Claim the page's single tile view. Returns `false` if one is already
/// running, so a second entry point never wires a second set of listeners.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn claim_boot() -> bool {
    BOOTED.with(|booted| !booted.replace(true))
}

/// Give the claim back after a boot attempt that left the page untouched.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn release_boot() {
    BOOTED.with(|booted| booted.set(false));
}

/// Resolve host-supplied option JSON into a config. `None` means defaults.
pub fn config_from_options(options: Option<&str>) -> Result<InfoPageConfig, BootError> {
    match options {
        None => Ok(InfoPageConfig::default()),
        Some(json) => {
            InfoPageConfig::from_json(json).map_err(|err| BootError::InvalidConfig(err.to_string()))
        }
    }
}

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
pub fn boot_info_page(_options: Option<String>) -> Result<bool, BootError> {
    Err(BootError::NoWindow)
}
