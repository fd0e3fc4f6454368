#![forbid(unsafe_code)]

//! Host-agnostic core of the info page tile view.
//!
//! The page embeds a JSON catalog of items grouped by class. This crate turns
//! that payload into an immutable [`Catalog`], decides which items are visible
//! for the active class and search text, and drives re-rendering through a
//! [`ViewHost`] implemented by the embedding frontend.
//!
//! # Primary responsibilities
//!
//! - **Payload**: order-preserving, lenient parsing of the embedded blob.
//! - **Filter**: visible-item selection for a class and a search query.
//! - **Tile**: resolved, host-independent tile descriptions.
//! - **View**: the controller owning [`ViewState`] and the render loop.
//! - **Feedback**: the best-effort click cue seam.
//!
//! # Design principles
//!
//! - **No I/O**: the host supplies payload text and receives render calls.
//! - **Deterministic**: the same catalog and state always render the same tiles.
//! - **`#![forbid(unsafe_code)]`**: safety enforced at compile time.

pub mod config;
pub mod feedback;
pub mod filter;
pub mod payload;
pub mod tile;
pub mod view;

pub use config::InfoPageConfig;
pub use feedback::{ClickCue, NoopCue};
pub use filter::{FilterText, visible_items};
pub use payload::{Catalog, Item, Payload, PayloadError, Segment, parse_payload};
pub use tile::{Tile, TileSegment};
pub use view::{RenderPlan, ViewController, ViewHost, ViewState, render_plan};
