//! A headless masonry ("waterfall") layout engine.
//!
//! For adapter-level utilities (event-loop driving, per-item resize debouncing), see the
//! `waterfall-adapter` crate.
//!
//! The engine arranges variable-height items into N fixed-width columns by always extending the
//! currently shortest column. It is built for long, lazily loaded feeds:
//! - heights change after async content loads, so layout is recomputed incrementally from the
//!   earliest changed index using per-index column snapshots;
//! - recomputes are coalesced by a trailing-edge timer and split into bounded chunks;
//! - items outside the viewport (plus a buffer) are culled;
//! - items are revealed in pages as the viewport approaches the revealed tail.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - container size and scroll offset
//! - each item's measured height on first mount, and again whenever it changes
//! - a clock (`now_ms`) passed to `tick`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dirty;
mod engine;
mod error;
mod heights;
mod layout;
mod options;
mod pagination;
mod scheduler;
mod snapshot;
mod types;
mod viewport;


pub use engine::Waterfall;
pub use error::WaterfallError;
pub use options::{OnChangeCallback, WaterfallOptions};
pub use types::{
    ColumnAnchor, ContainerSize, DirtyRange, ItemSlot, MeasuredSize, Rect, WalkOutcome,
};
pub use viewport::Window;
