//! Adapter utilities for the `waterfall` crate.
//!
//! The `waterfall` crate is UI-agnostic and focuses on layout math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A `Controller` that maps host events (mount, resize, scroll, timer ticks) onto the engine
//! - Per-item resize debouncing for noisy size observers
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod resize;

#[cfg(test)]
mod tests;

pub use controller::{Controller, RenderItem};
pub use resize::{DEFAULT_RESIZE_DELAY_MS, PendingResize, ResizeDebouncer};
