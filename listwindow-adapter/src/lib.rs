//! Caller-facing helpers for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides the small, framework-neutral layer a host view actually talks to:
//!
//! - [`Controller`]: owns the full item list, wires scroll events through the throttle and
//!   hands back frames / visible slices
//! - [`LoadMoreWatch`]: edge-triggered near-bottom detection for append-on-scroll paging
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI/GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod lazy;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use lazy::LoadMoreWatch;
