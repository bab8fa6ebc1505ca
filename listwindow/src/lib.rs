//! A headless windowed-list core.
//!
//! For caller-facing glue (an item-owning controller, lazy-load helpers), see the
//! `listwindow-adapter` crate.
//!
//! This crate focuses on the math and state needed to render large record lists without
//! materializing them in full: mapping a scroll offset and viewport geometry to the contiguous
//! slice of items worth rendering, the pixel padding that stands in for everything else, and a
//! throttle that coalesces high-frequency scroll reports.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - item height and viewport height (fixed-height items only)
//! - scroll offsets, as they arrive from the host's scroll events
//! - millisecond timestamps to drive the throttle (no timers are owned here)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod throttle;
mod types;
mod window;


pub use config::{ConfigUpdate, DEFAULT_BUFFER_SIZE, WindowConfig};
pub use throttle::{DEFAULT_SCROLL_INTERVAL_MS, ScrollThrottler};
pub use types::WindowFrame;
pub use window::{OnChangeCallback, WindowList};
