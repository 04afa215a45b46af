//! Adapter utilities for the `vpager` crate.
//!
//! The `vpager` crate is UI-agnostic and focuses on the paging state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that commits layout measurements after the layout pass, forwards drag
//!   and indicator input, and animates the transitions the pager requests
//! - Tween sampling for those transitions
//! - A delayed reveal timer for overlays that fade in after mount
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod frame;
mod reveal;
mod tween;


pub use controller::Controller;
pub use frame::{Frame, IndicatorFrame};
pub use reveal::{DEFAULT_REVEAL_DELAY_MS, DelayedReveal};
pub use tween::Tween;
pub use vpager::Easing;
