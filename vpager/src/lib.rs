//! A headless vertical paging engine.
//!
//! For a ready-made controller (deferred layout commits, tween-driven transitions, render
//! frames), see the `vpager-adapter` crate.
//!
//! This crate holds the paging state machine behind a "one page per viewport" scroll
//! container: page geometry, drag tracking, fling/snap decisions on release, and the
//! dots/progress-bar indicators that navigate it.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport and content sizes from its layout pass
//! - drag translations and an end-of-gesture velocity
//! - tap positions on the indicator
//!
//! and to animate the [`Transition`]s the pager hands back.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod geometry;
pub mod indicator;
mod options;
mod pager;
mod state;
mod transition;
mod types;

#[cfg(test)]
mod tests;

pub use geometry::{Geometry, GeometryChanged, GeometryTracker};
pub use indicator::{Dot, Handle, ProgressBar};
pub use options::{DEFAULT_FLING_THRESHOLD, OnChangeCallback, PagerOptions};
pub use pager::Pager;
pub use state::PagerState;
pub use transition::{
    LONG_JUMP_DURATION_MS, MEDIUM_JUMP_DURATION_MS, SETTLE_DURATION_MS, Transition,
    TransitionKind, fling_velocity, jump_duration_ms,
};
pub use types::{
    Changes, Easing, IndicatorStyle, IndicatorVisibility, PageItem, PageRange, PageSpacing, Size,
};
