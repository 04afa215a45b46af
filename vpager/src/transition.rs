use crate::Easing;

/// Duration of snaps, flings and short indicator jumps.
pub const SETTLE_DURATION_MS: u64 = 400;
/// Duration of indicator jumps spanning three to five pages.
pub const MEDIUM_JUMP_DURATION_MS: u64 = 1_000;
/// Duration of indicator jumps spanning six pages or more.
pub const LONG_JUMP_DURATION_MS: u64 = 1_500;

/// Why an offset change was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    /// A fling moved one page forward or backward.
    Advance,
    /// A slow release settled on the nearest page.
    Snap,
    /// The computed target was out of bounds; the current page was restored.
    Revert,
    /// An indicator moved directly to a page.
    Jump,
}

/// A request for the animation layer to move the displayed offset.
///
/// The pager commits `to` immediately; the request only describes how the host should get
/// there visually. Transitions are fire-and-forget: newer input supersedes them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u64,
    pub easing: Easing,
    pub kind: TransitionKind,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    pub fn is_revert(&self) -> bool {
        self.kind == TransitionKind::Revert
    }
}

/// Duration for a jump across `distance` pages.
pub fn jump_duration_ms(distance: usize) -> u64 {
    if distance >= 6 {
        LONG_JUMP_DURATION_MS
    } else if distance >= 3 {
        MEDIUM_JUMP_DURATION_MS
    } else {
        SETTLE_DURATION_MS
    }
}

/// Estimates a release velocity from the gesture's current and predicted end locations.
///
/// Hosts that only expose a predicted end point (rather than a velocity) can feed the result
/// to `Pager::drag_end`. Negative values mean an upward gesture.
pub fn fling_velocity(location_y: f32, predicted_end_y: f32) -> f32 {
    predicted_end_y - location_y
}
