use vpager::Easing;

/// Default delay before a deferred element is revealed.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

/// A single-shot timer that keeps an element hidden for a fixed delay after mount.
///
/// Hosts use it for overlays that should only fade in once the pager has settled on screen.
/// Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelayedReveal {
    pub mount_ms: u64,
    pub delay_ms: u64,
    pub fade_ms: u64,
    pub easing: Easing,
}

impl DelayedReveal {
    pub fn new(mount_ms: u64, delay_ms: u64) -> Self {
        Self {
            mount_ms,
            delay_ms,
            fade_ms: 0,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn with_fade(mut self, fade_ms: u64, easing: Easing) -> Self {
        self.fade_ms = fade_ms;
        self.easing = easing;
        self
    }

    pub fn reveal_at_ms(&self) -> u64 {
        self.mount_ms.saturating_add(self.delay_ms)
    }

    pub fn is_revealed(&self, now_ms: u64) -> bool {
        now_ms >= self.reveal_at_ms()
    }

    /// Opacity in `0.0..=1.0`: zero until the delay elapses, then eased over `fade_ms`.
    pub fn opacity(&self, now_ms: u64) -> f32 {
        if !self.is_revealed(now_ms) {
            return 0.0;
        }
        if self.fade_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms - self.reveal_at_ms();
        let t = (elapsed as f32 / self.fade_ms as f32).clamp(0.0, 1.0);
        self.easing.sample(t)
    }
}

impl Default for DelayedReveal {
    fn default() -> Self {
        Self::new(0, DEFAULT_REVEAL_DELAY_MS)
    }
}
