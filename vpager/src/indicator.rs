//! Page indicators: dots and a draggable progress bar.
//!
//! Both read the pager's state for rendering and write back through the pager's transitions,
//! so an indicator never holds a copy of the offset or the selection.

use crate::transition::{Transition, TransitionKind};
use crate::{Changes, Pager};

/// One dot of the dots indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    pub index: usize,
    pub selected: bool,
}

/// Emits one dot per page, in page order.
pub fn for_each_dot(pager: &Pager, mut f: impl FnMut(Dot)) {
    let selected = pager.selected_index();
    for index in 0..pager.page_count() {
        f(Dot {
            index,
            selected: index == selected,
        });
    }
}

/// Tapping a dot jumps straight to its page.
pub fn tap_dot(pager: &mut Pager, index: usize) -> Option<Transition> {
    pager.jump_to(index)
}

/// Position and size of the progress bar's handle, in bar coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Handle {
    pub offset: f32,
    pub height: f32,
}

impl Handle {
    pub fn end(&self) -> f32 {
        self.offset + self.height
    }
}

/// A vertical progress strip with a handle one page tall (scaled to the bar).
///
/// The bar keeps its own drag accumulation. Bar drags are always bounded to the page range,
/// whatever the pager's `prevent_overscroll` setting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressBar {
    height: f32,
    drag_accumulated: f32,
    is_dragging: bool,
}

impl ProgressBar {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            drag_accumulated: 0.0,
            is_dragging: false,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    fn is_usable(&self) -> bool {
        self.height.is_finite() && self.height > 0.0
    }

    pub fn handle(&self, pager: &Pager) -> Handle {
        self.handle_at(pager, pager.offset())
    }

    /// Handle placement for an arbitrary (e.g. mid-animation) offset.
    pub fn handle_at(&self, pager: &Pager, offset: f32) -> Handle {
        if !self.is_usable() {
            return Handle::default();
        }
        Handle {
            offset: pager.progress_at(offset) * self.height,
            height: self.height / pager.page_count() as f32,
        }
    }

    /// Maps a tap at `tap_y` (bar coordinates) to the nearest page and moves there.
    ///
    /// The tap point is treated as the handle's center. Taps mapping outside the content keep
    /// the current page.
    pub fn tap(&mut self, pager: &mut Pager, tap_y: f32) -> Transition {
        self.is_dragging = false;
        self.drag_accumulated = 0.0;
        let was_dragging = pager.end_drag();
        let extra = Changes {
            dragging: was_dragging,
            ..Changes::NONE
        };
        if !self.is_usable() || !tap_y.is_finite() {
            vwarn!(tap_y, height = self.height, "ProgressBar::tap: unusable input");
            return pager.settle(None, TransitionKind::Jump, true, extra);
        }

        let tap_offset = self.height / pager.page_count() as f32 / 2.0;
        let raw = (tap_y - tap_offset) / self.height * pager.content_height();
        let target = pager.geometry().nearest_page(-raw);
        vtrace!(tap_y, raw, ?target, "ProgressBar::tap");
        pager.settle(target, TransitionKind::Jump, true, extra)
    }

    /// Applies a handle drag. `translation` is the handle's total movement since the drag
    /// started, in bar coordinates.
    ///
    /// Returns `true` if the pager offset moved.
    pub fn drag_update(&mut self, pager: &mut Pager, translation: f32) -> bool {
        if !self.is_usable() || !translation.is_finite() {
            vwarn!(translation, height = self.height, "ProgressBar::drag_update: unusable input");
            return false;
        }
        if !self.is_dragging {
            self.is_dragging = true;
            self.drag_accumulated = 0.0;
            pager.begin_drag();
        } else if !pager.is_dragging() {
            // The pager's drag was ended elsewhere mid-gesture; resume from where it landed.
            vdebug!(translation, offset = pager.offset(), "ProgressBar::drag_update: resuming");
            self.drag_accumulated = translation;
            pager.begin_drag();
        }
        let bar_delta = translation - self.drag_accumulated;
        self.drag_accumulated = translation;

        let delta = -bar_delta / self.height * pager.content_height();
        let moved = pager.apply_drag_delta(delta, true);
        if moved {
            pager.notify(Changes {
                offset: true,
                ..Changes::NONE
            });
        }
        moved
    }

    /// Ends a handle drag by snapping to the nearest page.
    pub fn drag_end(&mut self, pager: &mut Pager) -> Transition {
        self.is_dragging = false;
        self.drag_accumulated = 0.0;
        let was_dragging = pager.end_drag();
        let target = pager.geometry().nearest_page(pager.offset());
        pager.settle(
            target,
            TransitionKind::Snap,
            false,
            Changes {
                dragging: was_dragging,
                ..Changes::NONE
            },
        )
    }
}
