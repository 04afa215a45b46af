use core::cell::Cell;
use std::sync::Arc;

use crate::geometry::{Geometry, GeometryChanged, GeometryTracker};
use crate::transition::{SETTLE_DURATION_MS, Transition, TransitionKind, jump_duration_ms};
use crate::{Changes, PageItem, PageRange, PagerOptions, PagerState, Size};

/// A headless vertical pager.
///
/// `Pager` owns the paging state machine: the scroll offset, the selected page, and the
/// in-flight drag. It does not hold UI objects or run animations:
/// - Your adapter reports layout measurements and drag/tap input.
/// - Offset changes that should be animated come back as [`Transition`] requests.
/// - Rendering pulls the offset, the selected page and per-page placement.
///
/// Offsets are non-positive by convention: page `i` is at rest when
/// `offset == -i * page_height`.
#[derive(Clone, Debug)]
pub struct Pager {
    options: PagerOptions,
    geometry: GeometryTracker,
    offset: f32,
    selected_index: usize,
    drag_accumulated: f32,
    is_dragging: bool,
    initialized: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<Changes>,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PagerOptions::default())
    }
}

impl Pager {
    pub fn new(options: PagerOptions) -> Self {
        vdebug!(
            prevent_overscroll = options.prevent_overscroll,
            page_spacing = options.page_spacing,
            initial_page = options.initial_page,
            "Pager::new"
        );
        Self {
            geometry: GeometryTracker::new(options.page_spacing),
            options,
            offset: 0.0,
            selected_index: 0,
            drag_accumulated: 0.0,
            is_dragging: false,
            initialized: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(Changes::NONE),
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Pager, Changes) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self, changes: Changes) {
        if let Some(cb) = &self.options.on_change {
            cb(self, changes);
        }
    }

    pub(crate) fn notify(&self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        if self.notify_depth.get() > 0 {
            self.notify_pending
                .set(self.notify_pending.get().union(changes));
            return;
        }
        self.notify_now(changes);
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// The callback receives the union of everything that changed inside `f`.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 {
            let pending = self.notify_pending.replace(Changes::NONE);
            if !pending.is_empty() {
                self.notify_now(pending);
            }
        }
    }

    pub fn geometry(&self) -> &Geometry {
        self.geometry.geometry()
    }

    pub fn viewport(&self) -> Size {
        self.geometry().viewport
    }

    pub fn page_height(&self) -> f32 {
        self.geometry().page_height
    }

    pub fn content_height(&self) -> f32 {
        self.geometry().content_height
    }

    pub fn page_count(&self) -> usize {
        self.geometry().page_count
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_accumulated(&self) -> f32 {
        self.drag_accumulated
    }

    /// Offset at which page `index` is at rest. Zero while geometry is unusable.
    pub fn offset_for_page(&self, index: usize) -> f32 {
        let geometry = self.geometry();
        if !geometry.is_valid() {
            return 0.0;
        }
        -geometry.page_top(index)
    }

    pub fn resting_offset(&self) -> f32 {
        self.offset_for_page(self.selected_index)
    }

    /// Returns `true` when no drag is active and the offset sits on the selected page.
    pub fn is_at_rest(&self) -> bool {
        !self.is_dragging && self.offset == self.resting_offset()
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> PagerState {
        PagerState {
            offset: self.offset,
            selected_index: self.selected_index,
            page_count: self.page_count(),
            is_dragging: self.is_dragging,
        }
    }

    /// Records a layout measurement without applying it.
    ///
    /// Call [`Pager::commit_geometry`] once the layout pass is over. Ignored while dragging.
    pub fn stage_geometry(&mut self, viewport: Size, content: Size) -> bool {
        self.geometry.stage(viewport, content, self.is_dragging)
    }

    pub fn has_pending_geometry(&self) -> bool {
        self.geometry.has_pending()
    }

    /// Applies the staged measurement and re-syncs the offset to the selected page.
    ///
    /// Returns `Some` only when the page count changed.
    pub fn commit_geometry(&mut self) -> Option<GeometryChanged> {
        let prev = *self.geometry();
        let changed = self.geometry.commit(self.is_dragging);
        let next = *self.geometry();
        if prev == next {
            return changed;
        }

        let mut changes = Changes {
            page_count: changed.is_some(),
            ..Changes::NONE
        };

        let mut selected = self.selected_index;
        if !self.initialized && next.is_valid() {
            self.initialized = true;
            selected = self.options.initial_page;
        }
        selected = selected.min(next.page_count - 1);
        if selected != self.selected_index {
            self.selected_index = selected;
            changes.selection = true;
        }

        let resting = self.resting_offset();
        if self.offset != resting {
            self.offset = resting;
            changes.offset = true;
        }

        #[cfg(feature = "tracing")]
        if let Some(c) = changed {
            vdebug!(
                previous_page_count = c.previous_page_count,
                page_count = c.page_count,
                "Pager::commit_geometry page count changed"
            );
        }
        self.notify(changes);
        changed
    }

    /// Stages and commits a layout measurement in one step.
    pub fn update_geometry(&mut self, viewport: Size, content: Size) -> Option<GeometryChanged> {
        if !self.stage_geometry(viewport, content) {
            return None;
        }
        self.commit_geometry()
    }

    /// Marks the start of a drag gesture.
    ///
    /// Calling this is optional; `drag_update` starts a drag on its own. Reporting the start
    /// explicitly means a gesture that has not moved yet still counts as dragging.
    pub fn begin_drag(&mut self) {
        if self.is_dragging {
            return;
        }
        self.is_dragging = true;
        self.drag_accumulated = 0.0;
        self.notify(Changes {
            dragging: true,
            ..Changes::NONE
        });
    }

    /// Starts a drag from an offset that differs from the committed one.
    ///
    /// Adapters that animate transitions call this when a new gesture interrupts an animation,
    /// so the drag continues from what is currently on screen.
    pub fn begin_drag_at(&mut self, displayed_offset: f32) {
        if !displayed_offset.is_finite() {
            vwarn!(displayed_offset, "Pager::begin_drag_at: non-finite offset");
            self.begin_drag();
            return;
        }
        self.batch_update(|p| {
            if p.offset != displayed_offset {
                p.offset = displayed_offset;
                p.notify(Changes {
                    offset: true,
                    ..Changes::NONE
                });
            }
            p.begin_drag();
        });
    }

    /// Applies an incremental drag update.
    ///
    /// `translation` is the total translation since the gesture started. With
    /// `prevent_overscroll`, movement that would leave the page range is rejected outright
    /// rather than clamped to the edge.
    pub fn drag_update(&mut self, translation: f32) {
        if !translation.is_finite() {
            vwarn!(translation, "Pager::drag_update: non-finite translation");
            return;
        }
        let mut changes = Changes::NONE;
        if !self.is_dragging {
            self.is_dragging = true;
            self.drag_accumulated = 0.0;
            changes.dragging = true;
        }
        let delta = translation - self.drag_accumulated;
        self.drag_accumulated = translation;
        changes.offset = self.apply_drag_delta(delta, self.options.prevent_overscroll);
        vtrace!(translation, delta, offset = self.offset, "Pager::drag_update");
        self.notify(changes);
    }

    /// Ends a drag and settles on a page.
    ///
    /// A release faster than the fling threshold advances one page in the gesture's direction
    /// (negative velocity is upward, towards later pages). Slower releases snap to the nearest
    /// page. Targets outside the content are rejected and the current page is restored.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn drag_end(&mut self, translation: f32, predicted_velocity: f32) -> Transition {
        vtrace!(translation, predicted_velocity, "Pager::drag_end");
        let velocity = if predicted_velocity.is_finite() {
            predicted_velocity
        } else {
            vwarn!(predicted_velocity, "Pager::drag_end: non-finite velocity");
            0.0
        };

        let was_dragging = self.end_drag();

        let (target, kind) = if velocity.abs() > self.options.fling_threshold {
            let step = if velocity < 0.0 { 1 } else { -1 };
            (
                Some(self.selected_index as i64 + step),
                TransitionKind::Advance,
            )
        } else {
            (self.geometry().nearest_page(self.offset), TransitionKind::Snap)
        };

        let extra = Changes {
            dragging: was_dragging,
            ..Changes::NONE
        };
        self.settle(target, kind, false, extra)
    }

    /// Moves directly to page `index`, as requested by an indicator.
    ///
    /// The transition duration grows with the number of pages crossed. Indexes outside
    /// `0..page_count` are a caller error; they are logged and ignored.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        let page_count = self.page_count();
        if index >= page_count {
            vwarn!(index, page_count, "Pager::jump_to: out-of-range page");
            return None;
        }

        let was_dragging = self.end_drag();
        let from = self.offset;
        let distance = index.abs_diff(self.selected_index);
        let to = self.offset_for_page(index);

        let changes = Changes {
            offset: to != from,
            selection: index != self.selected_index,
            dragging: was_dragging,
            ..Changes::NONE
        };
        self.selected_index = index;
        self.offset = to;
        vdebug!(index, distance, "Pager::jump_to");
        self.notify(changes);

        Some(Transition {
            from,
            to,
            duration_ms: jump_duration_ms(distance),
            easing: self.options.easing,
            kind: TransitionKind::Jump,
        })
    }

    /// Returns `true` if a drag was active.
    pub(crate) fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging;
        self.is_dragging = false;
        self.drag_accumulated = 0.0;
        was_dragging
    }

    /// Moves the offset by `delta`. When `bounded`, a move that would leave the open interval
    /// `(-content_height + page_height, 0)` is rejected. Returns `true` if the offset moved.
    pub(crate) fn apply_drag_delta(&mut self, delta: f32, bounded: bool) -> bool {
        let candidate = self.offset + delta;
        if !candidate.is_finite() || candidate == self.offset {
            return false;
        }
        if bounded && !(candidate < 0.0 && candidate > self.geometry().min_offset()) {
            return false;
        }
        self.offset = candidate;
        true
    }

    /// Commits `target` if it names a page inside the content, otherwise restores the current
    /// page. `scaled` selects the distance-scaled jump duration instead of the settle duration.
    pub(crate) fn settle(
        &mut self,
        target: Option<i64>,
        kind: TransitionKind,
        scaled: bool,
        extra: Changes,
    ) -> Transition {
        let geometry = *self.geometry();
        let accepted = target.filter(|&t| {
            t >= 0
                && (t as usize) < geometry.page_count
                && geometry.is_valid()
                && geometry.accepts_page_top(t as f32 * geometry.page_height)
        });

        let (index, kind) = match accepted {
            Some(t) => (t as usize, kind),
            None => {
                vdebug!(?target, selected = self.selected_index, "Pager::settle rejected target");
                (self.selected_index, TransitionKind::Revert)
            }
        };

        let from = self.offset;
        let to = self.offset_for_page(index);
        let duration_ms = if scaled {
            jump_duration_ms(index.abs_diff(self.selected_index))
        } else {
            SETTLE_DURATION_MS
        };

        let changes = extra.union(Changes {
            offset: to != from,
            selection: index != self.selected_index,
            ..Changes::NONE
        });
        self.selected_index = index;
        self.offset = to;
        self.notify(changes);

        Transition {
            from,
            to,
            duration_ms,
            easing: self.options.easing,
            kind,
        }
    }

    /// Normalized scroll position: 0 on the first page, approaching 1 towards the end.
    pub fn progress(&self) -> f32 {
        self.progress_at(self.offset)
    }

    pub fn progress_at(&self, offset: f32) -> f32 {
        let content_height = self.content_height();
        if !content_height.is_finite() || content_height <= 0.0 {
            return 0.0;
        }
        -offset / content_height
    }

    pub fn indicators_visible(&self) -> bool {
        self.options
            .indicator_visibility
            .is_visible(self.page_count())
    }

    /// Placement of page `index` for a given offset, or `None` if out of range.
    pub fn page_item_at(&self, index: usize, offset: f32) -> Option<PageItem> {
        let geometry = self.geometry();
        if index >= geometry.page_count {
            return None;
        }
        let height = geometry.viewport.height;
        let top = geometry.page_top(index) + offset;
        let visible = height > 0.0 && top < height && top + height > 0.0;
        Some(PageItem {
            index,
            top,
            height,
            visible,
        })
    }

    pub fn page_item(&self, index: usize) -> Option<PageItem> {
        self.page_item_at(index, self.offset)
    }

    /// Iterates over every page's placement for a given offset without allocations.
    pub fn for_each_page_at(&self, offset: f32, mut f: impl FnMut(PageItem)) {
        for index in 0..self.page_count() {
            if let Some(item) = self.page_item_at(index, offset) {
                f(item);
            }
        }
    }

    pub fn for_each_page(&self, f: impl FnMut(PageItem)) {
        self.for_each_page_at(self.offset, f);
    }

    /// Pages intersecting the viewport for a given offset.
    pub fn visible_pages_at(&self, offset: f32) -> PageRange {
        let mut range: Option<PageRange> = None;
        for index in 0..self.page_count() {
            let Some(item) = self.page_item_at(index, offset) else {
                break;
            };
            if item.visible {
                let r = range.get_or_insert(PageRange {
                    start_index: index,
                    end_index: index,
                });
                r.end_index = index + 1;
            } else if range.is_some() {
                break;
            }
        }
        range.unwrap_or_default()
    }

    pub fn visible_pages(&self) -> PageRange {
        self.visible_pages_at(self.offset)
    }

    pub fn is_page_visible(&self, index: usize) -> bool {
        self.page_item(index).is_some_and(|it| it.visible)
    }
}
