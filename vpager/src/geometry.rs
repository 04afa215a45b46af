use crate::Size;

// Absorbs float error in `content_height / page_height` (e.g. 2.9999 for three pages).
const PAGE_COUNT_EPSILON: f32 = 1e-3;

/// Page metrics derived from the viewport and the measured content stack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub viewport: Size,
    /// Stacked content height including one trailing spacing.
    pub content_height: f32,
    /// Stride between adjacent page tops: viewport height plus spacing.
    pub page_height: f32,
    pub page_count: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            viewport: Size::ZERO,
            content_height: 0.0,
            page_height: 0.0,
            page_count: 1,
        }
    }
}

impl Geometry {
    /// Derives page metrics from a layout measurement.
    ///
    /// `content` is the measured height of the page stack, which only contains spacing between
    /// pages; one spacing is added so that `N` pages always track as `N * page_height`.
    pub fn measure(viewport: Size, content: Size, spacing: f32) -> Self {
        let page_height = viewport.height + spacing;
        let content_height = content.height + spacing;
        Self {
            viewport,
            content_height,
            page_height,
            page_count: page_count(content_height, page_height),
        }
    }

    /// Returns `true` when offsets can be mapped to pages.
    pub fn is_valid(&self) -> bool {
        self.page_height.is_finite() && self.page_height > 0.0
    }

    /// Top of page `index` in content coordinates.
    pub fn page_top(&self, index: usize) -> f32 {
        index as f32 * self.page_height
    }

    /// Lowest offset a bounded drag may reach (exclusive).
    pub fn min_offset(&self) -> f32 {
        -self.content_height + self.page_height
    }

    /// Returns `true` if `top` is a committable page top: `0 <= top < content_height`.
    pub fn accepts_page_top(&self, top: f32) -> bool {
        top >= 0.0 && top < self.content_height
    }

    /// Page index nearest to `offset`, or `None` when page height is degenerate.
    pub fn nearest_page(&self, offset: f32) -> Option<i64> {
        if !self.is_valid() || !offset.is_finite() {
            return None;
        }
        Some((-offset / self.page_height).round() as i64)
    }
}

fn page_count(content_height: f32, page_height: f32) -> usize {
    if !content_height.is_finite() || !page_height.is_finite() || page_height <= 0.0 {
        return 1;
    }
    if content_height <= 0.0 {
        return 1;
    }
    let count = (content_height / page_height + PAGE_COUNT_EPSILON).floor();
    (count as usize).max(1)
}

/// Emitted by a geometry commit when the derived page count changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryChanged {
    pub previous_page_count: usize,
    pub page_count: usize,
}

/// Tracks geometry with a two-phase measure/commit flow.
///
/// Layout passes stage a measurement; the owner commits it once the pass is over, so state is
/// never mutated in the middle of a layout. Both phases are refused while a drag is active.
#[derive(Clone, Debug, Default)]
pub struct GeometryTracker {
    current: Geometry,
    pending: Option<(Size, Size)>,
    spacing: f32,
}

impl GeometryTracker {
    pub fn new(spacing: f32) -> Self {
        Self {
            current: Geometry::default(),
            pending: None,
            spacing,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.current
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a measurement to be applied by the next [`GeometryTracker::commit`].
    ///
    /// Later measurements replace earlier ones. Returns `false` when dragging.
    pub fn stage(&mut self, viewport: Size, content: Size, dragging: bool) -> bool {
        if dragging {
            vtrace!("GeometryTracker::stage skipped while dragging");
            return false;
        }
        self.pending = Some((viewport, content));
        true
    }

    /// Applies the staged measurement.
    ///
    /// Returns `None` when nothing was staged, when dragging (the measurement is dropped), or
    /// when the page count did not change. The metrics themselves are still updated in the
    /// last case; use [`GeometryTracker::geometry`] to read them.
    pub fn commit(&mut self, dragging: bool) -> Option<GeometryChanged> {
        let (viewport, content) = self.pending.take()?;
        if dragging {
            vdebug!("GeometryTracker::commit dropped staged measurement while dragging");
            return None;
        }
        let next = Geometry::measure(viewport, content, self.spacing);
        let previous_page_count = self.current.page_count;
        self.current = next;
        vtrace!(
            page_height = next.page_height,
            content_height = next.content_height,
            page_count = next.page_count,
            "GeometryTracker::commit"
        );
        if next.page_count == previous_page_count {
            return None;
        }
        Some(GeometryChanged {
            previous_page_count,
            page_count: next.page_count,
        })
    }

    /// Stages and commits in one step.
    pub fn update(
        &mut self,
        viewport: Size,
        content: Size,
        dragging: bool,
    ) -> Option<GeometryChanged> {
        if !self.stage(viewport, content, dragging) {
            return None;
        }
        self.commit(dragging)
    }
}
