use std::sync::Arc;

use crate::pager::Pager;
use crate::{Changes, Easing, IndicatorStyle, IndicatorVisibility, PageSpacing};

/// Release velocity (points per second) above which a drag advances one page.
pub const DEFAULT_FLING_THRESHOLD: f32 = 200.0;

/// A callback fired when pager state changes.
///
/// The second argument lists which fields changed so consumers only re-pull what they need.
pub type OnChangeCallback = Arc<dyn Fn(&Pager, Changes) + Send + Sync>;

/// Configuration for [`crate::Pager`].
///
/// Options are fixed for the lifetime of a pager; build them up front with the `with_*`
/// methods and hand them to `Pager::new`.
#[derive(Clone)]
pub struct PagerOptions {
    /// Rejects drag movement past the first and last page instead of overscrolling.
    pub prevent_overscroll: bool,
    pub indicator_visibility: IndicatorVisibility,
    pub indicator_style: IndicatorStyle,
    /// Signed distance between pages. Negative values overlap pages.
    pub page_spacing: f32,
    /// Page selected once the first usable geometry arrives.
    pub initial_page: usize,
    pub fling_threshold: f32,
    /// Curve named in every transition request.
    pub easing: Easing,
    pub on_change: Option<OnChangeCallback>,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PagerOptions {
    pub fn new() -> Self {
        Self {
            prevent_overscroll: false,
            indicator_visibility: IndicatorVisibility::Never,
            indicator_style: IndicatorStyle::Dots,
            page_spacing: PageSpacing::None.value(),
            initial_page: 0,
            fling_threshold: DEFAULT_FLING_THRESHOLD,
            easing: Easing::default(),
            on_change: None,
        }
    }

    pub fn with_prevent_overscroll(mut self, prevent_overscroll: bool) -> Self {
        self.prevent_overscroll = prevent_overscroll;
        self
    }

    pub fn with_indicator_visibility(mut self, visibility: IndicatorVisibility) -> Self {
        self.indicator_visibility = visibility;
        self
    }

    pub fn with_indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }

    pub fn with_page_spacing(mut self, spacing: PageSpacing) -> Self {
        self.page_spacing = spacing.value();
        self
    }

    /// Sets an arbitrary spacing value instead of a preset.
    ///
    /// Spacing at or below `-viewport_height` leaves no positive page height; the pager then
    /// reports a single page and refuses to move.
    pub fn with_page_spacing_value(mut self, spacing: f32) -> Self {
        self.page_spacing = spacing;
        self
    }

    pub fn with_initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_fling_threshold(mut self, fling_threshold: f32) -> Self {
        self.fling_threshold = fling_threshold;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Pager, Changes) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("prevent_overscroll", &self.prevent_overscroll)
            .field("indicator_visibility", &self.indicator_visibility)
            .field("indicator_style", &self.indicator_style)
            .field("page_spacing", &self.page_spacing)
            .field("initial_page", &self.initial_page)
            .field("fling_threshold", &self.fling_threshold)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
