/// A width/height pair in logical pixels, as reported by the host's layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// When the page indicator overlay should be shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorVisibility {
    #[default]
    Never,
    /// Shown only when there is more than one page.
    Automatic,
    Always,
}

impl IndicatorVisibility {
    pub fn is_visible(self, page_count: usize) -> bool {
        match self {
            Self::Never => false,
            Self::Automatic => page_count > 1,
            Self::Always => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorStyle {
    #[default]
    Dots,
    ProgressBar,
}

/// Spacing presets between adjacent pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSpacing {
    #[default]
    None,
    Small,
    Large,
    /// Pages overlap by the large spacing amount.
    Overlap,
}

impl PageSpacing {
    pub fn value(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Small => 20.0,
            Self::Large => 40.0,
            Self::Overlap => -40.0,
        }
    }
}

/// Named easing curves. The core only names a curve; sampling is done by the animation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

/// A half-open range of page indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl PageRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Placement of a single page relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageItem {
    pub index: usize,
    /// Top edge in viewport coordinates (offset already applied).
    pub top: f32,
    /// Height of the page itself (excludes spacing).
    pub height: f32,
    pub visible: bool,
}

impl PageItem {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The set of state fields touched by an update, passed to `on_change`.
///
/// Consumers use it to decide what to re-pull: the offset renderer cares about `offset`,
/// the dots indicator about `selection` and `page_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    pub offset: bool,
    pub selection: bool,
    pub page_count: bool,
    pub dragging: bool,
}

impl Changes {
    pub const NONE: Self = Self {
        offset: false,
        selection: false,
        page_count: false,
        dragging: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            offset: self.offset || other.offset,
            selection: self.selection || other.selection,
            page_count: self.page_count || other.page_count,
            dragging: self.dragging || other.dragging,
        }
    }
}
