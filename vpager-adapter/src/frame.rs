use vpager::{Handle, PageRange};

/// What the indicator overlay should draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorFrame {
    Dots { count: usize, selected: usize },
    ProgressBar { handle: Handle, progress: f32 },
}

/// A render snapshot produced by [`crate::Controller::frame`].
///
/// `offset` is the displayed offset (mid-animation if a transition is running), rounded to
/// whole points so page edges stay crisp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub offset: f32,
    pub selected_index: usize,
    pub page_count: usize,
    pub visible_pages: PageRange,
    pub is_dragging: bool,
    pub is_animating: bool,
    /// `None` when indicators are hidden for the current page count.
    pub indicator: Option<IndicatorFrame>,
    pub indicator_opacity: f32,
}
