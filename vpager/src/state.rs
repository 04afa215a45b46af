/// A lightweight, serializable snapshot of the pager's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    pub offset: f32,
    pub selected_index: usize,
    pub page_count: usize,
    pub is_dragging: bool,
}

impl PagerState {
    /// Offset relative to the selected page's resting position, given a page height.
    pub fn offset_from_selected(&self, page_height: f32) -> f32 {
        self.offset + self.selected_index as f32 * page_height
    }
}
