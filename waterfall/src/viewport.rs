use crate::Rect;

/// The band of content coordinates that is currently rendered: the viewport extended by a
/// buffer margin on both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub top: u64,
    pub bottom: u64,
}

impl Window {
    pub fn new(scroll_offset: u64, container_height: u32, buffer: u64) -> Self {
        Self {
            top: scroll_offset.saturating_sub(buffer),
            bottom: scroll_offset
                .saturating_add(container_height as u64)
                .saturating_add(buffer),
        }
    }

    /// Returns `true` if any part of `rect` (edges included) falls inside the window.
    pub fn intersects(&self, rect: &Rect) -> bool {
        rect.bottom() >= self.top && rect.top <= self.bottom
    }
}
