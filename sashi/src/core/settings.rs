use super::Size;

pub const DEFAULT_BORDER_WIDTH: i32 = 5;

/// Interaction constants. Grouped separately from the per-window config,
/// which travels between processes; these never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Thickness of the resize band along every edge.
    pub border_width: i32,
    /// Smallest size a drag, key press or dialog may produce.
    pub min_size: Size,
    /// Arrow key move distance without modifiers.
    pub key_step: i32,
    /// Arrow key move/resize distance with Ctrl held.
    pub fine_step: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            border_width: DEFAULT_BORDER_WIDTH,
            min_size: Size::new(1, 1),
            key_step: 5,
            fine_step: 1,
        }
    }
}
