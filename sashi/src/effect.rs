use crate::core::{CursorIcon, Rect, Size};

/// Side effects requested by event processing, executed against a host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetBounds(Rect),
    SetOpacity(f64),
    SetTopMost(bool),
    SetCursor(CursorIcon),
    SetToolTip(Option<String>),
    /// Ask the host to schedule a repaint.
    Redraw,
    /// Render now and hand the draw operations to the host.
    Paint,
    PromptSize(Size),
    Duplicate {
        params: Vec<String>,
    },
    ShowAbout,
    ShowMessage(String),
    Close,
}
