use std::cell::RefCell;
use std::io::Write;

use serde::Serialize;

use crate::core::{CursorIcon, Rect, Size};
use crate::render::DrawOp;

/// Capabilities the ruler needs from the windowing toolkit.
/// This abstraction allows mocking in tests.
pub trait Host {
    fn set_bounds(&self, bounds: Rect);
    fn set_opacity(&self, opacity: f64);
    fn set_top_most(&self, top_most: bool);
    fn set_cursor(&self, cursor: CursorIcon);
    fn set_tool_tip(&self, text: Option<&str>);
    fn redraw(&self);
    fn draw(&self, ops: &[DrawOp]);
    fn text_height(&self) -> i32;
    /// Start a new ruler instance seeded with the given launch parameters.
    fn spawn_duplicate(&self, params: &[String]) -> Result<(), String>;
    /// Modal size dialog. `None` when cancelled or answered asynchronously.
    fn prompt_size(&self, current: Size) -> Option<Size>;
    fn show_about(&self);
    fn show_message(&self, message: &str);
    fn close(&self);
}

/// One host capability call, as written on the session channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    SetBounds { bounds: Rect },
    SetOpacity { opacity: f64 },
    SetTopMost { top_most: bool },
    SetCursor { cursor: CursorIcon },
    SetToolTip { text: Option<String> },
    Redraw,
    Draw { ops: Vec<DrawOp> },
    SpawnDuplicate { params: Vec<String> },
    PromptSize { width: i32, height: i32 },
    ShowAbout,
    ShowMessage { message: String },
    Close,
}

/// Host for the headless session: every call becomes one JSON line on the
/// writer and the peer process performs it. Size prompts are answered later
/// with a `size_entered` event.
pub struct StdioHost<W: Write> {
    out: RefCell<W>,
    text_height: i32,
}

impl<W: Write> StdioHost<W> {
    pub fn new(out: W, text_height: i32) -> Self {
        Self {
            out: RefCell::new(out),
            text_height,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, call: HostCall) {
        let mut out = self.out.borrow_mut();
        let result = serde_json::to_writer(&mut *out, &call)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(out))
            .and_then(|_| out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write host call {:?}: {}", call, e);
        }
    }
}

impl<W: Write> Host for StdioHost<W> {
    fn set_bounds(&self, bounds: Rect) {
        self.emit(HostCall::SetBounds { bounds });
    }

    fn set_opacity(&self, opacity: f64) {
        self.emit(HostCall::SetOpacity { opacity });
    }

    fn set_top_most(&self, top_most: bool) {
        self.emit(HostCall::SetTopMost { top_most });
    }

    fn set_cursor(&self, cursor: CursorIcon) {
        self.emit(HostCall::SetCursor { cursor });
    }

    fn set_tool_tip(&self, text: Option<&str>) {
        self.emit(HostCall::SetToolTip {
            text: text.map(String::from),
        });
    }

    fn redraw(&self) {
        self.emit(HostCall::Redraw);
    }

    fn draw(&self, ops: &[DrawOp]) {
        self.emit(HostCall::Draw { ops: ops.to_vec() });
    }

    fn text_height(&self) -> i32 {
        self.text_height
    }

    fn spawn_duplicate(&self, params: &[String]) -> Result<(), String> {
        self.emit(HostCall::SpawnDuplicate {
            params: params.to_vec(),
        });
        Ok(())
    }

    fn prompt_size(&self, current: Size) -> Option<Size> {
        self.emit(HostCall::PromptSize {
            width: current.width,
            height: current.height,
        });
        None
    }

    fn show_about(&self) {
        self.emit(HostCall::ShowAbout);
    }

    fn show_message(&self, message: &str) {
        self.emit(HostCall::ShowMessage {
            message: message.to_string(),
        });
    }

    fn close(&self) {
        self.emit(HostCall::Close);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdio_host_writes_json_lines() {
        let host = StdioHost::new(Vec::new(), 16);
        host.set_bounds(Rect::new(1, 2, 300, 50));
        host.set_cursor(CursorIcon::DiagonalNesw);
        assert_eq!(host.prompt_size(Size::new(300, 50)), None);

        let out = String::from_utf8(host.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            r#"{"call":"set_bounds","bounds":{"x":1,"y":2,"width":300,"height":50}}"#
        );
        assert_eq!(
            lines[1],
            r#"{"call":"set_cursor","cursor":"diagonal_nesw"}"#
        );
        assert_eq!(
            lines[2],
            r#"{"call":"prompt_size","width":300,"height":50}"#
        );
    }
}
