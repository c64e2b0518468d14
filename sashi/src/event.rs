use sashi_ipc::MenuCommand;
use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Events delivered by the host, one at a time. Mouse events carry both the
/// window-local and the global cursor position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    MouseDown {
        #[serde(default)]
        button: MouseButton,
        local: Point,
        global: Point,
    },
    MouseMove {
        local: Point,
        global: Point,
    },
    MouseUp {
        #[serde(default)]
        button: MouseButton,
        local: Point,
        global: Point,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Paint,
    /// The host changed the window bounds on its own.
    Resized {
        bounds: Rect,
    },
    Menu {
        command: MenuCommand,
    },
    /// Menu click from a host that only knows item labels.
    MenuLabel {
        label: String,
    },
    /// Answer to a size prompt.
    SizeEntered {
        width: i32,
        height: i32,
    },
}
