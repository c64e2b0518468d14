use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuCommand {
    StayOnTop,
    Vertical,
    ToolTip,
    Opacity { percent: u8 },
    Lock,
    SetSize,
    Duplicate,
    About,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown menu item: {0:?}")]
pub struct UnknownMenuItem(pub String);

impl MenuCommand {
    pub fn label(&self) -> String {
        match self {
            MenuCommand::StayOnTop => "Stay On Top".to_string(),
            MenuCommand::Vertical => "Vertical".to_string(),
            MenuCommand::ToolTip => "Tool Tip".to_string(),
            MenuCommand::Opacity { percent } => format!("{}%", percent),
            MenuCommand::Lock => "Lock resizing".to_string(),
            MenuCommand::SetSize => "Set size...".to_string(),
            MenuCommand::Duplicate => "Duplicate".to_string(),
            MenuCommand::About => "About...".to_string(),
            MenuCommand::Exit => "Exit".to_string(),
        }
    }
}

impl FromStr for MenuCommand {
    type Err = UnknownMenuItem;

    /// Parse a menu label back into its command.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let cmd = match label {
            "Stay On Top" => MenuCommand::StayOnTop,
            "Vertical" => MenuCommand::Vertical,
            "Tool Tip" => MenuCommand::ToolTip,
            "Lock resizing" => MenuCommand::Lock,
            "Set size..." => MenuCommand::SetSize,
            "Duplicate" => MenuCommand::Duplicate,
            "About..." => MenuCommand::About,
            "Exit" => MenuCommand::Exit,
            other => {
                let percent = other
                    .strip_suffix('%')
                    .and_then(|p| p.parse::<u8>().ok())
                    .filter(|p| (1..=100).contains(p))
                    .ok_or_else(|| UnknownMenuItem(other.to_string()))?;
                MenuCommand::Opacity { percent }
            }
        };
        Ok(cmd)
    }
}

impl std::fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
