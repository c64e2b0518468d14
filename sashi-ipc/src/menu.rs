use serde::{Deserialize, Serialize};

use crate::command::MenuCommand;
use crate::config::RulerConfig;

/// Opacity percentages offered in the opacity submenu.
pub const OPACITY_STEPS: [u8; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuEntry {
    Item {
        command: MenuCommand,
        label: String,
        checked: bool,
    },
    Submenu {
        label: String,
        items: Vec<MenuEntry>,
    },
    Separator,
}

impl MenuEntry {
    fn item(command: MenuCommand, checked: bool) -> Self {
        MenuEntry::Item {
            label: command.label(),
            command,
            checked,
        }
    }
}

/// Build the context menu for the given config. Check marks follow the
/// config flags; exactly one opacity item is checked when the opacity is
/// one of [`OPACITY_STEPS`].
pub fn build_menu(config: &RulerConfig) -> Vec<MenuEntry> {
    let current = config.opacity_percent();
    let opacity_items = OPACITY_STEPS
        .iter()
        .map(|&percent| MenuEntry::item(MenuCommand::Opacity { percent }, percent == current))
        .collect();

    vec![
        MenuEntry::item(MenuCommand::StayOnTop, config.top_most),
        MenuEntry::item(MenuCommand::Vertical, config.is_vertical),
        MenuEntry::item(MenuCommand::ToolTip, config.show_tool_tip),
        MenuEntry::Submenu {
            label: "Opacity".to_string(),
            items: opacity_items,
        },
        MenuEntry::item(MenuCommand::Lock, config.is_locked),
        MenuEntry::item(MenuCommand::SetSize, false),
        MenuEntry::item(MenuCommand::Duplicate, false),
        MenuEntry::Separator,
        MenuEntry::item(MenuCommand::About, false),
        MenuEntry::Separator,
        MenuEntry::item(MenuCommand::Exit, false),
    ]
}
