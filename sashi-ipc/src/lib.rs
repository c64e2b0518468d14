pub mod command;
pub mod config;
pub mod menu;

pub use command::{MenuCommand, UnknownMenuItem};
pub use config::{clamp_opacity, ParamError, RulerConfig, PARAM_COUNT};
pub use menu::{build_menu, MenuEntry, OPACITY_STEPS};
