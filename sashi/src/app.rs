use sashi_ipc::RulerConfig;

use crate::core::{RulerState, Settings};
use crate::effect::Effect;
use crate::event::Event;
use crate::platform::Host;
use crate::render::{render_ruler, Surface};

mod command;
mod effects;
mod session;

pub use command::{process_event, process_menu_command};
pub use effects::execute_effects;
pub use session::run_session;

/// Build the startup config from launch parameters. No parameters means
/// defaults; a list that fails to decode is discarded as a whole.
pub fn launch_config<S: AsRef<str>>(params: &[S]) -> RulerConfig {
    if params.is_empty() {
        return RulerConfig::default();
    }
    match RulerConfig::from_params(params) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring launch parameters ({}), using defaults", e);
            RulerConfig::default()
        }
    }
}

/// One ruler window bound to its host.
pub struct Ruler<H: Host> {
    state: RulerState,
    host: H,
    closed: bool,
}

impl<H: Host> Ruler<H> {
    /// Create the ruler and push its initial geometry and flags to the host.
    pub fn new(config: RulerConfig, settings: Settings, host: H) -> Self {
        let mut ruler = Self {
            state: RulerState::new(config, settings),
            host,
            closed: false,
        };

        let config = &ruler.state.config;
        let mut initial = vec![
            Effect::SetBounds(ruler.state.bounds()),
            Effect::SetOpacity(config.opacity),
            Effect::SetTopMost(config.top_most),
        ];
        if let Some(text) = ruler.state.tool_tip() {
            initial.push(Effect::SetToolTip(Some(text)));
        }
        ruler.run(initial);

        tracing::info!(
            "Ruler ready at ({}, {}) {}x{}",
            ruler.state.config.x,
            ruler.state.config.y,
            ruler.state.config.width,
            ruler.state.config.height
        );
        ruler
    }

    pub fn handle_event(&mut self, event: &Event) {
        if self.closed {
            tracing::debug!("Ignoring event after close: {:?}", event);
            return;
        }
        let effects = process_event(&mut self.state, event);
        self.run(effects);
    }

    /// Paint directly onto a host-provided surface.
    pub fn paint<S: Surface>(&self, surface: &mut S) {
        render_ruler(surface, &self.state.config);
    }

    pub fn state(&self) -> &RulerState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn run(&mut self, effects: Vec<Effect>) {
        if execute_effects(effects, &mut self.state, &self.host) {
            self.closed = true;
        }
    }
}
