use sashi_ipc::{clamp_opacity, RulerConfig};

use super::{toggle_orientation, DragController, Rect, RegionDetector, Settings};

/// Live state of one ruler window: its config, the interaction settings and
/// the drag state machine. All geometry changes pass through
/// [`RulerState::set_bounds`], which enforces the minimum size.
pub struct RulerState {
    pub config: RulerConfig,
    pub settings: Settings,
    drag: DragController,
}

impl RulerState {
    pub fn new(config: RulerConfig, settings: Settings) -> Self {
        let drag = DragController::new(
            RegionDetector::new(settings.border_width),
            settings.min_size,
        );
        let mut state = Self {
            config,
            settings,
            drag,
        };
        let bounds = state.bounds();
        state.set_bounds(bounds);
        state.config.opacity = clamp_opacity(state.config.opacity);
        state
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_config(&self.config)
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn drag_mut(&mut self) -> &mut DragController {
        &mut self.drag
    }

    /// Store new window bounds, raising width/height to the minimum size.
    /// Returns the bounds actually stored.
    pub fn set_bounds(&mut self, bounds: Rect) -> Rect {
        let size = bounds.size().clamp_min(self.settings.min_size);
        if size != bounds.size() {
            tracing::debug!(
                "Clamped {}x{} to {}x{}",
                bounds.width,
                bounds.height,
                size.width,
                size.height
            );
        }
        self.config.x = bounds.x;
        self.config.y = bounds.y;
        self.config.width = size.width;
        self.config.height = size.height;
        self.bounds()
    }

    pub fn toggle_orientation(&mut self) {
        toggle_orientation(&mut self.config);
        tracing::info!(
            "Orientation: {} ({}x{})",
            if self.config.is_vertical {
                "vertical"
            } else {
                "horizontal"
            },
            self.config.width,
            self.config.height
        );
    }

    pub fn toggle_locked(&mut self) -> bool {
        self.config.is_locked = !self.config.is_locked;
        tracing::info!("Locked: {}", self.config.is_locked);
        self.config.is_locked
    }

    pub fn toggle_top_most(&mut self) -> bool {
        self.config.top_most = !self.config.top_most;
        tracing::info!("Stay on top: {}", self.config.top_most);
        self.config.top_most
    }

    pub fn toggle_tool_tip(&mut self) -> bool {
        self.config.show_tool_tip = !self.config.show_tool_tip;
        self.config.show_tool_tip
    }

    pub fn set_opacity(&mut self, opacity: f64) -> f64 {
        self.config.opacity = clamp_opacity(opacity);
        tracing::info!("Opacity: {}", self.config.opacity);
        self.config.opacity
    }

    /// Tooltip text while tooltips are enabled.
    pub fn tool_tip(&self) -> Option<String> {
        self.config
            .show_tool_tip
            .then(|| self.config.tool_tip_text())
    }

    /// Copy of the config for handing to a duplicate instance.
    pub fn snapshot(&self) -> RulerConfig {
        self.config.clone()
    }
}
