use sashi_ipc::RulerConfig;

/// Swap width and height and flip the vertical flag. Applying it twice
/// restores the original config.
pub fn toggle_orientation(config: &mut RulerConfig) {
    config.is_vertical = !config.is_vertical;
    std::mem::swap(&mut config.width, &mut config.height);
}
