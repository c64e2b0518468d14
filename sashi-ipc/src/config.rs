use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of tokens in an encoded launch parameter list.
pub const PARAM_COUNT: usize = 9;

/// Replacement for non-positive opacities.
pub const MIN_OPACITY: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("expected {expected} parameters, got {actual}")]
    Count { expected: usize, actual: usize },
    #[error("invalid {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i32 },
    #[error("opacity must be in (0, 1], got {0}")]
    Opacity(f64),
}

/// Geometry, appearance and behavior of one ruler window.
///
/// Travels between processes only as an ordered token list, see
/// [`RulerConfig::to_params`] and [`RulerConfig::from_params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub is_vertical: bool,
    pub top_most: bool,
    pub is_locked: bool,
    pub opacity: f64,
    pub show_tool_tip: bool,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 400,
            height: 75,
            is_vertical: false,
            top_most: false,
            is_locked: false,
            opacity: 0.6,
            show_tool_tip: false,
        }
    }
}

impl RulerConfig {
    /// Encode as launch parameters. Field order is part of the contract:
    /// x, y, width, height, vertical, top-most, locked, opacity, tooltip.
    pub fn to_params(&self) -> Vec<String> {
        vec![
            self.x.to_string(),
            self.y.to_string(),
            self.width.to_string(),
            self.height.to_string(),
            self.is_vertical.to_string(),
            self.top_most.to_string(),
            self.is_locked.to_string(),
            self.opacity.to_string(),
            self.show_tool_tip.to_string(),
        ]
    }

    /// Decode launch parameters produced by [`RulerConfig::to_params`].
    ///
    /// Either every field decodes or the whole list is rejected.
    pub fn from_params<S: AsRef<str>>(params: &[S]) -> Result<Self, ParamError> {
        if params.len() != PARAM_COUNT {
            return Err(ParamError::Count {
                expected: PARAM_COUNT,
                actual: params.len(),
            });
        }
        let p: Vec<&str> = params.iter().map(|s| s.as_ref().trim()).collect();

        let config = Self {
            x: parse_int("x", p[0])?,
            y: parse_int("y", p[1])?,
            width: parse_size("width", p[2])?,
            height: parse_size("height", p[3])?,
            is_vertical: parse_bool("vertical", p[4])?,
            top_most: parse_bool("top_most", p[5])?,
            is_locked: parse_bool("locked", p[6])?,
            opacity: parse_opacity(p[7])?,
            show_tool_tip: parse_bool("tool_tip", p[8])?,
        };
        Ok(config)
    }

    pub fn tool_tip_text(&self) -> String {
        format!(
            "Width: {} pixels\nHeight: {} pixels",
            self.width, self.height
        )
    }

    /// Opacity as the nearest whole percentage, used for menu check state.
    pub fn opacity_percent(&self) -> u8 {
        (self.opacity * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Bring an opacity into (0, 1]. Values already in range are returned
/// unchanged; zero or below becomes [`MIN_OPACITY`], anything above one or
/// non-finite becomes fully opaque.
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() || opacity > 1.0 {
        1.0
    } else if opacity <= 0.0 {
        MIN_OPACITY
    } else {
        opacity
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ParamError> {
    value.parse().map_err(|_| ParamError::Invalid {
        field,
        value: value.to_string(),
    })
}

fn parse_size(field: &'static str, value: &str) -> Result<i32, ParamError> {
    let n = parse_int(field, value)?;
    if n <= 0 {
        return Err(ParamError::NonPositive { field, value: n });
    }
    Ok(n)
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, ParamError> {
    match value {
        "true" | "True" | "1" => Ok(true),
        "false" | "False" | "0" => Ok(false),
        _ => Err(ParamError::Invalid {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_opacity(value: &str) -> Result<f64, ParamError> {
    let opacity: f64 = value.parse().map_err(|_| ParamError::Invalid {
        field: "opacity",
        value: value.to_string(),
    })?;
    if !(opacity > 0.0 && opacity <= 1.0) {
        return Err(ParamError::Opacity(opacity));
    }
    Ok(opacity)
}
