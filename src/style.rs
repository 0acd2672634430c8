//! Stroke and arrowhead styles shared by every stamp

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, Result, StampError};
use crate::geometry::Color;

/// How a path is stroked: color, width and dash pattern
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub line_width: f64,
    /// Alternating on/off lengths; empty means a solid line
    #[serde(default)]
    pub dash: Vec<f64>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::GUIDE_GREY,
            line_width: 1.0,
            dash: Vec::new(),
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, line_width: f64) -> Self {
        Self {
            color,
            line_width,
            dash: Vec::new(),
        }
    }

    pub fn with_dash(mut self, dash: impl Into<Vec<f64>>) -> Self {
        self.dash = dash.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }

    /// Reject widths, colors and dash entries the surface cannot honor
    pub fn validate(&self) -> Result<()> {
        self.color.validate()?;
        ensure_positive("line_width", self.line_width)?;
        for &length in &self.dash {
            if !length.is_finite() || length <= 0.0 {
                return Err(StampError::invalid(
                    "dash",
                    format!("entries must be finite and > 0, got {length}"),
                ));
            }
        }
        Ok(())
    }
}

/// Arrowhead shape drawn at a connector endpoint
///
/// The wings end at `anchor + radius * (cos(angle ± spread), sin(angle ± spread))`,
/// where `angle` is the direction the connector supplies for that endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    /// Angle in radians between each wing and the endpoint direction
    pub spread: f64,
    /// Length of each wing
    pub radius: f64,
    /// Fill the triangle formed by the wings and the anchor
    pub filled: bool,
}

impl ArrowStyle {
    /// Wings sit 30 degrees off the connector, behind the endpoint
    pub const DEFAULT_SPREAD: f64 = 5.0 * std::f64::consts::PI / 6.0;

    pub fn new(spread: f64, radius: f64) -> Self {
        Self {
            spread,
            radius,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("arrow.spread", self.spread)?;
        ensure_positive("arrow.radius", self.radius)?;
        Ok(())
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPREAD, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let s = StrokeStyle::default();
        assert_eq!(s.line_width, 1.0);
        assert_eq!(s.color, Color::GUIDE_GREY);
        assert!(!s.is_dashed());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_stroke_rejects_bad_values() {
        let err = StrokeStyle::new(Color::BLACK, 0.0).validate().unwrap_err();
        assert_eq!(err.parameter(), "line_width");

        let err = StrokeStyle::default().with_dash([4.0, 0.0]).validate().unwrap_err();
        assert_eq!(err.parameter(), "dash");

        let err = StrokeStyle::new(Color::rgba(0.0, 2.0, 0.0, 1.0), 1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "color");
    }

    #[test]
    fn test_arrow_validate() {
        assert!(ArrowStyle::default().validate().is_ok());
        assert!(ArrowStyle::new(0.5, -1.0).validate().is_err());
        assert!(ArrowStyle::new(f64::NAN, 4.0).validate().is_err());
        assert!(ArrowStyle::new(0.5, 4.0).filled().filled);
    }

    #[test]
    fn test_stroke_json() {
        let s: StrokeStyle = serde_json::from_str(
            r#"{"color": {"r": 1, "g": 0, "b": 0, "a": 1}, "line_width": 2}"#,
        )
        .unwrap();
        assert_eq!(s.line_width, 2.0);
        assert!(s.dash.is_empty());
    }
}
