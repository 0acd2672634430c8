//! Plane geometry value types - Point, Rect, Color
//!
//! ## Coordinate System
//!
//! Coordinates follow the usual 2D canvas convention:
//! - (0, 0) is the top-left corner of the surface
//! - X grows to the right, Y grows downward
//! - Angles are in radians, measured from +X towards +Y

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result, StampError};

/// A point in the plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `distance` away from this one in direction `angle`
    pub fn polar_offset(self, angle: f64, distance: f64) -> Self {
        Self::new(self.x + distance * angle.cos(), self.y + distance * angle.sin())
    }

    /// Direction angle of the vector from `from` to `self`
    ///
    /// Uses `atan2`, so the zero vector yields `0.0` rather than an error.
    pub fn angle_from(self, from: Point) -> f64 {
        (self.y - from.y).atan2(self.x - from.x)
    }

    pub(crate) fn validate(self, parameter: &'static str) -> Result<Self> {
        ensure_finite(parameter, self.x)?;
        ensure_finite(parameter, self.y)?;
        Ok(self)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a position and a size
    pub fn from_position_size(position: Point, size: (f64, f64)) -> Self {
        Self::new(position.x, position.y, size.0, size.1)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Radius of the largest circle centered in the rectangle that still fits
    pub fn inscribed_radius(&self) -> f64 {
        (self.width / 2.0).min(self.height / 2.0)
    }

    /// Distance from the center to a corner
    pub fn half_diagonal(&self) -> f64 {
        (self.width / 2.0).hypot(self.height / 2.0)
    }

    /// Check that the rectangle is drawable: finite, with non-negative size
    ///
    /// Tiling loops step towards `right()`/`bottom()`, so an infinite edge
    /// would never be reached.
    pub fn validate(self) -> Result<Self> {
        for value in [self.x, self.y, self.width, self.height] {
            ensure_finite("rect", value)?;
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(StampError::invalid(
                "rect",
                format!("size must be >= 0, got {}x{}", self.width, self.height),
            ));
        }
        Ok(self)
    }
}

/// An RGBA color with every channel in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// Translucent mid-grey used by every stamp unless told otherwise
    pub const GUIDE_GREY: Color = Color::rgba(0.5, 0.5, 0.5, 0.5);

    /// Create a color without range checks (for constants)
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color, rejecting channels outside `[0, 1]`
    pub fn try_rgba(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        Self::rgba(r, g, b, a).validate()
    }

    pub fn validate(self) -> Result<Self> {
        for (name, value) in [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StampError::invalid(
                    "color",
                    format!("channel {name} must be within [0, 1], got {value}"),
                ));
            }
        }
        Ok(self)
    }

    /// Channels scaled to 0..=255 (alpha excluded)
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let scale = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        (scale(self.r), scale(self.g), scale(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::GUIDE_GREY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_polar_offset() {
        let p = Point::new(10.0, 10.0).polar_offset(PI / 2.0, 5.0);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_from_zero_vector() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.angle_from(p), 0.0);
    }

    #[test]
    fn test_rect_bounds() {
        let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
        assert_eq!(rect.center(), Point::new(50.0, 30.0));
        assert_eq!(rect.inscribed_radius(), 30.0);
        assert!((rect.half_diagonal() - 58.309).abs() < 0.001);
    }

    #[test]
    fn test_rect_validate() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).validate().is_ok());
        assert!(Rect::new(0.0, 0.0, -1.0, 5.0).validate().is_err());
        assert!(Rect::new(0.0, 0.0, f64::INFINITY, 5.0).validate().is_err());
        assert!(Rect::new(f64::NAN, 0.0, 1.0, 5.0).validate().is_err());
    }

    #[test]
    fn test_color_range() {
        assert!(Color::try_rgba(0.0, 0.5, 1.0, 1.0).is_ok());
        let err = Color::try_rgba(1.5, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.parameter(), "color");
        assert!(Color::try_rgba(0.0, 0.0, 0.0, -0.1).is_err());
        assert!(Color::try_rgba(f64::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_color_rgb8() {
        assert_eq!(Color::GUIDE_GREY.to_rgb8(), (128, 128, 128));
        assert_eq!(Color::WHITE.to_rgb8(), (255, 255, 255));
    }
}
