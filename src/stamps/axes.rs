//! Axis overlays - Cartesian cross-hair, bullseye rings, polar coordinates

use std::f64::consts::TAU;

use super::grids::Segment;
use super::{ensure_count, MAX_PRIMITIVES};
use super::traits::Stamp;
use crate::error::{ensure_positive, Result};
use crate::geometry::{Point, Rect};
use crate::style::StrokeStyle;
use crate::surface::{Surface, SurfaceGuard};

/// A horizontal and a vertical axis crossing at the rectangle's center
#[derive(Clone, Debug, PartialEq)]
pub struct CartesianCoordinates {
    stroke: StrokeStyle,
}

impl CartesianCoordinates {
    pub fn new(stroke: StrokeStyle) -> Result<Self> {
        stroke.validate()?;
        Ok(Self { stroke })
    }

    /// `(horizontal, vertical)` axis segments spanning the full rectangle
    pub fn axes(&self, rect: Rect) -> (Segment, Segment) {
        let center = rect.center();
        (
            (Point::new(rect.left(), center.y), Point::new(rect.right(), center.y)),
            (Point::new(center.x, rect.top()), Point::new(center.x, rect.bottom())),
        )
    }
}

impl Stamp for CartesianCoordinates {
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()> {
        let rect = rect.validate()?;
        let (horizontal, vertical) = self.axes(rect);

        let mut s = SurfaceGuard::with_stroke(surface, &self.stroke);
        s.move_to(horizontal.0);
        s.line_to(horizontal.1);
        s.move_to(vertical.0);
        s.line_to(vertical.1);
        s.stroke();
        Ok(())
    }

    fn name(&self) -> &str {
        "CartesianCoordinates"
    }
}

/// Concentric rings around the rectangle's center
///
/// Rings sit at every multiple of `spacing` up to the inscribed radius, or up
/// to the half-diagonal when `overflow` is set (so rings reach the corners).
#[derive(Clone, Debug, PartialEq)]
pub struct Bullseye {
    stroke: StrokeStyle,
    spacing: f64,
    overflow: bool,
}

impl Bullseye {
    pub fn new(spacing: f64, overflow: bool, stroke: StrokeStyle) -> Result<Self> {
        stroke.validate()?;
        ensure_positive("spacing", spacing)?;
        Ok(Self {
            stroke,
            spacing,
            overflow,
        })
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// Largest ring radius allowed for `rect`
    pub fn max_radius(&self, rect: Rect) -> f64 {
        if self.overflow {
            rect.half_diagonal()
        } else {
            rect.inscribed_radius()
        }
    }

    /// Ring radii, innermost first, at most [`MAX_PRIMITIVES`] of them
    pub fn radii(&self, rect: Rect) -> Vec<f64> {
        let max = self.max_radius(rect);
        (1u64..)
            .map(|k| k as f64 * self.spacing)
            .take_while(|&r| r <= max)
            .take(MAX_PRIMITIVES)
            .collect()
    }

    fn ensure_ring_count(&self, rect: Rect) -> Result<usize> {
        ensure_count("spacing", (self.max_radius(rect) / self.spacing).floor())
    }
}

impl Stamp for Bullseye {
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()> {
        let rect = rect.validate()?;
        self.ensure_ring_count(rect)?;
        let center = rect.center();
        let radii = self.radii(rect);
        log::debug!("Bullseye: {} rings around {:?}", radii.len(), center);

        let mut s = SurfaceGuard::with_stroke(surface, &self.stroke);
        for radius in radii {
            // Separate subpaths so dashes restart on every ring
            s.new_sub_path();
            s.arc(center, radius, 0.0, TAU);
        }
        s.stroke();
        Ok(())
    }

    fn name(&self) -> &str {
        "Bullseye"
    }
}

/// Cartesian axes with bullseye rings on top
#[derive(Clone, Debug, PartialEq)]
pub struct PolarCoordinates {
    cartesian: CartesianCoordinates,
    bullseye: Bullseye,
}

impl PolarCoordinates {
    pub fn new(spacing: f64, overflow: bool, stroke: StrokeStyle) -> Result<Self> {
        Ok(Self {
            cartesian: CartesianCoordinates::new(stroke.clone())?,
            bullseye: Bullseye::new(spacing, overflow, stroke)?,
        })
    }

    pub fn cartesian(&self) -> &CartesianCoordinates {
        &self.cartesian
    }

    pub fn bullseye(&self) -> &Bullseye {
        &self.bullseye
    }
}

impl Stamp for PolarCoordinates {
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()> {
        let rect = rect.validate()?;
        // Fail before the axes are drawn
        self.bullseye.ensure_ring_count(rect)?;
        self.cartesian.draw(surface, rect)?;
        self.bullseye.draw(surface, rect)
    }

    fn name(&self) -> &str {
        "PolarCoordinates"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::surface::{RecordingSurface, SurfaceCall};

    #[test]
    fn test_cartesian_axes() {
        let axes = CartesianCoordinates::new(StrokeStyle::default()).unwrap();
        let mut surface = RecordingSurface::new();
        axes.draw(&mut surface, Rect::new(10.0, 20.0, 100.0, 50.0)).unwrap();

        assert_eq!(
            surface.stroked_subpaths(),
            vec![
                vec![Point::new(10.0, 45.0), Point::new(110.0, 45.0)],
                vec![Point::new(60.0, 20.0), Point::new(60.0, 70.0)],
            ]
        );
    }

    #[test]
    fn test_bullseye_inscribed() {
        let bullseye = Bullseye::new(30.0, false, StrokeStyle::default()).unwrap();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(bullseye.max_radius(rect), 50.0);
        assert_eq!(bullseye.radii(rect), vec![30.0]);
    }

    #[test]
    fn test_bullseye_overflow() {
        let bullseye = Bullseye::new(30.0, true, StrokeStyle::default()).unwrap();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!((bullseye.max_radius(rect) - 70.7107).abs() < 1e-4);
        assert_eq!(bullseye.radii(rect), vec![30.0, 60.0]);
    }

    #[test]
    fn test_bullseye_ring_on_bound_included() {
        let bullseye = Bullseye::new(25.0, false, StrokeStyle::default()).unwrap();
        assert_eq!(bullseye.radii(Rect::new(0.0, 0.0, 100.0, 100.0)), vec![25.0, 50.0]);
    }

    #[test]
    fn test_bullseye_subpaths() {
        let bullseye = Bullseye::new(10.0, false, StrokeStyle::default().with_dash([2.0, 2.0])).unwrap();
        let mut surface = RecordingSurface::new();
        bullseye.draw(&mut surface, Rect::new(0.0, 0.0, 40.0, 60.0)).unwrap();

        let arcs = surface.stroked_arcs();
        assert_eq!(arcs.len(), 2);
        assert!(arcs.iter().all(|a| a.center == Point::new(20.0, 30.0)));
        assert!(arcs.iter().all(|a| a.start_angle == 0.0 && a.end_angle == TAU));

        let sub_paths = surface.calls().iter().filter(|c| **c == SurfaceCall::NewSubPath).count();
        assert_eq!(sub_paths, 2);
    }

    #[test]
    fn test_polar_composes() {
        let style = StrokeStyle::new(Color::BLACK, 2.0);
        let polar = PolarCoordinates::new(30.0, true, style).unwrap();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut surface = RecordingSurface::new();
        polar.draw(&mut surface, rect).unwrap();

        let mut expected = RecordingSurface::new();
        polar.cartesian().draw(&mut expected, rect).unwrap();
        polar.bullseye().draw(&mut expected, rect).unwrap();

        assert_eq!(surface.calls(), expected.calls());
        assert_eq!(surface.stroked_arcs().len(), 2);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_polar_invalid_spacing() {
        let err = PolarCoordinates::new(0.0, false, StrokeStyle::default()).unwrap_err();
        assert_eq!(err.parameter(), "spacing");
    }
}
