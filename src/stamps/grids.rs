//! Tiling overlays - rectangular grid, ruled lines, hexagonal grid
//!
//! All three stroke their full line set with a single `stroke` call.

use std::f64::consts::PI;

use super::{ensure_count, step_count, steps};
use super::traits::Stamp;
use crate::error::{ensure_positive, Result};
use crate::geometry::{Point, Rect};
use crate::style::StrokeStyle;
use crate::surface::{polyline, Surface, SurfaceGuard};

/// A line segment `(from, to)`
pub type Segment = (Point, Point);

fn stroke_segments(surface: &mut dyn Surface, style: &StrokeStyle, segments: &[Segment]) {
    let mut s = SurfaceGuard::with_stroke(surface, style);
    for &(from, to) in segments {
        s.move_to(from);
        s.line_to(to);
    }
    s.stroke();
}

/// Horizontal lines spaced down a rectangle, starting at its top edge
fn horizontal_lines(rect: Rect, spacing: f64) -> Vec<Segment> {
    steps(rect.top(), rect.bottom(), spacing)
        .map(|y| (Point::new(rect.left(), y), Point::new(rect.right(), y)))
        .collect()
}

/// Square grid of vertical and horizontal lines
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    stroke: StrokeStyle,
    spacing: f64,
}

impl Grid {
    pub fn new(spacing: f64, stroke: StrokeStyle) -> Result<Self> {
        stroke.validate()?;
        ensure_positive("spacing", spacing)?;
        Ok(Self { stroke, spacing })
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Vertical lines, left to right, starting at the left edge
    pub fn vertical_lines(&self, rect: Rect) -> Vec<Segment> {
        steps(rect.left(), rect.right(), self.spacing)
            .map(|x| (Point::new(x, rect.top()), Point::new(x, rect.bottom())))
            .collect()
    }

    /// Horizontal lines, top to bottom, starting at the top edge
    pub fn horizontal_lines(&self, rect: Rect) -> Vec<Segment> {
        horizontal_lines(rect, self.spacing)
    }
}

impl Stamp for Grid {
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()> {
        let rect = rect.validate()?;
        ensure_count(
            "spacing",
            step_count(rect.width, self.spacing) + step_count(rect.height, self.spacing),
        )?;
        let mut segments = self.vertical_lines(rect);
        segments.extend(self.horizontal_lines(rect));
        log::debug!("Grid: {} lines in {:?}", segments.len(), rect);
        stroke_segments(surface, &self.stroke, &segments);
        Ok(())
    }

    fn name(&self) -> &str {
        "Grid"
    }
}

/// Horizontal ruled lines, like notebook paper
#[derive(Clone, Debug, PartialEq)]
pub struct RuledLines {
    stroke: StrokeStyle,
    spacing: f64,
}

impl RuledLines {
    pub fn new(spacing: f64, stroke: StrokeStyle) -> Result<Self> {
        stroke.validate()?;
        ensure_positive("spacing", spacing)?;
        Ok(Self { stroke, spacing })
    }

    pub fn lines(&self, rect: Rect) -> Vec<Segment> {
        horizontal_lines(rect, self.spacing)
    }
}

impl Stamp for RuledLines {
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()> {
        let rect = rect.validate()?;
        ensure_count("spacing", step_count(rect.height, self.spacing))?;
        let segments = self.lines(rect);
        log::debug!("Lines: {} rules in {:?}", segments.len(), rect);
        stroke_segments(surface, &self.stroke, &segments);
        Ok(())
    }

    fn name(&self) -> &str {
        "Lines"
    }
}

/// One tile of a hexagonal grid
#[derive(Clone, Debug, PartialEq)]
pub struct HexTile {
    pub origin: Point,
    /// Outline vertices, drawn as an open polyline (last is not joined to first)
    pub vertices: [Point; 6],
    /// Horizontal link from the right-hand vertex towards the next tile
    pub stub: Segment,
}

/// Hexagonal grid
///
/// Hexagons have circumradius `radius / 2` and sit on a grid spaced
/// `radius + line_length` apart horizontally and `radius * sin(120°)`
/// vertically. The stub on each tile fills the horizontal gap to its
/// neighbour, which is what makes the tiles read as one continuous mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct HexagonalGrid {
    stroke: StrokeStyle,
    radius: f64,
}

impl HexagonalGrid {
    /// Vertex angles, starting at 300° and going round through 0°
    const ANGLES: [f64; 6] = [
        5.0 * PI / 3.0,
        0.0,
        PI / 3.0,
        2.0 * PI / 3.0,
        PI,
        4.0 * PI / 3.0,
    ];

    pub fn new(radius: f64, stroke: StrokeStyle) -> Result<Self> {
        stroke.validate()?;
        ensure_positive("radius", radius)?;
        Ok(Self { stroke, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Length of the horizontal stub joining neighbouring tiles
    pub fn line_length(&self) -> f64 {
        let half = self.radius / 2.0;
        (PI / 3.0).cos() * half - (2.0 * PI / 3.0).cos() * half
    }

    pub fn horizontal_spacing(&self) -> f64 {
        self.radius + self.line_length()
    }

    pub fn vertical_spacing(&self) -> f64 {
        (2.0 * PI / 3.0).sin() * self.radius
    }

    fn tile(&self, origin: Point) -> HexTile {
        let half = self.radius / 2.0;
        let vertices = Self::ANGLES.map(|a| origin.polar_offset(a, half));
        let link_from = vertices[1];
        let link_to = Point::new(link_from.x + self.line_length(), link_from.y);
        HexTile {
            origin,
            vertices,
            stub: (link_from, link_to),
        }
    }

    /// Tiles covering `rect`, row by row
    ///
    /// Origins start at the top-left corner and run one spacing past the
    /// right and bottom edges so partial tiles reach the border.
    pub fn tiles(&self, rect: Rect) -> Vec<HexTile> {
        let h = self.horizontal_spacing();
        let v = self.vertical_spacing();
        steps(rect.top(), rect.bottom() + v, v)
            .flat_map(|y| {
                steps(rect.left(), rect.right() + h, h).map(move |x| Point::new(x, y))
            })
            .map(|origin| self.tile(origin))
            .collect()
    }
}

impl Stamp for HexagonalGrid {
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()> {
        let rect = rect.validate()?;
        let (h, v) = (self.horizontal_spacing(), self.vertical_spacing());
        ensure_count(
            "radius",
            step_count(rect.width + h, h) * step_count(rect.height + v, v),
        )?;
        let tiles = self.tiles(rect);
        log::debug!("HexagonalGrid: {} tiles in {:?}", tiles.len(), rect);

        let mut s = SurfaceGuard::with_stroke(surface, &self.stroke);
        for tile in &tiles {
            polyline(&mut *s, &tile.vertices);
            s.move_to(tile.stub.0);
            s.line_to(tile.stub.1);
        }
        s.stroke();
        Ok(())
    }

    fn name(&self) -> &str {
        "HexagonalGrid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::surface::{RecordingSurface, SurfaceCall};

    fn xs(segments: &[Segment]) -> Vec<f64> {
        segments.iter().map(|(a, _)| a.x).collect()
    }

    fn ys(segments: &[Segment]) -> Vec<f64> {
        segments.iter().map(|(a, _)| a.y).collect()
    }

    #[test]
    fn test_grid_lines() {
        let grid = Grid::new(20.0, StrokeStyle::default()).unwrap();
        let rect = Rect::new(0.0, 0.0, 45.0, 25.0);

        assert_eq!(xs(&grid.vertical_lines(rect)), vec![0.0, 20.0, 40.0]);
        assert_eq!(ys(&grid.horizontal_lines(rect)), vec![0.0, 20.0]);

        let mut surface = RecordingSurface::new();
        grid.draw(&mut surface, rect).unwrap();
        let subpaths = surface.stroked_subpaths();
        assert_eq!(subpaths.len(), 5);
        assert_eq!(subpaths[0], vec![Point::new(0.0, 0.0), Point::new(0.0, 25.0)]);
        assert_eq!(subpaths[4], vec![Point::new(0.0, 20.0), Point::new(45.0, 20.0)]);
        assert_eq!(surface.strokes().count(), 1);
    }

    #[test]
    fn test_grid_offset_rect() {
        // Horizontal lines are bounded by the rect's own bottom edge
        let grid = Grid::new(10.0, StrokeStyle::default()).unwrap();
        let rect = Rect::new(100.0, 5.0, 15.0, 12.0);
        assert_eq!(xs(&grid.vertical_lines(rect)), vec![100.0, 110.0]);
        assert_eq!(ys(&grid.horizontal_lines(rect)), vec![5.0, 15.0]);
    }

    #[test]
    fn test_grid_applies_style() {
        let style = StrokeStyle::new(Color::BLACK, 0.5).with_dash([3.0, 1.0]);
        let grid = Grid::new(10.0, style).unwrap();
        let mut surface = RecordingSurface::new();
        grid.draw(&mut surface, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        let op = surface.strokes().next().unwrap();
        assert_eq!(op.state.line_width, 0.5);
        assert_eq!(op.state.dash, vec![3.0, 1.0]);
        assert_eq!(surface.depth(), 0);
        assert!(surface.state().dash.is_empty());
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let mut surface = RecordingSurface::new();
        let result = Grid::new(0.0, StrokeStyle::default())
            .and_then(|grid| grid.draw(&mut surface, Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(result.unwrap_err().parameter(), "spacing");
        assert!(surface.calls().is_empty());

        assert!(RuledLines::new(-5.0, StrokeStyle::default()).is_err());
    }

    #[test]
    fn test_invalid_rect_rejected_before_drawing() {
        let grid = Grid::new(10.0, StrokeStyle::default()).unwrap();
        let mut surface = RecordingSurface::new();
        assert!(grid.draw(&mut surface, Rect::new(0.0, 0.0, f64::INFINITY, 10.0)).is_err());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_ruled_lines() {
        let lines = RuledLines::new(20.0, StrokeStyle::default()).unwrap();
        let rect = Rect::new(0.0, 0.0, 45.0, 25.0);
        assert_eq!(ys(&lines.lines(rect)), vec![0.0, 20.0]);

        let mut surface = RecordingSurface::new();
        lines.draw(&mut surface, rect).unwrap();
        for line in surface.stroked_subpaths() {
            assert_eq!(line[0].y, line[1].y);
        }
    }

    #[test]
    fn test_empty_rect_draws_nothing_but_stays_balanced() {
        let lines = RuledLines::new(20.0, StrokeStyle::default()).unwrap();
        let mut surface = RecordingSurface::new();
        lines.draw(&mut surface, Rect::new(0.0, 0.0, 10.0, 0.0)).unwrap();
        assert!(surface.stroked_subpaths().is_empty());
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_hex_constants() {
        let hex = HexagonalGrid::new(100.0, StrokeStyle::default()).unwrap();
        assert!((hex.line_length() - 50.0).abs() < 1e-9);
        assert!((hex.horizontal_spacing() - 150.0).abs() < 1e-9);
        assert!((hex.vertical_spacing() - 86.6025).abs() < 1e-4);
    }

    #[test]
    fn test_hex_tiles() {
        let hex = HexagonalGrid::new(100.0, StrokeStyle::default()).unwrap();
        let tiles = hex.tiles(Rect::new(0.0, 0.0, 100.0, 100.0));
        // 2 columns (0, 150) x 3 rows (0, 86.6, 173.2)
        assert_eq!(tiles.len(), 6);

        let first = &tiles[0];
        assert_eq!(first.origin, Point::new(0.0, 0.0));
        assert!((first.vertices[1].x - 50.0).abs() < 1e-9);
        assert!(first.vertices[1].y.abs() < 1e-9);
        assert!((first.vertices[0].x - 25.0).abs() < 1e-9);
        assert!((first.vertices[0].y + 43.3013).abs() < 1e-4);
        assert!((first.stub.1.x - 100.0).abs() < 1e-9);
        assert_eq!(first.stub.0, first.vertices[1]);
    }

    #[test]
    fn test_hex_draw_is_open_polyline() {
        let hex = HexagonalGrid::new(40.0, StrokeStyle::default()).unwrap();
        let mut surface = RecordingSurface::new();
        hex.draw(&mut surface, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        let tiles = hex.tiles(Rect::new(0.0, 0.0, 10.0, 10.0));
        let subpaths = surface.stroked_subpaths();
        assert_eq!(subpaths.len(), tiles.len() * 2);
        assert_eq!(subpaths[0].len(), 6);
        assert_ne!(subpaths[0].first(), subpaths[0].last());
        assert_eq!(subpaths[1].len(), 2);
        assert!(!surface.calls().contains(&SurfaceCall::ClosePath));
    }

    #[test]
    fn test_hex_negative_radius_rejected() {
        let err = HexagonalGrid::new(-1.0, StrokeStyle::default()).unwrap_err();
        assert_eq!(err.parameter(), "radius");
    }
}
