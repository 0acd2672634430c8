//! Arrowhead geometry
//!
//! An arrowhead is two wings hanging off an anchor point:
//!
//! ```text
//! wing_a = anchor + radius * (cos(angle + spread), sin(angle + spread))
//! wing_b = anchor + radius * (cos(angle - spread), sin(angle - spread))
//! ```

use crate::geometry::Point;
use crate::style::ArrowStyle;
use crate::surface::{Surface, SurfaceGuard};

/// Endpoints of the two wings of an arrowhead at `anchor`
pub fn arrow_wings(anchor: Point, angle: f64, style: &ArrowStyle) -> (Point, Point) {
    (
        anchor.polar_offset(angle + style.spread, style.radius),
        anchor.polar_offset(angle - style.spread, style.radius),
    )
}

/// Draw an arrowhead at `anchor` with the surface's current color and width
///
/// Filled arrows are a closed triangle filled then outlined; open arrows are
/// two independent wing strokes with no closing segment.
pub fn draw_arrow(surface: &mut dyn Surface, anchor: Point, angle: f64, style: &ArrowStyle) {
    let (wing_a, wing_b) = arrow_wings(anchor, angle, style);
    let mut s = SurfaceGuard::new(surface);

    if style.filled {
        s.move_to(wing_a);
        s.line_to(anchor);
        s.line_to(wing_b);
        s.close_path();
        s.fill_preserve();
    } else {
        s.move_to(anchor);
        s.line_to(wing_a);
        s.move_to(anchor);
        s.line_to(wing_b);
    }
    s.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintKind, RecordingSurface};
    use std::f64::consts::PI;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_wings() {
        let style = ArrowStyle::new(PI / 2.0, 10.0);
        let (a, b) = arrow_wings(Point::new(0.0, 0.0), 0.0, &style);
        assert!(close(a, Point::new(0.0, 10.0)));
        assert!(close(b, Point::new(0.0, -10.0)));
    }

    #[test]
    fn test_open_arrow() {
        let style = ArrowStyle::new(PI / 4.0, 5.0);
        let mut surface = RecordingSurface::new();
        draw_arrow(&mut surface, Point::new(10.0, 10.0), PI, &style);

        assert_eq!(surface.fills().count(), 0);
        let subpaths = surface.stroked_subpaths();
        assert_eq!(subpaths.len(), 2);
        for wing in &subpaths {
            assert_eq!(wing.len(), 2);
            assert_eq!(wing[0], Point::new(10.0, 10.0));
        }
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_filled_arrow() {
        let style = ArrowStyle::new(PI / 6.0, 8.0).filled();
        let mut surface = RecordingSurface::new();
        draw_arrow(&mut surface, Point::new(0.0, 0.0), 0.0, &style);

        let ops = surface.paint_ops();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].kind, PaintKind::Fill);
        assert_eq!(ops[1].kind, PaintKind::Stroke);
        assert!(ops[0].closed);
        assert_eq!(ops[0].subpaths[0].len(), 3);
        assert_eq!(ops[0].subpaths[0][1], Point::new(0.0, 0.0));
    }
}
