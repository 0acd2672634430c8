//! Connectors - straight lines and one-bend elbows between two points
//!
//! Both connectors stroke their whole path in one go, then draw any
//! arrowheads on top in a second pass.

use serde::{Deserialize, Serialize};

use super::arrow::draw_arrow;
use super::traits::Connector;
use crate::error::{ensure_finite, Result};
use crate::geometry::Point;
use crate::style::{ArrowStyle, StrokeStyle};
use crate::surface::{polyline, Surface, SurfaceGuard};

/// Which axis an elbow connector travels along first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Stroke plus optional arrowheads, shared by all connectors
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorStyle {
    pub stroke: StrokeStyle,
    pub start_arrow: Option<ArrowStyle>,
    pub end_arrow: Option<ArrowStyle>,
}

impl ConnectorStyle {
    pub fn new(stroke: StrokeStyle) -> Self {
        Self {
            stroke,
            start_arrow: None,
            end_arrow: None,
        }
    }

    pub fn with_start_arrow(mut self, arrow: ArrowStyle) -> Self {
        self.start_arrow = Some(arrow);
        self
    }

    pub fn with_end_arrow(mut self, arrow: ArrowStyle) -> Self {
        self.end_arrow = Some(arrow);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.stroke.validate()?;
        for arrow in self.start_arrow.iter().chain(self.end_arrow.iter()) {
            arrow.validate()?;
        }
        Ok(())
    }
}

/// Arrow direction at each endpoint, `(at_start, at_end)`
type ArrowAngles = (f64, f64);

/// Angles for a straight segment: each points away from the other endpoint
fn straight_angles(start: Point, end: Point) -> ArrowAngles {
    (start.angle_from(end), end.angle_from(start))
}

/// Stroke `path` in one go, then draw the configured arrowheads
fn draw_path(
    surface: &mut dyn Surface,
    style: &ConnectorStyle,
    path: &[Point],
    (start_angle, end_angle): ArrowAngles,
) {
    let mut s = SurfaceGuard::with_stroke(surface, &style.stroke);
    polyline(&mut *s, path);
    s.stroke();

    if let (Some(arrow), Some(&start)) = (&style.start_arrow, path.first()) {
        draw_arrow(&mut *s, start, start_angle, arrow);
    }
    if let (Some(arrow), Some(&end)) = (&style.end_arrow, path.last()) {
        draw_arrow(&mut *s, end, end_angle, arrow);
    }
}

fn validate_endpoints(start: Point, end: Point) -> Result<()> {
    start.validate("start")?;
    end.validate("end")?;
    Ok(())
}

/// A straight line between two points
#[derive(Clone, Debug, PartialEq)]
pub struct LineConnector {
    style: ConnectorStyle,
}

impl LineConnector {
    pub fn new(style: ConnectorStyle) -> Result<Self> {
        style.validate()?;
        Ok(Self { style })
    }

    pub fn style(&self) -> &ConnectorStyle {
        &self.style
    }

    /// Vertices of the stroked path
    pub fn route(&self, start: Point, end: Point) -> Vec<Point> {
        vec![start, end]
    }

    pub fn arrow_angles(&self, start: Point, end: Point) -> (f64, f64) {
        straight_angles(start, end)
    }
}

impl Connector for LineConnector {
    fn draw(&self, surface: &mut dyn Surface, start: Point, end: Point) -> Result<()> {
        validate_endpoints(start, end)?;
        draw_path(
            surface,
            &self.style,
            &self.route(start, end),
            self.arrow_angles(start, end),
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Line"
    }
}

/// An orthogonal connector with a single bend leg
///
/// ```text
/// Horizontal:  start ──┐           Vertical:  start
///                      │                        │
///                      └── end                  └────┐
///                                                    end
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ElbowConnector {
    style: ConnectorStyle,
    orientation: Orientation,
    elbow_fraction: f64,
}

impl ElbowConnector {
    /// Bend halfway along the primary axis unless told otherwise
    pub const DEFAULT_ELBOW_FRACTION: f64 = 0.5;

    /// Create an elbow connector
    ///
    /// # Arguments
    /// * `style` - Stroke and arrowheads
    /// * `orientation` - Axis travelled first
    /// * `elbow_fraction` - Where the bend sits along the primary-axis span;
    ///   values outside `[0, 1]` are accepted and put the bend outside the
    ///   start/end bounding box
    pub fn new(style: ConnectorStyle, orientation: Orientation, elbow_fraction: f64) -> Result<Self> {
        style.validate()?;
        ensure_finite("elbow_fraction", elbow_fraction)?;
        if !(0.0..=1.0).contains(&elbow_fraction) {
            log::warn!(
                "elbow_fraction {} is outside [0, 1]; the bend will fall outside the endpoints",
                elbow_fraction
            );
        }
        Ok(Self {
            style,
            orientation,
            elbow_fraction,
        })
    }

    pub fn style(&self) -> &ConnectorStyle {
        &self.style
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn elbow_fraction(&self) -> f64 {
        self.elbow_fraction
    }

    fn is_straight(start: Point, end: Point) -> bool {
        start.x == end.x || start.y == end.y
    }

    /// Vertices of the stroked path
    ///
    /// Endpoints that already share an axis give a plain two-point segment.
    pub fn route(&self, start: Point, end: Point) -> Vec<Point> {
        if Self::is_straight(start, end) {
            return vec![start, end];
        }
        match self.orientation {
            Orientation::Horizontal => {
                let bend_x = start.x + (end.x - start.x) * self.elbow_fraction;
                vec![start, Point::new(bend_x, start.y), Point::new(bend_x, end.y), end]
            }
            Orientation::Vertical => {
                let bend_y = start.y + (end.y - start.y) * self.elbow_fraction;
                vec![start, Point::new(start.x, bend_y), Point::new(end.x, bend_y), end]
            }
        }
    }

    /// Arrow directions at `(start, end)`
    ///
    /// Bent routes only use the primary axis delta, so arrowheads always
    /// line up with that axis even when the leg touching the endpoint is
    /// the other one.
    pub fn arrow_angles(&self, start: Point, end: Point) -> (f64, f64) {
        if Self::is_straight(start, end) {
            return straight_angles(start, end);
        }
        match self.orientation {
            Orientation::Horizontal => (
                0.0_f64.atan2(start.x - end.x),
                0.0_f64.atan2(end.x - start.x),
            ),
            Orientation::Vertical => (
                (start.y - end.y).atan2(0.0),
                (end.y - start.y).atan2(0.0),
            ),
        }
    }
}

impl Connector for ElbowConnector {
    fn draw(&self, surface: &mut dyn Surface, start: Point, end: Point) -> Result<()> {
        validate_endpoints(start, end)?;
        let path = self.route(start, end);
        log::debug!("Elbow {:?}: {} vertices", self.orientation, path.len());
        draw_path(surface, &self.style, &path, self.arrow_angles(start, end));
        Ok(())
    }

    fn name(&self) -> &str {
        "Elbow"
    }
}
