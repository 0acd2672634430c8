//! Dotted rows - rows of dots made from a dashed stroke
//!
//! Each row is one horizontal line stroked with width `dot_size` and dash
//! pattern `[dot_size, spacing - dot_size]`, so every "on" dash is a square
//! dot and dots repeat every `spacing` along the row.

use super::{ensure_count, step_count, steps};
use super::traits::Stamp;
use crate::error::{ensure_positive, Result, StampError};
use crate::geometry::{Color, Point, Rect};
use crate::surface::{Surface, SurfaceGuard};

#[derive(Clone, Debug, PartialEq)]
pub struct DottedLine {
    color: Color,
    dot_size: f64,
    spacing: f64,
}

impl DottedLine {
    /// Create a dotted-row stamp
    ///
    /// # Errors
    /// `InvalidConfiguration` unless `0 < dot_size < spacing`, since the dash
    /// gap `spacing - dot_size` must be positive.
    pub fn new(dot_size: f64, spacing: f64, color: Color) -> Result<Self> {
        color.validate()?;
        ensure_positive("dot_size", dot_size)?;
        ensure_positive("spacing", spacing)?;
        if dot_size >= spacing {
            return Err(StampError::invalid(
                "dot_size",
                format!("must be smaller than spacing ({spacing}), got {dot_size}"),
            ));
        }
        Ok(Self {
            color,
            dot_size,
            spacing,
        })
    }

    pub fn dash_pattern(&self) -> [f64; 2] {
        [self.dot_size, self.spacing - self.dot_size]
    }

    /// Row centerlines, top to bottom
    pub fn rows(&self, rect: Rect) -> Vec<f64> {
        steps(rect.top() + self.dot_size / 2.0, rect.bottom(), self.spacing).collect()
    }
}

impl Stamp for DottedLine {
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()> {
        let rect = rect.validate()?;
        ensure_count("spacing", step_count(rect.height, self.spacing))?;
        let rows = self.rows(rect);

        let mut s = SurfaceGuard::new(surface);
        s.set_source_rgba(self.color);
        s.set_dash(&self.dash_pattern());
        s.set_line_width(self.dot_size);
        for y in rows {
            s.move_to(Point::new(rect.left(), y));
            s.line_to(Point::new(rect.right(), y));
        }
        s.stroke();
        Ok(())
    }

    fn name(&self) -> &str {
        "Dots"
    }
}
