//! Surface trait definition
//!
//! The `Surface` trait is the seam between the stamps and whatever actually
//! puts pixels somewhere. It mirrors the path model of cairo-like 2D APIs:
//!
//! - `move_to` starts a new subpath, `line_to` and `arc` extend it
//! - `stroke` paints the current path and clears it
//! - `fill_preserve` paints the interior and keeps the path for a stroke
//! - `save`/`restore` push and pop the color, line width and dash state
//!
//! Stamps only ever *set* state; they never read it back.

use std::ops::{Deref, DerefMut};

use crate::geometry::{Color, Point};
use crate::style::StrokeStyle;

/// A 2D drawing target
pub trait Surface {
    /// Push the current graphics state (color, line width, dash)
    fn save(&mut self);

    /// Pop the graphics state pushed by the matching `save`
    fn restore(&mut self);

    fn set_source_rgba(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    /// Set the dash pattern; an empty slice means solid lines
    fn set_dash(&mut self, pattern: &[f64]);

    /// Discard the current path
    fn new_path(&mut self);

    /// Start a new subpath without a current point
    ///
    /// A following `arc` will not be joined to the previous subpath.
    fn new_sub_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Circular arc from `start_angle` to `end_angle`, increasing angle direction
    ///
    /// If there is a current point, a line joins it to the start of the arc.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    fn close_path(&mut self);

    /// Stroke the current path with the current state and clear it
    fn stroke(&mut self);

    /// Fill the current path with the current color, keeping the path
    fn fill_preserve(&mut self);
}

/// Scoped save/restore around a surface
///
/// `save` is issued on creation and `restore` when the guard is dropped, so
/// every exit path (including `?` early returns) leaves the caller's state
/// untouched.
pub struct SurfaceGuard<'a> {
    surface: &'a mut dyn Surface,
}

impl<'a> SurfaceGuard<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        surface.save();
        Self { surface }
    }

    /// Save the state and apply a stroke style in one step
    pub fn with_stroke(surface: &'a mut dyn Surface, style: &StrokeStyle) -> Self {
        let mut guard = Self::new(surface);
        guard.set_source_rgba(style.color);
        guard.set_line_width(style.line_width);
        guard.set_dash(&style.dash);
        guard
    }
}

impl<'a> Deref for SurfaceGuard<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'a> DerefMut for SurfaceGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for SurfaceGuard<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Stroke a polyline as its own subpath
pub(crate) fn polyline(surface: &mut dyn Surface, points: &[Point]) {
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        surface.move_to(first);
        for &p in iter {
            surface.line_to(p);
        }
    }
}
