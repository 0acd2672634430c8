//! Stamp and Connector traits
//!
//! A stamp is an immutable configuration that knows how to draw itself.
//! There are two shapes of "where": rectangle-bound overlays (grids, axes,
//! rings, dots) take a target `Rect`, connectors take two endpoints. Neither
//! holds a reference to the surface, so one value can be drawn onto any
//! number of surfaces.

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::surface::Surface;

/// An overlay drawn inside a rectangle
pub trait Stamp {
    /// Draw into `rect` on `surface`
    ///
    /// Fails with `InvalidConfiguration` before touching the surface if the
    /// rectangle is not finite or has a negative size. Any state the stamp
    /// changes is restored before returning.
    fn draw(&self, surface: &mut dyn Surface, rect: Rect) -> Result<()>;

    /// Display name (for logs)
    fn name(&self) -> &str;
}

/// A line joining two points
pub trait Connector {
    /// Draw from `start` to `end` on `surface`
    ///
    /// Coincident endpoints are valid and yield a zero-length stroke.
    fn draw(&self, surface: &mut dyn Surface, start: Point, end: Point) -> Result<()>;

    /// Display name (for logs)
    fn name(&self) -> &str;
}

/// A boxed stamp for dynamic dispatch
pub type BoxedStamp = Box<dyn Stamp>;

/// A boxed connector for dynamic dispatch
pub type BoxedConnector = Box<dyn Connector>;
