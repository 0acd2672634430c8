//! stamps - rubber-stamp drawing primitives for 2D surfaces
//!
//! This crate provides reusable, parameterized overlays and connectors that
//! draw themselves onto any [`Surface`](surface::Surface):
//!
//! - Connectors: straight lines and one-bend elbows with optional arrowheads
//! - Tilings: square grids, ruled lines, hexagonal grids, dotted rows
//! - Axes: Cartesian cross-hairs, bullseye rings, polar coordinates
//!
//! ## Usage
//!
//! ```rust
//! use stamps::{Grid, Rect, RecordingSurface, Stamp, StrokeStyle};
//!
//! let grid = Grid::new(20.0, StrokeStyle::default())?;
//! let mut surface = RecordingSurface::new();
//! grid.draw(&mut surface, Rect::new(0.0, 0.0, 45.0, 25.0))?;
//! assert_eq!(surface.stroked_subpaths().len(), 5);
//! # Ok::<(), stamps::StampError>(())
//! ```
//!
//! Stamps are immutable and hold no reference to a surface, so one value can
//! be drawn onto many surfaces and rectangles. Invalid configuration (zero
//! spacing, negative radius, out-of-range color, ...) is rejected when the
//! stamp is built, before anything is drawn.

pub mod error;
pub mod geometry;
pub mod scene;
pub mod settings;
pub mod stamps;
pub mod style;
pub mod surface;

pub use error::{Result, StampError};
pub use geometry::{Color, Point, Rect};
pub use scene::{Scene, SceneConfig, SceneError};
pub use settings::Settings;
pub use stamps::{
    Bullseye, CartesianCoordinates, Connector, ConnectorStyle, DottedLine, ElbowConnector, Grid,
    HexagonalGrid, LineConnector, Orientation, PolarCoordinates, RuledLines, Stamp, MAX_PRIMITIVES,
};
pub use style::{ArrowStyle, StrokeStyle};
pub use surface::{RecordingSurface, Surface, SurfaceGuard, SvgSurface};
