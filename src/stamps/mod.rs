//! Stamps module - the drawing primitives
//!
//! This module provides:
//! - `Stamp` trait for overlays drawn into a rectangle
//! - `Connector` trait for lines drawn between two points
//! - Connectors: LineConnector, ElbowConnector (with optional arrowheads)
//! - Tilings: Grid, RuledLines, HexagonalGrid, DottedLine
//! - Axes: CartesianCoordinates, Bullseye, PolarCoordinates
//!
//! Every stamp validates its configuration in its constructor and scopes its
//! surface state changes, so stamps can be drawn in any order onto a shared
//! surface without affecting one another.

mod arrow;
mod axes;
mod connectors;
mod dots;
mod grids;
mod traits;

pub use arrow::{arrow_wings, draw_arrow};
pub use axes::{Bullseye, CartesianCoordinates, PolarCoordinates};
pub use connectors::{ConnectorStyle, ElbowConnector, LineConnector, Orientation};
pub use dots::DottedLine;
pub use grids::{Grid, HexTile, HexagonalGrid, RuledLines, Segment};
pub use traits::{BoxedConnector, BoxedStamp, Connector, Stamp};

use crate::error::{Result, StampError};

/// Most lines, rings or tiles a single `draw` will emit
///
/// A spacing that is tiny next to the rectangle (say `1e-300` across a
/// page) would otherwise ask for an unbounded number of primitives. `draw`
/// checks the count against this cap before touching the surface.
pub const MAX_PRIMITIVES: usize = 1_000_000;

/// Upper bound on how many `spacing` steps fit into `span`
pub(crate) fn step_count(span: f64, spacing: f64) -> f64 {
    (span / spacing).ceil().max(0.0)
}

/// Reject a primitive count above [`MAX_PRIMITIVES`]
pub(crate) fn ensure_count(parameter: &'static str, count: f64) -> Result<usize> {
    // NaN fails the comparison too
    if count <= MAX_PRIMITIVES as f64 {
        Ok(count as usize)
    } else {
        Err(StampError::invalid(
            parameter,
            format!("would draw {count} primitives, more than the limit of {MAX_PRIMITIVES}"),
        ))
    }
}

/// `start, start + spacing, start + 2·spacing, …` while `< end`
///
/// Positions are computed from the step index rather than accumulated, so
/// a large `start` cannot swallow a small `spacing`. Requires `spacing > 0`.
/// Yields at most [`MAX_PRIMITIVES`] positions.
pub(crate) fn steps(start: f64, end: f64, spacing: f64) -> impl Iterator<Item = f64> {
    debug_assert!(spacing > 0.0);
    (0u64..)
        .map(move |i| start + i as f64 * spacing)
        .take_while(move |&v| v < end)
        .take(MAX_PRIMITIVES)
}
