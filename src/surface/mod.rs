//! Surface module - drawing targets for stamps
//!
//! This module provides:
//! - `Surface` trait, the cairo-like path/stroke API stamps draw through
//! - `SurfaceGuard` for scoped save/restore of graphics state
//! - `SvgSurface`, which writes an SVG document
//! - `RecordingSurface`, which records calls (handy as a test spy)

mod recording;
mod svg;
mod traits;

pub use recording::{ArcSegment, GraphicsState, PaintKind, PaintOp, RecordingSurface, SurfaceCall};
pub use svg::SvgSurface;
pub use traits::{Surface, SurfaceGuard};

pub(crate) use traits::polyline;
