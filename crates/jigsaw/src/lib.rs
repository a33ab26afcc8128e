//! Procedural jigsaw pieces: generation and static rendering.
//!
//! Layers, leaf first:
//! - `geometry`: distance, rotation and axis snapping on `nalgebra` values.
//! - `path` + `edge`: closed vector paths and the nubbed edge builder.
//! - `piece`: immutable four-edge pieces, explicit or derived from neighbours.
//! - `grid`: `rows × cols` tables whose shared edges always interlock.
//! - `render` + `svg`: lay a grid out and stroke it onto a surface.
//!
//! Interactive play (picking up, rotating, snapping pieces) is not handled here.

pub mod edge;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod piece;
pub mod render;
pub mod svg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ConfigError, GridError};
pub use nalgebra::{Point2, Vector2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::edge::{add_edge, add_edge_with, NubProfile};
    pub use crate::grid::{EdgeMap, Grid, GridDims, ReplayToken};
    pub use crate::path::{Path, PathEl};
    pub use crate::piece::{NubDirection, PuzzlePiece, Side};
    pub use crate::render::{render_grid, PuzzleView, RecordingSurface, Rect, RenderCfg, Surface};
    pub use crate::svg::{SvgStyle, SvgSurface};
    pub use nalgebra::{Point2, Vector2};
}
