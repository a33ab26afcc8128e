//! Renderer: lay a grid out on a drawing surface.
//!
//! The host owns the surface and calls [`PuzzleView::draw`] once per frame;
//! everything runs to completion inside that call.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::{Grid, GridDims, ReplayToken};
use crate::path::Path;

/// A 2D drawing backend that can stroke (and optionally fill) closed paths.
pub trait Surface {
    fn stroke_path(&mut self, path: &Path);

    fn fill_path(&mut self, _path: &Path) {}
}

/// Surface that keeps every stroked path; handy for hosts that batch draws.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub stroked: Vec<Path>,
    pub filled: Vec<Path>,
}

impl Surface for RecordingSurface {
    fn stroke_path(&mut self, path: &Path) {
        self.stroked.push(path.clone());
    }

    fn fill_path(&mut self, path: &Path) {
        self.filled.push(path.clone());
    }
}

/// Axis-aligned rectangle handed over by the host with each draw request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Layout parameters: cell pitch, outer margin and piece edge length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderCfg {
    pub pitch: f64,
    pub margin: f64,
    pub piece_width: f64,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            pitch: 100.0,
            margin: 10.0,
            piece_width: 65.0,
        }
    }
}

impl RenderCfg {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("pitch", self.pitch),
            ("margin", self.margin),
            ("piece_width", self.piece_width),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.piece_width <= 0.0 {
            return Err(ConfigError::NonPositiveWidth(self.piece_width));
        }
        if self.pitch < 0.0 {
            return Err(ConfigError::Negative {
                field: "pitch",
                value: self.pitch,
            });
        }
        Ok(())
    }

    /// Top-left corner of cell `(row, col)`: x follows the column, y the row.
    pub fn origin_for(&self, row: usize, col: usize) -> Point2<f64> {
        Point2::new(
            col as f64 * self.pitch + self.margin,
            row as f64 * self.pitch + self.margin,
        )
    }

    /// Size of the area a `dims` grid covers, trailing margin included.
    ///
    /// Border edges are straight, so no nub reaches past the outer pieces.
    pub fn canvas_size(&self, dims: GridDims) -> (f64, f64) {
        let span = |n: usize| {
            if n == 0 {
                2.0 * self.margin
            } else {
                (n - 1) as f64 * self.pitch + self.piece_width + 2.0 * self.margin
            }
        };
        (span(dims.cols), span(dims.rows))
    }
}

/// Stroke every piece of `grid` at its cell origin.
pub fn render_grid(grid: &Grid, cfg: &RenderCfg, surface: &mut dyn Surface) {
    for (row, col, piece) in grid.iter() {
        piece.draw_self(surface, cfg.origin_for(row, col), cfg.piece_width);
    }
    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        "grid rendered"
    );
}

/// Host-facing view: owns the random source and answers draw callbacks.
///
/// Each `draw` regenerates the grid from scratch unless caching is on, in
/// which case the first grid is kept until [`PuzzleView::invalidate`].
pub struct PuzzleView<R: Rng = StdRng> {
    dims: GridDims,
    cfg: RenderCfg,
    rng: R,
    cache: bool,
    cached: Option<Grid>,
}

impl PuzzleView<StdRng> {
    /// View seeded from a replay token.
    pub fn seeded(dims: GridDims, cfg: RenderCfg, token: ReplayToken) -> Self {
        Self::new(dims, cfg, token.to_std_rng())
    }
}

impl<R: Rng> PuzzleView<R> {
    pub fn new(dims: GridDims, cfg: RenderCfg, rng: R) -> Self {
        Self {
            dims,
            cfg,
            rng,
            cache: false,
            cached: None,
        }
    }

    /// Keep the first generated grid across draws.
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn cfg(&self) -> &RenderCfg {
        &self.cfg
    }

    /// Drop the cached grid; the next draw regenerates.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// The grid the next `draw` will show, generating it if needed.
    pub fn grid(&mut self) -> &Grid {
        if !self.cache {
            self.cached = None;
        }
        let (dims, rng) = (self.dims, &mut self.rng);
        self.cached.get_or_insert_with(|| Grid::generate(dims, rng))
    }

    /// Draw callback: generate (or reuse) the grid and stroke it onto `surface`.
    ///
    /// `bounds` is the dirty rectangle reported by the host; the whole grid is
    /// always drawn.
    pub fn draw(&mut self, surface: &mut dyn Surface, bounds: Rect) {
        tracing::debug!(
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            cached = self.cache && self.cached.is_some(),
            "draw"
        );
        let cfg = self.cfg;
        let grid = self.grid();
        render_grid(grid, &cfg, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PuzzlePiece;
    use nalgebra::point;
    use rand::SeedableRng;

    #[test]
    fn origin_follows_column_then_row() {
        let cfg = RenderCfg::default();
        assert_eq!(cfg.origin_for(0, 0), point![10.0, 10.0]);
        assert_eq!(cfg.origin_for(2, 4), point![410.0, 210.0]);
    }

    #[test]
    fn canvas_size_covers_last_piece() {
        let cfg = RenderCfg::default();
        assert_eq!(cfg.canvas_size(GridDims::new(3, 5)), (485.0, 285.0));
        assert_eq!(cfg.canvas_size(GridDims::new(0, 0)), (20.0, 20.0));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(RenderCfg::default().validate().is_ok());
        let bad_width = RenderCfg {
            piece_width: 0.0,
            ..RenderCfg::default()
        };
        assert_eq!(bad_width.validate(), Err(ConfigError::NonPositiveWidth(0.0)));
        let nan_margin = RenderCfg {
            margin: f64::NAN,
            ..RenderCfg::default()
        };
        assert!(matches!(
            nan_margin.validate(),
            Err(ConfigError::NonFinite { field: "margin", .. })
        ));
        let negative = RenderCfg {
            pitch: -1.0,
            ..RenderCfg::default()
        };
        assert!(matches!(negative.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn render_strokes_every_piece_at_its_origin() {
        let grid = Grid::replay(GridDims::new(3, 5), ReplayToken { seed: 9, index: 0 });
        let cfg = RenderCfg::default();
        let mut surface = RecordingSurface::default();
        render_grid(&grid, &cfg, &mut surface);
        assert_eq!(surface.stroked.len(), 15);
        for ((row, col, piece), path) in grid.iter().zip(&surface.stroked) {
            assert_eq!(path.points()[0], cfg.origin_for(row, col));
            assert_eq!(*path, piece.outline(cfg.origin_for(row, col), 65.0));
            assert!(path.is_closed());
        }
    }

    #[test]
    fn view_regenerates_without_cache() {
        let mut view = PuzzleView::seeded(
            GridDims::new(3, 5),
            RenderCfg::default(),
            ReplayToken { seed: 1, index: 0 },
        );
        let first = view.grid().clone();
        let second = view.grid().clone();
        assert_ne!(first, second);
    }

    #[test]
    fn view_reuses_cached_grid_until_invalidated() {
        let rng = StdRng::seed_from_u64(4);
        let mut view = PuzzleView::new(GridDims::new(3, 5), RenderCfg::default(), rng).with_cache(true);
        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        view.draw(&mut a, Rect::new(0.0, 0.0, 500.0, 300.0));
        view.draw(&mut b, Rect::new(0.0, 0.0, 500.0, 300.0));
        assert_eq!(a.stroked, b.stroked);

        view.invalidate();
        let mut c = RecordingSurface::default();
        view.draw(&mut c, Rect::default());
        assert_eq!(c.stroked.len(), 15);
        assert_ne!(a.stroked, c.stroked);
    }

    #[test]
    fn fill_is_optional_for_surfaces() {
        struct StrokeOnly(usize);
        impl Surface for StrokeOnly {
            fn stroke_path(&mut self, _path: &Path) {
                self.0 += 1;
            }
        }
        let mut s = StrokeOnly(0);
        PuzzlePiece::default().draw_self(&mut s, point![0.0, 0.0], 10.0);
        s.fill_path(&Path::new());
        assert_eq!(s.0, 1);
    }
}
