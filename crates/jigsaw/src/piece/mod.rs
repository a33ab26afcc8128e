//! Puzzle piece model.
//!
//! A piece is four optional nub states, fixed at construction. Two
//! constructors exist: explicit (`new`, `random`) and derived from the
//! neighbours that share its edges (`from_neighbors`), which copies each
//! shared edge inverted so a piece never picks a state its neighbour already
//! owns.
//!
//! Drawing walks the square clockwise on screen, top → right → bottom → left,
//! each edge starting where the previous one ended.

mod types;

pub use types::{NubDirection, Side};

use nalgebra::{Point2, Vector2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::edge::add_edge;
use crate::geometry::rotate90;
use crate::path::Path;
use crate::render::Surface;

/// One jigsaw piece; `None` marks a straight border edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzlePiece {
    pub top: Option<NubDirection>,
    pub right: Option<NubDirection>,
    pub bottom: Option<NubDirection>,
    pub left: Option<NubDirection>,
}

impl PuzzlePiece {
    pub fn new(
        top: Option<NubDirection>,
        right: Option<NubDirection>,
        bottom: Option<NubDirection>,
        left: Option<NubDirection>,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Every edge nubbed, each state drawn independently.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            top: Some(NubDirection::random(rng)),
            right: Some(NubDirection::random(rng)),
            bottom: Some(NubDirection::random(rng)),
            left: Some(NubDirection::random(rng)),
        }
    }

    /// Inherit every edge from the neighbour on that side, inverted.
    ///
    /// A missing neighbour (grid boundary) leaves the side as a border edge.
    pub fn from_neighbors(
        top: Option<&PuzzlePiece>,
        right: Option<&PuzzlePiece>,
        bottom: Option<&PuzzlePiece>,
        left: Option<&PuzzlePiece>,
    ) -> Self {
        let inherit = |n: Option<&PuzzlePiece>, side: Side| {
            n.and_then(|p| p.edge(side.opposite()))
                .map(NubDirection::opposite)
        };
        Self {
            top: inherit(top, Side::Top),
            right: inherit(right, Side::Right),
            bottom: inherit(bottom, Side::Bottom),
            left: inherit(left, Side::Left),
        }
    }

    #[inline]
    pub fn edge(&self, side: Side) -> Option<NubDirection> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// `[top, right, bottom, left]`.
    pub fn edges(&self) -> [Option<NubDirection>; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Whether `other`, placed on `side` of `self`, interlocks with it.
    ///
    /// Two border edges facing each other also count as matching.
    pub fn fits(&self, side: Side, other: &PuzzlePiece) -> bool {
        self.edge(side) == other.edge(side.opposite()).map(NubDirection::opposite)
    }

    /// Closed outline of the piece with its top-left corner at `origin`.
    pub fn outline(&self, origin: Point2<f64>, width: f64) -> Path {
        let mut path = Path::new();
        path.move_to(origin);
        let mut current = origin;
        let mut step = Vector2::new(width, 0.0);
        for nub in self.edges() {
            let next = current + step;
            add_edge(&mut path, current, next, nub);
            // screen coordinates: a counter-clockwise matrix turn goes right → down
            step = rotate90(step, false);
            current = next;
        }
        path.close();
        path
    }

    /// Build the outline and stroke it on `surface`.
    pub fn draw_self(&self, surface: &mut dyn Surface, origin: Point2<f64>, width: f64) {
        let path = self.outline(origin, width);
        surface.stroke_path(&path);
    }
}
