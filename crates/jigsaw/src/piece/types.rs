//! Edge states and sides of a piece.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Whether a nub bulges away from the piece body or is recessed into it.
///
/// A border edge has no nub at all and is modelled as `Option::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NubDirection {
    Outward,
    Inward,
}

impl NubDirection {
    /// Turn direction of the nub normal relative to the edge axis.
    #[inline]
    pub fn is_clockwise(self) -> bool {
        match self {
            Self::Outward => true,
            Self::Inward => false,
        }
    }

    /// The state the neighbour across the same edge must have.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Outward => Self::Inward,
            Self::Inward => Self::Outward,
        }
    }

    /// Uniform choice between the two states.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::Outward
        } else {
            Self::Inward
        }
    }
}

/// The four sides in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Grid offset `(d_row, d_col)` of the neighbour on this side.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }
}
