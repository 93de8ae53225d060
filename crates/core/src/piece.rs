//! Active piece - the piece currently falling
//!
//! Mutations here are unconditional. Whoever moves a piece checks the result
//! with [`Board::is_valid`](crate::Board::is_valid) and applies the inverse
//! mutation when the new position is rejected.

use crate::pieces::{self, CellOffsets};
use crate::rng::SimpleRng;
use crate::types::{PieceKind, Rgb, SPAWN_X, SPAWN_Y};

/// Falling piece state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    pub x: i8,
    pub y: i8,
    rotation: u8,
    color: Rgb,
}

impl ActivePiece {
    /// Create a piece of the given kind at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0,
            color: pieces::color(kind),
        }
    }

    /// Spawn a piece with a uniformly random kind
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        Self::new(rng.next_kind())
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Shift the anchor
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Step the rotation index by `direction`, wrapping around the kind's
    /// state count. `rotate(1)` is undone by `rotate(-1)`.
    pub fn rotate(&mut self, direction: i8) {
        let count = pieces::rotation_count(self.kind) as i32;
        self.rotation = (self.rotation as i32 + direction as i32).rem_euclid(count) as u8;
    }

    /// Piece-local offsets of the current rotation state
    pub fn shape(&self) -> CellOffsets {
        pieces::occupied_cells(self.kind, self.rotation as i32)
    }

    /// Board coordinates `(col, row)` of every occupied cell
    pub fn occupied_board_cells(&self) -> CellOffsets {
        self.shape()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_anchor_with_catalog_color() {
        let mut rng = SimpleRng::new(9);
        let piece = ActivePiece::spawn(&mut rng);
        assert_eq!((piece.x, piece.y), (5, 0));
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.color(), pieces::color(piece.kind()));
    }

    #[test]
    fn rotate_wraps_and_reverts() {
        let mut piece = ActivePiece::new(PieceKind::T);
        for expected in [1, 2, 3, 0, 1] {
            piece.rotate(1);
            assert_eq!(piece.rotation(), expected);
        }
        piece.rotate(-1);
        piece.rotate(-1);
        assert_eq!(piece.rotation(), 3);
    }

    #[test]
    fn single_state_kind_never_changes_rotation() {
        let mut piece = ActivePiece::new(PieceKind::O);
        piece.rotate(1);
        assert_eq!(piece.rotation(), 0);
        piece.rotate(-1);
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn board_cells_follow_anchor() {
        let mut piece = ActivePiece::new(PieceKind::O);
        piece.translate(-2, 10);
        let cells = piece.occupied_board_cells();
        assert_eq!(cells.as_slice(), &[(2, 8), (3, 8), (2, 9), (3, 9)]);
    }
}
