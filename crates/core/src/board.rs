//! Board module - settled cells, the visible grid and the lock/clear cycle
//!
//! The board keeps two views of the playfield:
//!
//! - the **settled-cell map**: every locked cell keyed by `(col, row)`, including
//!   cells that locked in the spawn buffer (negative rows)
//! - the **grid**: a flat 10x20 color array rebuilt from the map every frame,
//!   with the active piece painted on top
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above 0 are the spawn buffer and are never drawn.

use std::collections::HashMap;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::types::{Cell, Rgb, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_MS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Board position `(col, row)`
pub type CellPos = (i8, i8);

/// Row-major 20x10 color matrix, the render surface
pub type Grid = [[Rgb; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Rows removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Locked cells; never contains the active piece
    settled: HashMap<CellPos, Rgb>,
    fall_time_ms: u32,
    lock_pending: bool,
    lines_cleared: u32,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [BACKGROUND; BOARD_SIZE],
            settled: HashMap::new(),
            fall_time_ms: 0,
            lock_pending: false,
            lines_cleared: 0,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Grid color at (x, y), `None` off the visible grid
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Reset every grid cell to background and paint the settled cells.
    ///
    /// Must run before the active piece is overlaid for the frame.
    pub fn rebuild_grid(&mut self) {
        self.cells.fill(BACKGROUND);
        for (&(x, y), &color) in &self.settled {
            if let Some(idx) = Self::index(x, y) {
                self.cells[idx] = color;
            }
        }
    }

    /// Whether `piece` may occupy its current position.
    ///
    /// Columns must stay within the walls at every row. Inside the walls, a
    /// cell in the spawn buffer (row < 0) is always accepted; a visible cell
    /// must be background; anything below the floor is rejected.
    pub fn is_valid(&self, piece: &ActivePiece) -> bool {
        piece
            .occupied_board_cells()
            .iter()
            .all(|&(x, y)| self.is_open(x, y))
    }

    fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        matches!(self.get(x, y), Some(cell) if cell == BACKGROUND)
    }

    /// Feed elapsed frame time into the fall accumulator.
    ///
    /// Once the accumulator reaches [`GRAVITY_MS`] it resets and the piece
    /// moves down one row. A rejected move below the top row is reverted and
    /// marks the piece for locking. Returns the accumulator.
    pub fn apply_gravity(&mut self, piece: &mut ActivePiece, elapsed_ms: u32) -> u32 {
        self.fall_time_ms = self.fall_time_ms.saturating_add(elapsed_ms);

        if self.fall_time_ms >= GRAVITY_MS {
            self.fall_time_ms = 0;
            piece.translate(0, 1);
            if !self.is_valid(piece) && piece.y > 0 {
                piece.translate(0, -1);
                self.lock_pending = true;
            }
        }

        self.fall_time_ms
    }

    /// Paint the visible cells of `piece` onto the grid
    pub fn overlay_active_piece(&mut self, piece: &ActivePiece) {
        let color = piece.color();
        for (x, y) in piece.occupied_board_cells() {
            if let Some(idx) = Self::index(x, y) {
                self.cells[idx] = color;
            }
        }
    }

    /// Lock `piece` if gravity flagged it this frame.
    ///
    /// Every cell is written to the settled map, spawn-buffer cells included,
    /// then full rows are cleared. Returns the freshly spawned replacement, or
    /// `None` if nothing was pending.
    pub fn commit_lock_if_pending(
        &mut self,
        piece: &ActivePiece,
        rng: &mut SimpleRng,
    ) -> Option<ActivePiece> {
        if !self.lock_pending {
            return None;
        }

        for pos in piece.occupied_board_cells() {
            self.settled.insert(pos, piece.color());
        }
        self.lock_pending = false;
        debug!(
            kind = piece.kind().as_str(),
            x = piece.x,
            y = piece.y,
            rotation = piece.rotation(),
            "piece locked"
        );

        let next = ActivePiece::spawn(rng);
        let cleared = self.clear_filled_rows();
        if !cleared.is_empty() {
            debug!(rows = ?cleared.as_slice(), "rows cleared");
        }
        Some(next)
    }

    /// Remove every full row and let the cells above fall in a single pass.
    ///
    /// Rows are scanned bottom to top. After the scan, every remaining cell
    /// above the topmost cleared row moves down by the number of cleared
    /// rows. Cells are re-keyed lowest first so a moved cell never lands on
    /// one that has not moved yet. Returns the cleared rows, bottom to top.
    pub fn clear_filled_rows(&mut self) -> ClearedRows {
        self.rebuild_grid();

        let width = BOARD_WIDTH as usize;
        let mut cleared = ClearedRows::new();
        for y in (0..BOARD_HEIGHT as usize).rev() {
            let row = &self.cells[y * width..(y + 1) * width];
            if row.iter().any(|&cell| cell == BACKGROUND) {
                continue;
            }
            let y = y as i8;
            cleared.push(y);
            for x in 0..BOARD_WIDTH as i8 {
                self.settled.remove(&(x, y));
            }
        }

        let Some(&top) = cleared.last() else {
            return cleared;
        };
        let shift = cleared.len() as i8;
        self.lines_cleared += cleared.len() as u32;

        let mut above: Vec<CellPos> = self
            .settled
            .keys()
            .copied()
            .filter(|&(_, y)| y < top)
            .collect();
        above.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        for (x, y) in above {
            if let Some(color) = self.settled.remove(&(x, y)) {
                self.settled.insert((x, y + shift), color);
            }
        }

        self.rebuild_grid();
        cleared
    }

    /// True once any locked cell sits on the top row or in the spawn buffer
    pub fn is_game_over(&self) -> bool {
        self.settled.keys().any(|&(_, y)| y < 1)
    }

    /// Copy the grid into a row-major matrix
    pub fn write_grid(&self, out: &mut Grid) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// The grid as a row-major matrix
    pub fn grid(&self) -> Grid {
        let mut out = [[BACKGROUND; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.write_grid(&mut out);
        out
    }

    /// Flat row-major view of the grid
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Locked cells (unordered)
    pub fn settled_cells(&self) -> impl Iterator<Item = (CellPos, Rgb)> + '_ {
        self.settled.iter().map(|(&pos, &color)| (pos, color))
    }

    /// Locked color at `(x, y)`, spawn buffer included
    pub fn settled_at(&self, x: i8, y: i8) -> Option<Rgb> {
        self.settled.get(&(x, y)).copied()
    }

    pub fn settled_len(&self) -> usize {
        self.settled.len()
    }

    /// Insert a locked cell directly, bypassing lock-in and row clearing.
    /// The grid picks it up on the next rebuild. Setup hook for tests.
    #[doc(hidden)]
    pub fn place(&mut self, x: i8, y: i8, color: Rgb) {
        self.settled.insert((x, y), color);
    }

    pub fn lock_pending(&self) -> bool {
        self.lock_pending
    }

    pub fn fall_time_ms(&self) -> u32 {
        self.fall_time_ms
    }

    /// Rows removed since the board was created
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_rebuild_skips_spawn_buffer_cells() {
        let mut board = Board::new();
        board.place(4, -1, RED);
        board.place(4, 0, RED);
        board.rebuild_grid();

        assert_eq!(board.get(4, 0), Some(RED));
        assert_eq!(board.cells().iter().filter(|&&c| c != BACKGROUND).count(), 1);
    }

    #[test]
    fn test_is_valid_rejects_floor() {
        let board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::O);
        // O occupies rows y-2 and y-1.
        piece.y = 20;
        assert!(board.is_valid(&piece));
        piece.y = 21;
        assert!(!board.is_valid(&piece));
    }

    #[test]
    fn test_gravity_does_not_lock_inside_spawn_buffer() {
        // A rejected fall only locks when the piece row is below the top.
        let mut board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::O);
        piece.y = -5;
        piece.x = -3;
        board.apply_gravity(&mut piece, GRAVITY_MS);
        assert_eq!(piece.y, -4);
        assert!(!board.lock_pending());
    }

    #[test]
    fn test_commit_without_pending_is_noop() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(3);
        let piece = ActivePiece::new(PieceKind::T);
        assert!(board.commit_lock_if_pending(&piece, &mut rng).is_none());
        assert_eq!(board.settled_len(), 0);
    }
}
