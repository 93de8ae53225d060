//! Pieces module - static shape catalog
//!
//! Every kind is a list of rotation states; each state is a 5x5 occupancy
//! pattern where `#` marks an occupied cell. Offsets are measured from the
//! piece pivot, which sits 2 columns right and 4 rows down from the pattern's
//! top-left corner, so a piece anchored at row 0 starts mostly in the spawn
//! buffer above the board.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rgb};

/// Side length of a rotation pattern
pub const PATTERN_SIZE: usize = 5;

/// Pattern column that maps to offset 0
pub const PIVOT_COLUMN: i8 = 2;

/// Pattern row that maps to offset 0
pub const PIVOT_ROW: i8 = 4;

/// Offset of a single occupied cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Occupied offsets of one rotation state, in row-major scan order
pub type CellOffsets = ArrayVec<CellOffset, { PATTERN_SIZE * PATTERN_SIZE }>;

/// One rotation state
pub type Pattern = [&'static [u8; PATTERN_SIZE]; PATTERN_SIZE];

const S_STATES: [Pattern; 2] = [
    [b".....", b".....", b"..##.", b".##..", b"....."],
    [b".....", b"..#..", b"..##.", b"...#.", b"....."],
];

const Z_STATES: [Pattern; 2] = [
    [b".....", b".....", b".##..", b"..##.", b"....."],
    [b".....", b"..#..", b".##..", b".#...", b"....."],
];

const I_STATES: [Pattern; 2] = [
    [b"..#..", b"..#..", b"..#..", b"..#..", b"....."],
    [b".....", b"####.", b".....", b".....", b"....."],
];

const O_STATES: [Pattern; 1] = [[b".....", b".....", b".##..", b".##..", b"....."]];

const J_STATES: [Pattern; 4] = [
    [b".....", b".#...", b".###.", b".....", b"....."],
    [b".....", b"..##.", b"..#..", b"..#..", b"....."],
    [b".....", b".....", b".###.", b"...#.", b"....."],
    [b".....", b"..#..", b"..#..", b".##..", b"....."],
];

const L_STATES: [Pattern; 4] = [
    [b".....", b"...#.", b".###.", b".....", b"....."],
    [b".....", b"..#..", b"..#..", b"..##.", b"....."],
    [b".....", b".....", b".###.", b".#...", b"....."],
    [b".....", b".##..", b"..#..", b"..#..", b"....."],
];

const T_STATES: [Pattern; 4] = [
    [b".....", b"..#..", b".###.", b".....", b"....."],
    [b".....", b"..#..", b"..##.", b"..#..", b"....."],
    [b".....", b".....", b".###.", b"..#..", b"....."],
    [b".....", b"..#..", b".##..", b"..#..", b"....."],
];

/// All rotation states of a kind
pub fn states(kind: PieceKind) -> &'static [Pattern] {
    match kind {
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::T => &T_STATES,
    }
}

/// Number of distinct rotation states (always at least 1)
pub fn rotation_count(kind: PieceKind) -> usize {
    states(kind).len()
}

/// Fixed display color of a kind
pub fn color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::J => Rgb::new(255, 165, 0),
        PieceKind::L => Rgb::new(0, 0, 255),
        PieceKind::T => Rgb::new(128, 0, 128),
    }
}

/// Occupied offsets for a kind at a rotation index.
///
/// The index is reduced modulo the kind's state count first, so any integer
/// (including negative ones) selects a valid state.
pub fn occupied_cells(kind: PieceKind, rotation: i32) -> CellOffsets {
    let states = states(kind);
    let state = &states[rotation.rem_euclid(states.len() as i32) as usize];

    let mut cells = CellOffsets::new();
    for (row, line) in state.iter().enumerate() {
        for (col, &mark) in line.iter().enumerate() {
            if mark == b'#' {
                cells.push((col as i8 - PIVOT_COLUMN, row as i8 - PIVOT_ROW));
            }
        }
    }
    cells
}
