use crate::board::Grid;
use crate::piece::ActivePiece;
use crate::types::{PieceKind, Phase, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Settled cells plus the active piece overlay
    pub grid: Grid,
    pub phase: Phase,
    pub active: Option<ActiveSnapshot>,
    pub fall_ms: u32,
    pub lock_pending: bool,
    pub locked_pieces: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[BACKGROUND; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            phase: Phase::Menu,
            active: None,
            fall_ms: 0,
            lock_pending: false,
            locked_pieces: 0,
            lines_cleared: 0,
        }
    }
}
