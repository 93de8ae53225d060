//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so the simulation
//! core, the input mapping and the terminal view can all share them.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (5, 0); negative rows form the spawn buffer above the
//!   visible board
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRAME_MS` | 16 | Default frame governor interval |
//! | `GRAVITY_MS` | 300 | Accumulated time before the piece falls one row |
//! | `LOSS_PAUSE_MS` | 1500 | How long the loss screen stays up |
//!
//! # Examples
//!
//! ```
//! use block_drop_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor column of a freshly spawned piece
pub const SPAWN_X: i8 = 5;

/// Anchor row of a freshly spawned piece
pub const SPAWN_Y: i8 = 0;

/// Default frame governor interval in milliseconds (16ms ≈ 60 FPS)
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Accumulated fall time before gravity moves the piece one row
pub const GRAVITY_MS: u32 = 300;

/// Duration of the loss screen before the session reports finished
pub const LOSS_PAUSE_MS: u32 = 1500;

/// Message shown on the loss screen
pub const LOSS_MESSAGE: &str = "YOU LOST!";

/// Message shown on the menu screen
pub const MENU_MESSAGE: &str = "Press Any Key To Play";

/// Title drawn above the board
pub const TITLE: &str = "BLOCK DROP";

/// Pixel size of one board cell in the windowed layout
pub const CELL_PX: u32 = 30;

/// Windowed layout width in pixels
pub const WINDOW_WIDTH_PX: u32 = 800;

/// Windowed layout height in pixels
pub const WINDOW_HEIGHT_PX: u32 = 750;

/// Play area width in pixels (10 cells)
pub const PLAY_WIDTH_PX: u32 = BOARD_WIDTH as u32 * CELL_PX;

/// Play area height in pixels (20 cells)
pub const PLAY_HEIGHT_PX: u32 = BOARD_HEIGHT as u32 * CELL_PX;

/// Left edge of the play area, centered horizontally in the window
pub const BOARD_ORIGIN_X_PX: u32 = (WINDOW_WIDTH_PX - PLAY_WIDTH_PX) / 2;

/// Top edge of the play area, leaving a 50px margin at the bottom
pub const BOARD_ORIGIN_Y_PX: u32 = WINDOW_HEIGHT_PX - PLAY_HEIGHT_PX - 50;

/// Pixel origin (top-left corner) of a visible board cell.
///
/// Returns `None` for cells outside the visible 10x20 grid, including the
/// spawn buffer.
///
/// ```
/// use block_drop_types::cell_origin_px;
///
/// assert_eq!(cell_origin_px(0, 0), Some((250, 100)));
/// assert_eq!(cell_origin_px(9, 19), Some((520, 670)));
/// assert_eq!(cell_origin_px(0, -1), None);
/// ```
pub fn cell_origin_px(x: i8, y: i8) -> Option<(u32, u32)> {
    if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
        return None;
    }
    Some((
        BOARD_ORIGIN_X_PX + x as u32 * CELL_PX,
        BOARD_ORIGIN_Y_PX + y as u32 * CELL_PX,
    ))
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background sentinel: a board cell with this color is empty.
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// A board cell is just its color; `BACKGROUND` means empty.
pub type Cell = Rgb;

/// The seven piece kinds
///
/// Each kind has a fixed color:
/// - **S**: Green
/// - **Z**: Red
/// - **I**: Cyan
/// - **O**: Yellow
/// - **J**: Orange
/// - **L**: Blue
/// - **T**: Purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::S => 0,
            PieceKind::Z => 1,
            PieceKind::I => 2,
            PieceKind::O => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::T => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_drop_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::T => "t",
        }
    }
}

/// Input events forwarded from the presentation layer into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece two cells down, validated as a single step
    SoftDrop,
    /// Advance the piece to its next rotation state
    RotateCw,
    /// Leave the game
    Quit,
    /// Any other key; only meaningful on the menu
    AnyKey,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use block_drop_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "quit" => Some(GameAction::Quit),
            "anykey" => Some(GameAction::AnyKey),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Quit => "quit",
            GameAction::AnyKey => "anyKey",
        }
    }
}

/// Session lifecycle
///
/// `Menu` → `Playing` on any key, `Playing` → `Terminal` on game over.
/// A terminal session is never resumed; the runner starts a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Terminal,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Terminal => "terminal",
        }
    }
}
