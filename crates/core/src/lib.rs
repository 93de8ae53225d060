//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the simulation: the piece catalog, the falling piece,
//! the board with its lock/clear cycle, and the session state machine. It has
//! no UI or I/O; the only side channel is `tracing` events.
//!
//! # Module Structure
//!
//! - [`pieces`]: static 5x5 rotation patterns and per-kind colors
//! - [`piece`]: the active (falling) piece
//! - [`board`]: settled cells, visible grid, gravity, lock-in and line clears
//! - [`rng`]: seeded uniform piece selection
//! - [`session`]: menu / playing / terminal phases and the per-frame cycle
//! - [`snapshot`]: copyable render state
//!
//! # Frame cycle
//!
//! Each frame while playing:
//!
//! 1. rebuild the grid from the settled cells
//! 2. feed elapsed time to gravity (300ms per row)
//! 3. apply queued input, reverting any move the board rejects
//! 4. paint the active piece
//! 5. lock the piece if gravity could not move it, then clear full rows
//! 6. end the session once a locked cell reaches the top row
//!
//! # Example
//!
//! ```
//! use block_drop_core::GameSession;
//! use block_drop_types::{GameAction, Phase, GRAVITY_MS};
//!
//! let mut session = GameSession::new(12345);
//! assert_eq!(session.phase(), Phase::Menu);
//!
//! session.apply_action(GameAction::AnyKey);
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! let y = session.active().y;
//! session.tick(GRAVITY_MS);
//! assert_eq!(session.active().y, y + 1);
//! ```

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use block_drop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellPos, ClearedRows, Grid};
pub use piece::ActivePiece;
pub use pieces::{occupied_cells, rotation_count};
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
