//! Terminal presentation for the game.
//!
//! Renders into a simple framebuffer that is flushed to the terminal with
//! diffing, rather than through a widget toolkit.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`]
//! - [`TerminalRenderer`] writes framebuffers to the terminal
//!
//! Each board cell is drawn 2 columns wide to approximate square cells.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_drop_core as core;
pub use block_drop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
