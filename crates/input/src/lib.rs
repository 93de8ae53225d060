//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press produces an action: known keys map to moves or quit, and anything
//! else becomes [`GameAction::AnyKey`](crate::types::GameAction::AnyKey) so
//! the menu can start on any key.

pub mod map;

pub use block_drop_types as types;

pub use map::{handle_key_event, should_quit};
