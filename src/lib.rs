//! Block Drop (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks can use `block_drop::{core, input,
//! term, types}`.

pub use block_drop_core as core;
pub use block_drop_input as input;
pub use block_drop_term as term;
pub use block_drop_types as types;
