//! Tetris reserve (workspace facade crate).
//!
//! Exposes `tetris_reserve::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`. The [`config`] module resolves
//! session settings and [`controller`] runs the interactive loop.

pub mod config;
pub mod controller;

pub use tetris_reserve_core as core;
pub use tetris_reserve_input as input;
pub use tetris_reserve_term as term;
pub use tetris_reserve_types as types;
