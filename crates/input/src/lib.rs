//! Menu input module.
//!
//! This module is independent of the terminal backend. It turns lines typed
//! at the prompt into [`crate::types::MenuOption`] values and reads those
//! lines from any [`std::io::BufRead`] source, so tests can feed it from
//! in-memory buffers.

pub mod map;
pub mod reader;

pub use tetris_reserve_types as types;

pub use map::{parse_menu_line, InputError};
pub use reader::MenuReader;
