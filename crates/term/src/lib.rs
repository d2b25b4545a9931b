//! Terminal presentation module.
//!
//! Rendering is split in two layers:
//! - [`game_view`] turns session state, menus and command results into a
//!   [`TextFrame`] of styled spans. It is pure (no I/O) and unit-tested.
//! - [`renderer`] flushes frames to a writer, using crossterm colors for
//!   piece labels when color is enabled.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use tetris_reserve_core as core;
pub use tetris_reserve_types as types;

pub use frame::{Line, Span, TextFrame};
pub use game_view::{render_json, GameView};
pub use renderer::{encode_into, TerminalRenderer};
