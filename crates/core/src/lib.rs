//! Core piece-management logic - pure, deterministic, and testable
//!
//! This crate holds the two bounded containers and the operations that move
//! pieces between them. It has no dependency on the terminal or on input
//! parsing, so a fixed seed reproduces a session exactly.
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG and the piece generator that assigns sequential ids
//! - [`queue`]: 5-slot circular lookahead queue that refills after every removal
//! - [`stack`]: 3-slot reserve stack
//! - [`exchange`]: in-place swaps between queue and reserve
//! - [`session`]: maps menu options onto the operations above
//! - [`snapshot`]: serializable copy of the visible state
//!
//! # Rules
//!
//! - The queue is filled with five pieces (ids 0-4) at session start and is
//!   topped up after every play or reserve.
//! - The reserve holds at most three pieces and never refills.
//! - A simple swap needs one piece on each side; a triple swap needs three
//!   on each side, i.e. a full reserve.
//! - Every command either applies completely or is rejected with a
//!   [`CoreError`] and no change.
//!
//! # Example
//!
//! ```
//! use tetris_reserve_core::{Outcome, Session};
//! use tetris_reserve_types::{MenuOption, Variant};
//!
//! let mut session = Session::new(12345, Variant::Advanced);
//!
//! let Ok(Outcome::Reserved(piece)) = session.apply(MenuOption::Reserve) else {
//!     panic!("reserve should succeed on a fresh session");
//! };
//! assert_eq!(piece.id, 0);
//!
//! session.apply(MenuOption::SwapFront).unwrap();
//! assert_eq!(session.queue().front().map(|p| p.id), Some(0));
//! assert_eq!(session.stack().peek().map(|p| p.id), Some(1));
//! ```

pub mod error;
pub mod exchange;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use tetris_reserve_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use exchange::{swap_front, swap_triple};
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::{Outcome, Session};
pub use snapshot::SessionSnapshot;
pub use stack::ReserveStack;
