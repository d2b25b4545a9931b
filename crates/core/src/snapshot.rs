use arrayvec::ArrayVec;
use serde::Serialize;

use crate::session::Session;
use crate::types::{Piece, Variant, QUEUE_CAPACITY, STACK_CAPACITY};

/// Point-in-time copy of a session's visible state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub seed: u32,
    pub variant: Variant,
    pub turn: u32,
    pub next_id: u64,
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to base.
    pub reserve: ArrayVec<Piece, STACK_CAPACITY>,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        Self {
            seed: session.generator().seed(),
            variant: session.variant(),
            turn: session.turn(),
            next_id: session.generator().next_id(),
            queue: session.queue().iter().copied().collect(),
            reserve: session.stack().iter().copied().collect(),
        }
    }

    pub fn reserve_is_empty(&self) -> bool {
        self.reserve.is_empty()
    }
}
