//! Reserve stack: a bounded LIFO of set-aside pieces.
//!
//! Unlike the queue, the reserve never refills itself.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::error::CoreError;
use crate::types::{Piece, STACK_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveStack {
    /// Base at index 0, top at `len - 1`.
    items: ArrayVec<Piece, STACK_CAPACITY>,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Slot index of the top piece, `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// Place a piece on top.
    ///
    /// A full reserve rejects the push with [`CoreError::CapacityExceeded`]
    /// and is left unchanged.
    pub fn push(&mut self, piece: Piece) -> Result<(), CoreError> {
        self.items
            .try_push(piece)
            .map_err(|_| CoreError::CapacityExceeded)?;
        trace!(%piece, size = self.items.len(), "pushed to reserve");
        Ok(())
    }

    /// Remove the top piece. Callers guard with [`is_empty`](Self::is_empty).
    pub fn pop(&mut self) -> Option<Piece> {
        let piece = self.items.pop()?;
        trace!(%piece, size = self.items.len(), "popped from reserve");
        Some(piece)
    }

    pub fn peek(&self) -> Option<&Piece> {
        self.items.last()
    }

    /// Piece `depth` slots below the top (depth 0 = top).
    pub fn get(&self, depth: usize) -> Option<&Piece> {
        let idx = self.top_index()?.checked_sub(depth)?;
        self.items.get(idx)
    }

    pub(crate) fn get_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let idx = self.top_index()?.checked_sub(depth)?;
        self.items.get_mut(idx)
    }

    /// The top `K` pieces, top first. `None` when fewer than `K` are held.
    pub(crate) fn top_mut<const K: usize>(&mut self) -> Option<[&mut Piece; K]> {
        let start = self.items.len().checked_sub(K)?;
        self.items[start..]
            .iter_mut()
            .rev()
            .collect::<ArrayVec<_, K>>()
            .into_inner()
            .ok()
    }

    /// Iterate top to base.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.items.iter().rev()
    }
}
