//! In-place exchanges between the queue and the reserve.
//!
//! Exchanges move values between slots; neither container changes size and
//! the queue is not refilled. Both operations validate first and mutate
//! second, so a rejection never leaves a half-swapped state.

use std::mem;

use tracing::debug;

use crate::error::CoreError;
use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use crate::types::TRIPLE_SWAP_LEN;

/// Swap the queue front with the reserve top.
pub fn swap_front(queue: &mut PieceQueue, stack: &mut ReserveStack) -> Result<(), CoreError> {
    let (Some(front), Some(top)) = (queue.get_mut(0), stack.get_mut(0)) else {
        return Err(CoreError::OperandEmpty);
    };

    mem::swap(front, top);
    debug!(front = %front, top = %top, "swapped queue front with reserve top");
    Ok(())
}

/// Swap the first three queued pieces with the three reserved ones.
///
/// Pairs are matched by rank: queue front with reserve top, the next queued
/// piece with the middle slot, the third with the base.
pub fn swap_triple(queue: &mut PieceQueue, stack: &mut ReserveStack) -> Result<(), CoreError> {
    // A three-slot reserve has to be full.
    let (Some(queued), Some(reserved)) = (
        queue.front_mut::<TRIPLE_SWAP_LEN>(),
        stack.top_mut::<TRIPLE_SWAP_LEN>(),
    ) else {
        return Err(CoreError::InsufficientElements);
    };

    for (q, r) in queued.into_iter().zip(reserved) {
        mem::swap(q, r);
    }
    debug!("swapped first {} queued pieces with the reserve", TRIPLE_SWAP_LEN);
    Ok(())
}
