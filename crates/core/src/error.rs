//! Rejections reported by the containers, exchanges and session.
//!
//! None of these are fatal: the rejected operation leaves every container
//! exactly as it was.

use derive_more::{Display, Error};

use crate::types::MenuOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CoreError {
    /// Push attempted on a full reserve.
    #[display("reserve is full")]
    CapacityExceeded,

    /// Simple swap attempted with an empty queue or reserve.
    #[display("queue or reserve is empty, nothing to swap")]
    OperandEmpty,

    /// Triple swap attempted without three pieces on both sides.
    #[display("at least 3 pieces are required in both the queue and the reserve")]
    InsufficientElements,

    /// Reserve piece requested while the reserve is empty.
    #[display("reserve is empty")]
    ReserveEmpty,

    /// Option not offered by the active menu variant.
    #[display("option {} is not available in this mode", _0.code())]
    Unavailable(#[error(not(source))] MenuOption),
}
