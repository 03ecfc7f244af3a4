//! Error taxonomy for the FreeCell model.
//!
//! Every failure is signaled at the point of violation and propagated to
//! the immediate caller; the core never retries, never logs an error and
//! never degrades to a silent no-op.

use crate::board::Placement;

/// Errors raised by the bounded stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// A stack was constructed with a capacity of zero.
    #[error("invalid capacity {capacity}: a stack must hold at least one item")]
    InvalidCapacity { capacity: usize },

    /// A push was attempted on a stack already at capacity.
    #[error("stack is full")]
    Full,

    /// A peek or pop was attempted on an empty stack.
    #[error("stack is empty")]
    Empty,
}

/// Errors raised by game-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A `(placement, index)` pair is outside the range the board layout
    /// allows for that placement kind.
    #[error("no {placement} column with index {index}")]
    InvalidPlacement { placement: Placement, index: usize },

    /// A move named a source column with no card to move. Checked before
    /// any legality rule.
    #[error("source column has no card to move")]
    EmptySource,

    /// A structurally valid source/destination pair fails the movement
    /// rules.
    #[error("move is not allowed by the game rules")]
    InvalidMove,

    /// An explicit board handed to the constructor does not describe a
    /// legal FreeCell position.
    #[error("invalid board: {0}")]
    InvalidBoard(&'static str),

    /// A container fault surfaced through a game operation.
    #[error(transparent)]
    Stack(#[from] StackError),
}

/// Errors raised while resolving a numbered deal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DealError {
    /// MS-style deal numbers start at 1.
    #[error("ms deal numbers start at 1")]
    MsNumberOutOfRange,

    /// A permutation index must be below 52!.
    #[error("deal index out of range: a 52-card deck admits indices below 52!")]
    IndexOutOfRange,

    /// A deal id string was not an `ms<N>` number or a decimal index.
    #[error("could not parse deal id {id:?}: {reason}")]
    InvalidId { id: String, reason: &'static str },
}
