//! Error types for board domain validation and parsing.

use super::{ItemId, StageId};
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The item title is empty after trimming.
    #[error("item title must not be empty")]
    EmptyContent,

    /// An item with the same identifier already exists on the board.
    #[error("duplicate item identifier: {0}")]
    DuplicateItem(ItemId),

    /// No stage contains the item identifier.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// A gesture referenced a position outside a stage's current sequence.
    #[error("index {index} out of bounds for stage '{stage}' holding {len} items")]
    IndexOutOfBounds {
        /// Stage the gesture referenced.
        stage: StageId,
        /// Offending position.
        index: usize,
        /// Length of the stage's sequence when the gesture arrived.
        len: usize,
    },
}

/// Error returned while parsing stage identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage id: {0}")]
pub struct ParseStageIdError(pub String);

/// Error returned while parsing item priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
