//! Drag gesture values exchanged with the presentation layer.

use super::{ItemId, StageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the board: a stage and an index within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragLocation {
    /// Stage the position refers to.
    pub stage: StageId,
    /// Zero-based position within the stage's sequence.
    pub index: usize,
}

impl DragLocation {
    /// Creates a board position.
    #[must_use]
    pub const fn new(stage: StageId, index: usize) -> Self {
        Self { stage, index }
    }
}

impl fmt::Display for DragLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.stage, self.index)
    }
}

/// The result of a completed drag gesture.
///
/// A missing destination means the card was released outside every stage and
/// the gesture is void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    source: DragLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    destination: Option<DragLocation>,
}

impl DragResult {
    /// Creates a gesture result that dropped onto a destination.
    #[must_use]
    pub const fn new(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Creates a gesture result that was released outside every stage.
    #[must_use]
    pub const fn abandoned(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }

    /// Returns the pick-up position.
    #[must_use]
    pub const fn source(&self) -> DragLocation {
        self.source
    }

    /// Returns the drop position, absent for an abandoned gesture.
    #[must_use]
    pub const fn destination(&self) -> Option<DragLocation> {
        self.destination
    }
}

/// How a drag gesture was reconciled into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The gesture ended outside every stage; the board is unchanged.
    Cancelled,
    /// The card was dropped at its own position; the board is unchanged.
    Unchanged,
    /// The card occupies a new position.
    Moved {
        /// The card that moved.
        item: ItemId,
        /// Position the card was picked up from.
        from: DragLocation,
        /// Position the card now occupies.
        to: DragLocation,
    },
}
