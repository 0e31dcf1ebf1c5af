//! Stage identifiers and the ordered item lists they name.

use super::{Item, ItemId, ParseStageIdError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one of the three fixed board stages.
///
/// The set is closed: stages are never created or deleted, so every lookup
/// by `StageId` is total and has no missing-key failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    /// Work that has not started.
    Todo,
    /// Work currently underway.
    InProgress,
    /// Finished work. Entering or leaving this stage toggles an item's
    /// completion timestamp.
    Completed,
}

impl StageId {
    /// All stages in board presentation order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Completed];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the default display title for the stage.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns `true` for the terminal stage.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StageId {
    type Error = ParseStageIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStageIdError(value.to_owned())),
        }
    }
}

/// A named, ordered sequence of items.
///
/// Order is significant: it determines render position and the indices drag
/// gestures refer to. The title is presentation-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    id: StageId,
    title: String,
    items: Vec<Item>,
}

impl Stage {
    /// Creates an empty stage with the default display title.
    #[must_use]
    pub fn new(id: StageId) -> Self {
        Self {
            id,
            title: id.title().to_owned(),
            items: Vec::new(),
        }
    }

    /// Replaces the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the stage identifier.
    #[must_use]
    pub const fn id(&self) -> StageId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the items in render order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items in the stage.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the stage holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the position of the item with the given identifier.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Appends an item to the end of the sequence.
    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Inserts an item at `index`. The caller has validated the bound.
    pub(crate) fn insert(&mut self, index: usize, item: Item) {
        self.items.insert(index, item);
    }

    /// Removes and returns the item at `index`. The caller has validated the
    /// bound.
    pub(crate) fn remove(&mut self, index: usize) -> Item {
        self.items.remove(index)
    }

    /// Returns a mutable reference to the item with the given identifier.
    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}
