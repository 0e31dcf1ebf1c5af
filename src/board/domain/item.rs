//! Board item entity and its validated value objects.

use super::{BoardDomainError, ItemId, ParsePriorityError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency. Newly created items default to this level.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// A single task card.
///
/// Identity (`id`, `created_at`) is fixed at construction. The completion
/// timestamp is owned by the board: it is present exactly when the item
/// resides in the terminal stage, and only board transitions write it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    priority: Priority,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Creates an item with a fresh identifier and a creation timestamp read
    /// from the injected clock. The title is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyContent`] when the title is empty or
    /// whitespace-only.
    pub fn new(content: impl Into<String>, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        let title = normalized_content(&content.into())?;
        Ok(Self {
            id: ItemId::new(),
            content: title,
            description: None,
            priority: Priority::default(),
            created_at: clock.utc(),
            completed_at: None,
        })
    }

    /// Sets the description. Whitespace-only input clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalized_description(&description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the description, if one is set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, present exactly while the item
    /// resides in the terminal stage.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Replaces the mutable fields from a validated patch. Identity and the
    /// completion timestamp are untouched.
    pub(crate) fn apply(&mut self, patch: &ItemPatch) {
        self.content = patch.content().to_owned();
        self.description = patch.description().map(ToOwned::to_owned);
        self.priority = patch.priority();
    }

    /// Writes the completion timestamp. Board transitions are the only
    /// callers, which keeps the terminal-stage invariant unrepresentable to
    /// break from outside the crate.
    pub(crate) const fn set_completion(&mut self, completed_at: Option<DateTime<Utc>>) {
        self.completed_at = completed_at;
    }
}

/// Validated replacement values for an item's mutable fields.
///
/// Constructing the patch performs all validation, so applying it to an item
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPatch {
    content: String,
    description: Option<String>,
    priority: Priority,
}

impl ItemPatch {
    /// Creates a patch carrying a trimmed title, no description, and the
    /// default priority.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyContent`] when the title is empty or
    /// whitespace-only.
    pub fn new(content: impl Into<String>) -> Result<Self, BoardDomainError> {
        let title = normalized_content(&content.into())?;
        Ok(Self {
            content: title,
            description: None,
            priority: Priority::default(),
        })
    }

    /// Sets the replacement description. Whitespace-only input clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalized_description(&description.into());
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the replacement title.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// Trims a title, rejecting empty results.
fn normalized_content(raw: &str) -> Result<String, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyContent);
    }
    Ok(trimmed.to_owned())
}

/// Trims a description, mapping empty results to `None`.
fn normalized_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
