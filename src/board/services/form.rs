//! Edit/create form controller committing items into the board.

use crate::board::domain::{BoardDomainError, Item, ItemId, ItemPatch, Priority, StageId};
use log::debug;
use mockable::Clock;
use thiserror::Error;

use super::BoardService;

/// What committing the form will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Committing creates a new item at the end of the todo stage.
    Create,
    /// Committing patches the referenced item in place.
    Edit(ItemId),
}

/// What a successful commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommit {
    /// A new item was created with the given identifier.
    Created(ItemId),
    /// The referenced item was updated in place.
    Updated(ItemId),
}

/// Errors returned when committing the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// The title is empty after trimming. The buffer and dialog are left
    /// untouched so the user can correct and retry.
    #[error("task title must not be empty")]
    EmptyContent,

    /// The board rejected the commit. This is a contract violation: the
    /// presentation layer offered an item the board no longer holds.
    #[error(transparent)]
    Board(#[from] BoardDomainError),
}

/// Transient input buffer for adding or editing one item.
///
/// The controller is a two-mode state machine. [`FormMode::Create`] commits
/// the buffer as a fresh item appended to the todo stage;
/// [`FormMode::Edit`] commits it as an in-place patch of the referenced
/// item. Field setters perform no validation; the single validation rule
/// (a non-blank title) is enforced at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    content: String,
    description: String,
    priority: Priority,
    mode: FormMode,
    open: bool,
}

impl TaskForm {
    /// Creates a closed controller with a defaulted buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            mode: FormMode::Create,
            open: false,
        }
    }

    /// Opens the dialog in create mode with a defaulted buffer.
    pub fn open(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Opens the dialog in edit mode, seeding the buffer from the item's
    /// current field values.
    pub fn open_for_edit(&mut self, item: &Item) {
        self.content = item.content().to_owned();
        self.description = item.description().unwrap_or_default().to_owned();
        self.priority = item.priority();
        self.mode = FormMode::Edit(item.id());
        self.open = true;
    }

    /// Replaces the buffered title.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Replaces the buffered description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the buffered priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Returns `true` while the dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns the buffered title.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the buffered description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the buffered priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Commits the buffer into the board.
    ///
    /// Create mode builds a fresh item (new identifier, creation timestamp
    /// from the service clock, trimmed fields) and appends it to the todo
    /// stage. Edit mode patches the referenced item in place, leaving its
    /// identity, stage, and position untouched. On success the buffer
    /// resets, the mode returns to [`FormMode::Create`], and the dialog
    /// closes.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyContent`] when the trimmed title is blank;
    /// the buffer, mode, and dialog are untouched. Board rejections pass
    /// through as [`FormError::Board`] and likewise leave the controller
    /// open.
    pub fn commit<C: Clock>(
        &mut self,
        board: &mut BoardService<C>,
    ) -> Result<FormCommit, FormError> {
        let title = self.content.trim();
        if title.is_empty() {
            return Err(FormError::EmptyContent);
        }

        let outcome = match self.mode {
            FormMode::Create => {
                let item = Item::new(title, board.clock())?
                    .with_description(self.description.as_str())
                    .with_priority(self.priority);
                let id = item.id();
                board.insert_item(StageId::Todo, item)?;
                debug!("form created item {id}");
                FormCommit::Created(id)
            }
            FormMode::Edit(id) => {
                let patch = ItemPatch::new(title)?
                    .with_description(self.description.as_str())
                    .with_priority(self.priority);
                board.update_item(id, &patch)?;
                debug!("form updated item {id}");
                FormCommit::Updated(id)
            }
        };

        self.reset();
        Ok(outcome)
    }

    /// Discards the buffer, resets the mode, and closes the dialog. The
    /// board is untouched.
    pub fn cancel(&mut self) {
        debug!("form cancelled");
        self.reset();
    }

    /// Returns the buffer to its defaults and closes the dialog.
    fn reset(&mut self) {
        self.content.clear();
        self.description.clear();
        self.priority = Priority::default();
        self.mode = FormMode::Create;
        self.open = false;
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}
