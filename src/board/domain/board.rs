//! Board aggregate root and the drag reconciliation algorithm.

use super::{
    BoardDomainError, DragLocation, DragOutcome, DragResult, Item, ItemId, ItemPatch, Stage,
    StageId,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// The three-stage task board.
///
/// Each stage is a struct field, so the mapping from [`StageId`] to [`Stage`]
/// is total by construction. The aggregate maintains two invariants across
/// every operation:
///
/// - each item identifier appears in exactly one stage sequence, and
/// - an item carries a completion timestamp exactly while it resides in the
///   terminal stage.
///
/// Every mutation validates before touching state, so a failed call leaves
/// the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    todo: Stage,
    in_progress: Stage,
    completed: Stage,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with the three default stages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            todo: Stage::new(StageId::Todo),
            in_progress: Stage::new(StageId::InProgress),
            completed: Stage::new(StageId::Completed),
        }
    }

    /// Returns the stage with the given identifier.
    #[must_use]
    pub const fn stage(&self, id: StageId) -> &Stage {
        match id {
            StageId::Todo => &self.todo,
            StageId::InProgress => &self.in_progress,
            StageId::Completed => &self.completed,
        }
    }

    /// Returns the stages in presentation order.
    pub fn stages(&self) -> impl Iterator<Item = &Stage> {
        [&self.todo, &self.in_progress, &self.completed].into_iter()
    }

    /// Returns the total number of items across all stages.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.stages().map(Stage::len).sum()
    }

    /// Returns `true` when any stage holds the item.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.locate(id).is_some()
    }

    /// Returns the item with the given identifier, wherever it resides.
    #[must_use]
    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.stages()
            .find_map(|stage| stage.items().iter().find(|item| item.id() == id))
    }

    /// Returns the position of the item with the given identifier.
    #[must_use]
    pub fn locate(&self, id: ItemId) -> Option<DragLocation> {
        self.stages().find_map(|stage| {
            stage
                .position(id)
                .map(|index| DragLocation::new(stage.id(), index))
        })
    }

    /// Appends an item to the end of a stage's sequence.
    ///
    /// The item's completion timestamp is aligned with the destination:
    /// stamped from the clock when inserting straight into the terminal
    /// stage, cleared otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateItem`] when the identifier is
    /// already present anywhere on the board.
    pub fn insert_item(
        &mut self,
        stage: StageId,
        mut item: Item,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        if self.contains(item.id()) {
            return Err(BoardDomainError::DuplicateItem(item.id()));
        }
        item.set_completion(stage.is_terminal().then(|| clock.utc()));
        self.stage_mut(stage).push(item);
        Ok(())
    }

    /// Replaces an item's mutable fields from a validated patch. The item's
    /// stage, position, identity, and completion timestamp are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ItemNotFound`] when no stage contains the
    /// identifier.
    pub fn update_item(&mut self, id: ItemId, patch: &ItemPatch) -> Result<(), BoardDomainError> {
        let item = self
            .stages_mut()
            .into_iter()
            .find_map(|stage| stage.item_mut(id))
            .ok_or(BoardDomainError::ItemNotFound(id))?;
        item.apply(patch);
        Ok(())
    }

    /// Moves the item at `source_index` in `source_stage` to `dest_index` in
    /// `dest_stage`.
    ///
    /// Same-stage moves follow splice semantics: the item is removed first,
    /// so the destination index is interpreted against the shortened
    /// sequence. Cross-stage destination indices refer to the destination
    /// sequence before insertion. Crossing the terminal-stage boundary
    /// stamps or clears the item's completion timestamp; reordering within
    /// the terminal stage leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfBounds`] when either index
    /// falls outside its stage's valid range; the board is unchanged.
    pub fn move_item(
        &mut self,
        source_stage: StageId,
        source_index: usize,
        dest_stage: StageId,
        dest_index: usize,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        let source_len = self.stage(source_stage).len();
        if source_index >= source_len {
            return Err(BoardDomainError::IndexOutOfBounds {
                stage: source_stage,
                index: source_index,
                len: source_len,
            });
        }

        if source_stage == dest_stage {
            if source_index == dest_index {
                return Ok(());
            }
            // Valid insert positions run to the end of the post-removal
            // sequence, which is one shorter.
            if dest_index >= source_len {
                return Err(BoardDomainError::IndexOutOfBounds {
                    stage: dest_stage,
                    index: dest_index,
                    len: source_len,
                });
            }
            let stage = self.stage_mut(source_stage);
            let item = stage.remove(source_index);
            stage.insert(dest_index, item);
            return Ok(());
        }

        let dest_len = self.stage(dest_stage).len();
        if dest_index > dest_len {
            return Err(BoardDomainError::IndexOutOfBounds {
                stage: dest_stage,
                index: dest_index,
                len: dest_len,
            });
        }
        let mut item = self.stage_mut(source_stage).remove(source_index);
        item.set_completion(dest_stage.is_terminal().then(|| clock.utc()));
        self.stage_mut(dest_stage).insert(dest_index, item);
        Ok(())
    }

    /// Reconciles a completed drag gesture into the board.
    ///
    /// An abandoned gesture and a drop onto the card's own position both
    /// leave the board unchanged and are reported as such.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfBounds`] when the gesture
    /// references positions the board does not have; the board is unchanged.
    pub fn apply_drag(
        &mut self,
        drag: &DragResult,
        clock: &impl Clock,
    ) -> Result<DragOutcome, BoardDomainError> {
        let source = drag.source();
        let Some(destination) = drag.destination() else {
            return Ok(DragOutcome::Cancelled);
        };
        if source == destination {
            return Ok(DragOutcome::Unchanged);
        }

        let source_stage = self.stage(source.stage);
        let Some(item) = source_stage.items().get(source.index) else {
            return Err(BoardDomainError::IndexOutOfBounds {
                stage: source.stage,
                index: source.index,
                len: source_stage.len(),
            });
        };
        let item_id = item.id();

        self.move_item(
            source.stage,
            source.index,
            destination.stage,
            destination.index,
            clock,
        )?;
        Ok(DragOutcome::Moved {
            item: item_id,
            from: source,
            to: destination,
        })
    }

    /// Returns the stage with the given identifier for mutation.
    fn stage_mut(&mut self, id: StageId) -> &mut Stage {
        match id {
            StageId::Todo => &mut self.todo,
            StageId::InProgress => &mut self.in_progress,
            StageId::Completed => &mut self.completed,
        }
    }

    /// Returns the stages in presentation order for mutation.
    fn stages_mut(&mut self) -> [&mut Stage; 3] {
        [&mut self.todo, &mut self.in_progress, &mut self.completed]
    }
}
