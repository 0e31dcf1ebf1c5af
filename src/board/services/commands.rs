//! Application service owning the board and the injected clock.

use crate::board::domain::{
    Board, BoardDomainError, DragOutcome, DragResult, Item, ItemId, ItemPatch, StageId,
};
use log::debug;
use mockable::Clock;

/// The single logical owner of a board.
///
/// Holds the board state together with the clock that stamps completion and
/// creation timestamps, and exposes the command surface a presentation layer
/// drives: gesture reconciliation, item insertion and update, and read-only
/// snapshot access. All operations are synchronous and strictly ordered;
/// the board after one command is the input state of the next.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskflow::board::domain::{DragLocation, DragResult, Item, StageId};
/// use taskflow::board::services::BoardService;
///
/// let mut service = BoardService::new(DefaultClock);
/// let card = Item::new("Ship the release", service.clock()).expect("non-empty title");
/// service.insert_item(StageId::Todo, card).expect("fresh id");
///
/// let drag = DragResult::new(
///     DragLocation::new(StageId::Todo, 0),
///     DragLocation::new(StageId::Completed, 0),
/// );
/// service.apply_drag(&drag).expect("valid gesture");
/// assert!(service.board().stage(StageId::Completed).items()[0].completed_at().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct BoardService<C: Clock> {
    board: Board,
    clock: C,
}

impl<C: Clock> BoardService<C> {
    /// Creates a service over an empty board.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            board: Board::default(),
            clock,
        }
    }

    /// Creates a service over an existing board arrangement.
    #[must_use]
    pub const fn with_board(board: Board, clock: C) -> Self {
        Self { board, clock }
    }

    /// Returns the read-only board snapshot for rendering.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the injected clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Reconciles a completed drag gesture into the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfBounds`] when the gesture
    /// references positions the board does not have; the board is unchanged.
    pub fn apply_drag(&mut self, drag: &DragResult) -> Result<DragOutcome, BoardDomainError> {
        let outcome = self.board.apply_drag(drag, &self.clock)?;
        match outcome {
            DragOutcome::Cancelled => debug!("drag abandoned with no destination"),
            DragOutcome::Unchanged => debug!("drag dropped at its original position"),
            DragOutcome::Moved { item, from, to } if from.stage == to.stage => {
                debug!("reordered {item} within {}: {} -> {}", from.stage, from.index, to.index);
            }
            DragOutcome::Moved { item, from, to } => {
                debug!("transferred {item} from {from} to {to}");
            }
        }
        Ok(outcome)
    }

    /// Moves an item by explicit coordinates.
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
    ) -> Result<(), BoardDomainError> {
        self.board.move_item(
            source_stage,
            source_index,
            dest_stage,
            dest_index,
            &self.clock,
        )
    }

    /// Appends an item to the end of a stage's sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateItem`] when the identifier is
    /// already present anywhere on the board.
    pub fn insert_item(&mut self, stage: StageId, item: Item) -> Result<(), BoardDomainError> {
        let id = item.id();
        self.board.insert_item(stage, item, &self.clock)?;
        debug!("inserted {id} into {stage}");
        Ok(())
    }

    /// Replaces an item's mutable fields from a validated patch.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ItemNotFound`] when no stage contains the
    /// identifier.
    pub fn update_item(&mut self, id: ItemId, patch: &ItemPatch) -> Result<(), BoardDomainError> {
        self.board.update_item(id, patch)
    }
}
