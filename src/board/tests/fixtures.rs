//! Shared fixtures and helpers for board tests.

use crate::board::domain::{Board, Item, Stage, StageId};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to a fixed instant so timestamp assertions are exact.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns the instant the [`clock`] fixture is pinned to.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Fixture clock pinned to [`fixed_instant`].
#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(fixed_instant())
}

/// Builds an item with the given title.
pub fn item(title: &str, clock: &FixedClock) -> Item {
    Item::new(title, clock).expect("non-empty title")
}

/// Builds a board whose todo stage holds the given titles in order.
pub fn board_with_todo(titles: &[&str], clock: &FixedClock) -> Board {
    let mut board = Board::new();
    for title in titles {
        board
            .insert_item(StageId::Todo, item(title, clock), clock)
            .expect("fresh id");
    }
    board
}

/// Returns a stage's item titles in render order.
pub fn stage_titles(board: &Board, stage: StageId) -> Vec<String> {
    board
        .stage(stage)
        .items()
        .iter()
        .map(|card| card.content().to_owned())
        .collect()
}

/// Returns the total number of items per stage, todo first.
pub fn stage_lens(board: &Board) -> [usize; 3] {
    [
        board.stage(StageId::Todo).len(),
        board.stage(StageId::InProgress).len(),
        board.stage(StageId::Completed).len(),
    ]
}

/// Asserts the multiset of item identifiers is conserved by comparing the
/// sorted identifier strings of two boards.
pub fn item_ids_sorted(board: &Board) -> Vec<String> {
    let mut ids: Vec<String> = board
        .stages()
        .flat_map(Stage::items)
        .map(|card| card.id().to_string())
        .collect();
    ids.sort();
    ids
}
