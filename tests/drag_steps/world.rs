//! Shared world state for drag reconciliation BDD scenarios.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskflow::board::domain::{Board, BoardDomainError, DragOutcome, Item, StageId};

/// Clock pinned to a fixed instant so completion timestamps are exact.
pub struct FrozenClock(pub DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scenario world for drag reconciliation behaviour tests.
pub struct DragWorld {
    pub clock: FrozenClock,
    pub board: Board,
    pub board_before_gesture: Option<Board>,
    pub last_outcome: Option<Result<DragOutcome, BoardDomainError>>,
}

impl DragWorld {
    /// Creates a world with an empty board and a frozen clock.
    #[must_use]
    pub fn new() -> Self {
        let instant = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        Self {
            clock: FrozenClock(instant),
            board: Board::new(),
            board_before_gesture: None,
            last_outcome: None,
        }
    }

    /// Parses a stage id from the feature text.
    pub fn parse_stage(raw: &str) -> Result<StageId, eyre::Report> {
        StageId::try_from(raw).map_err(|err| eyre::eyre!("unknown stage in feature: {err}"))
    }

    /// Seeds a stage with cards named by a comma-separated title list.
    pub fn seed_stage(&mut self, stage: StageId, titles: &str) -> Result<(), eyre::Report> {
        for title in titles.split(',') {
            let card = Item::new(title.trim(), &self.clock)
                .map_err(|err| eyre::eyre!("invalid seed title: {err}"))?;
            self.board
                .insert_item(stage, card, &self.clock)
                .map_err(|err| eyre::eyre!("seed insert failed: {err}"))?;
        }
        Ok(())
    }

    /// Returns the card with the given title, wherever it resides.
    pub fn find_by_title(&self, title: &str) -> Option<&Item> {
        self.board
            .stages()
            .flat_map(|stage| stage.items())
            .find(|card| card.content() == title)
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}
