//! When steps for drag reconciliation BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::when;
use taskflow::board::domain::{DragLocation, DragResult};

#[when(r#"the card at index {source_index:usize} in "{source_stage}" is dropped at index {dest_index:usize} in "{dest_stage}""#)]
fn card_is_dropped(
    world: &mut DragWorld,
    source_index: usize,
    source_stage: String,
    dest_index: usize,
    dest_stage: String,
) -> Result<(), eyre::Report> {
    let source = DragLocation::new(DragWorld::parse_stage(&source_stage)?, source_index);
    let destination = DragLocation::new(DragWorld::parse_stage(&dest_stage)?, dest_index);
    world.board_before_gesture = Some(world.board.clone());
    let outcome = world
        .board
        .apply_drag(&DragResult::new(source, destination), &world.clock);
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the card at index {source_index:usize} in "{source_stage}" is dropped outside the board"#)]
fn card_is_dropped_outside(
    world: &mut DragWorld,
    source_index: usize,
    source_stage: String,
) -> Result<(), eyre::Report> {
    let source = DragLocation::new(DragWorld::parse_stage(&source_stage)?, source_index);
    world.board_before_gesture = Some(world.board.clone());
    let outcome = world
        .board
        .apply_drag(&DragResult::abandoned(source), &world.clock);
    world.last_outcome = Some(outcome);
    Ok(())
}
