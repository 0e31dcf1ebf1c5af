//! Then steps for drag reconciliation BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::then;

#[then(r#"the "{stage}" stage lists "{titles}" in order"#)]
fn stage_lists_in_order(
    world: &DragWorld,
    stage: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let stage_id = DragWorld::parse_stage(&stage)?;
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let actual: Vec<&str> = world
        .board
        .stage(stage_id)
        .items()
        .iter()
        .map(|card| card.content())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {stage} to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &DragWorld) -> Result<(), eyre::Report> {
    let before = world
        .board_before_gesture
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing pre-gesture snapshot in scenario world"))?;
    if &world.board != before {
        return Err(eyre::eyre!("expected the gesture to leave the board as it was"));
    }
    Ok(())
}

#[then(r#"the card "{title}" carries a completion timestamp"#)]
fn card_carries_completion(world: &DragWorld, title: String) -> Result<(), eyre::Report> {
    let card = world
        .find_by_title(&title)
        .ok_or_else(|| eyre::eyre!("card '{title}' not found on the board"))?;
    if card.completed_at() != Some(world.clock.0) {
        return Err(eyre::eyre!(
            "expected '{title}' to carry the frozen completion timestamp, found {:?}",
            card.completed_at()
        ));
    }
    Ok(())
}

#[then(r#"the card "{title}" has no completion timestamp"#)]
fn card_has_no_completion(world: &DragWorld, title: String) -> Result<(), eyre::Report> {
    let card = world
        .find_by_title(&title)
        .ok_or_else(|| eyre::eyre!("card '{title}' not found on the board"))?;
    if card.completed_at().is_some() {
        return Err(eyre::eyre!("expected '{title}' to have no completion timestamp"));
    }
    Ok(())
}
