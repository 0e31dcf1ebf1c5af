//! Given steps for drag reconciliation BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::given;

#[given(r#"the "{stage}" stage holds cards "{titles}""#)]
fn stage_holds_cards(
    world: &mut DragWorld,
    stage: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let stage_id = DragWorld::parse_stage(&stage)?;
    world.seed_stage(stage_id, &titles)
}
