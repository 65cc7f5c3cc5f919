//! Given steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.store.fetch_all()).wrap_err("load the empty board")?;
    Ok(())
}

#[given(r#"a board with a task titled "{title}""#)]
fn board_with_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    run_async(world.store.fetch_all()).wrap_err("load the board")?;
    let created = run_async(world.store.create(CreateTaskRequest::new(title)))
        .wrap_err("seed task for scenario")?;
    world.current_task = Some(created);
    Ok(())
}
