//! When steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::TaskStatus,
    services::{CreateTaskRequest, DragEvent},
};

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut BoardWorld, title: String) {
    let result = run_async(world.store.create(CreateTaskRequest::new(title)));
    if let Ok(ref created) = result {
        world.current_task = Some(created.clone());
    }
    world.last_create = Some(result);
}

#[when(r#"the task is moved to "{status}" with the status buttons"#)]
fn move_with_buttons(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let to = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.task()?.id();
    let moved = run_async(world.board.change_status(id, to))
        .wrap_err("move task with status buttons")?
        .ok_or_else(|| eyre::eyre!("status buttons did not move the task"))?;
    world.current_task = Some(moved);
    Ok(())
}

#[when(r#"the task is dragged onto "{target}""#)]
fn drag_task(world: &mut BoardWorld, target: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    run_async(world.board.handle(DragEvent::Started { task_id })).wrap_err("pick up task")?;
    run_async(world.board.handle(DragEvent::Ended { over: Some(target) }))
        .wrap_err("drop task")?;
    Ok(())
}

#[when("the task is opened in the detail view")]
fn open_detail(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let state = run_async(world.detail.resolve(id));
    if state.task().is_none() {
        return Err(eyre::eyre!("detail view did not resolve the task"));
    }
    Ok(())
}

#[when("the task is deleted from the detail view")]
fn delete_from_detail(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let exit = run_async(world.detail.delete()).wrap_err("delete from detail view")?;
    world.last_exit = Some(exit);
    Ok(())
}
