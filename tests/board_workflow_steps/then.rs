//! Then steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{TaskDomainError, TaskStatus},
    services::{DashboardStats, DetailExit, TaskStoreError},
};

#[then(r#"the "{status}" column lists "{title}""#)]
fn column_lists(world: &BoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    let column = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let view = world.board.view();
    let listed: Vec<&str> = view
        .columns
        .column(column)
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    if listed != vec![title.as_str()] {
        return Err(eyre::eyre!("{status} column lists {listed:?}, expected {title}"));
    }
    Ok(())
}

#[then(r#"the store reports "{message}""#)]
fn store_reports(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no outcome was reported"))?;
    if last.message() != message {
        return Err(eyre::eyre!("last outcome was {:?}", last.message()));
    }
    Ok(())
}

#[then("the update count is {count:usize}")]
fn update_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let updates = world
        .remote
        .call_counts()
        .map_err(|err| eyre::eyre!("read call counts: {err}"))?
        .update;
    if updates != count {
        return Err(eyre::eyre!("expected {count} updates, saw {updates}"));
    }
    Ok(())
}

#[then("the remote store saw no calls")]
fn no_remote_calls(world: &BoardWorld) -> Result<(), eyre::Report> {
    let calls = world
        .remote
        .call_counts()
        .map_err(|err| eyre::eyre!("read call counts: {err}"))?;
    // The empty board was loaded with one list call.
    if calls.total() != calls.list {
        return Err(eyre::eyre!("unexpected remote calls: {calls:?}"));
    }
    Ok(())
}

#[then("the dashboard completion rate is {rate:usize}")]
fn completion_rate(world: &BoardWorld, rate: usize) -> Result<(), eyre::Report> {
    let stats = DashboardStats::from_snapshot(&world.store.snapshot());
    if stats.completion_rate() != rate {
        return Err(eyre::eyre!("completion rate is {}", stats.completion_rate()));
    }
    Ok(())
}

#[then("creation fails validation")]
fn creation_fails_validation(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    if !matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected an empty title error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the board error is "{message}""#)]
fn board_error_is(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let view = world.board.view();
    if view.error.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!("board error is {:?}", view.error));
    }
    Ok(())
}

#[then("the detail view returns to the board")]
fn detail_returns_to_board(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.last_exit != Some(DetailExit::ReturnToBoard) {
        return Err(eyre::eyre!("detail exit was {:?}", world.last_exit));
    }
    let id = world.task()?.id();
    if world.store.snapshot().contains(id) {
        return Err(eyre::eyre!("deleted task is still on the board"));
    }
    Ok(())
}

#[then("fetching the task by id reports it missing")]
fn fetch_reports_missing(world: &BoardWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    match run_async(world.store.fetch_one(id)) {
        Err(TaskStoreError::NotFound(missing)) if missing == id => Ok(()),
        other => Err(eyre::eyre!("expected not found, got {other:?}")),
    }
}
