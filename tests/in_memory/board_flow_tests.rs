//! Board gestures and dashboard counts over a live store.

use std::sync::Arc;

use super::helpers::{Board, board, seed, titles};
use eyre::OptionExt;
use rstest::rstest;
use taskboard::task::{
    domain::TaskStatus,
    services::{BoardReconciler, DashboardStats, DragEvent, DragResolution},
};

fn drop_on(target: &str) -> DragEvent {
    DragEvent::Ended {
        over: Some(target.to_owned()),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_across_columns_updates_board_and_dashboard(board: Board) -> eyre::Result<()> {
    let created = seed(
        &board.store,
        &[("Design", TaskStatus::Todo), ("Review", TaskStatus::Todo)],
    )
    .await?;
    let design = created.first().ok_or_eyre("missing seeded task")?;
    let mut reconciler = BoardReconciler::new(Arc::clone(&board.store));

    for target in ["DOING", "DONE"] {
        reconciler
            .handle(DragEvent::Started {
                task_id: design.id(),
            })
            .await?;
        let resolution = reconciler.handle(drop_on(target)).await?;
        eyre::ensure!(
            matches!(resolution, DragResolution::Move(_)),
            "drop on {target} should move the task"
        );
    }

    let view = reconciler.view();
    eyre::ensure!(
        titles(view.columns.column(TaskStatus::Done)) == vec!["Design"],
        "Design should be done"
    );
    eyre::ensure!(
        titles(view.columns.column(TaskStatus::Todo)) == vec!["Review"],
        "Review should stay in todo"
    );
    let stats = DashboardStats::from_snapshot(&board.store.snapshot());
    eyre::ensure!(stats.total == 2 && stats.done == 1, "unexpected stats {stats:?}");
    eyre::ensure!(stats.completion_rate() == 50, "half the board is done");
    eyre::ensure!(board.remote.call_counts()?.update == 2, "expected two updates");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drop_on_same_column_or_card_writes_nothing(board: Board) -> eyre::Result<()> {
    let created = seed(&board.store, &[("Steady", TaskStatus::Doing)]).await?;
    let task = created.first().ok_or_eyre("missing seeded task")?;
    let mut reconciler = BoardReconciler::new(Arc::clone(&board.store));
    let before = board.store.snapshot();

    for target in ["DOING", "card-42"] {
        reconciler
            .handle(DragEvent::Started { task_id: task.id() })
            .await?;
        reconciler.handle(drop_on(target)).await?;
    }

    eyre::ensure!(board.remote.call_counts()?.update == 0, "no update expected");
    eyre::ensure!(board.store.snapshot() == before, "snapshot should not change");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_buttons_move_between_columns(board: Board) -> eyre::Result<()> {
    let created = seed(&board.store, &[("Button", TaskStatus::Todo)]).await?;
    let task = created.first().ok_or_eyre("missing seeded task")?;
    let reconciler = BoardReconciler::new(Arc::clone(&board.store));

    let moved = reconciler
        .change_status(task.id(), TaskStatus::Done)
        .await?
        .ok_or_eyre("task should move")?;

    eyre::ensure!(moved.status() == TaskStatus::Done, "status not applied");
    let stats = DashboardStats::from_snapshot(&board.store.snapshot());
    eyre::ensure!(stats.completion_rate() == 100, "board should be complete");
    Ok(())
}
