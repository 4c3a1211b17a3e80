//! Integration tests for first-launch seeding.

use super::helpers::{TaskListHarness, harness};
use eyre::WrapErr;
use rstest::rstest;
use tasklist::task::{ports::TaskStore, services::BootstrapOutcome};

fn titles(harness: &TaskListHarness) -> Vec<String> {
    harness
        .coordinator
        .all()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_launch_seeds_then_relaunch_loads(harness: TaskListHarness) -> eyre::Result<()> {
    let mut first = harness;
    let first_outcome = first
        .coordinator
        .bootstrap()
        .await
        .wrap_err("first bootstrap")?;
    eyre::ensure!(
        matches!(first_outcome, BootstrapOutcome::Seeded { count: 3 }),
        "expected three seeded tasks, got {first_outcome:?}"
    );
    eyre::ensure!(first.store.commit_count()? == 1, "seed should be one commit");

    let mut second = first.relaunch();
    let second_outcome = second
        .coordinator
        .bootstrap()
        .await
        .wrap_err("second bootstrap")?;
    eyre::ensure!(
        matches!(second_outcome, BootstrapOutcome::Loaded { count: 3 }),
        "expected stored tasks to load, got {second_outcome:?}"
    );
    eyre::ensure!(second.seed.fetch_count() == 0, "relaunch must not fetch");
    eyre::ensure!(
        titles(&first) == titles(&second),
        "relaunch should list the same tasks in the same order"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_tasks_keep_remote_completion(harness: TaskListHarness) -> eyre::Result<()> {
    let mut harness = harness;
    harness.coordinator.bootstrap().await?;

    let completed: Vec<i64> = harness
        .coordinator
        .all()
        .iter()
        .filter(|task| task.is_completed())
        .map(|task| task.id().value())
        .collect();
    eyre::ensure!(completed == vec![2], "unexpected completed ids {completed:?}");

    let stored = harness.store.fetch_all().await?;
    eyre::ensure!(
        stored.as_slice() == harness.coordinator.all(),
        "displayed list should mirror the store"
    );
    Ok(())
}
