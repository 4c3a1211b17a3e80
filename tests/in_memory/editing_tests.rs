//! Integration tests for user edits after bootstrap.

use super::helpers::{TaskListHarness, harness};
use chrono::{Duration, Utc};
use eyre::WrapErr;
use rstest::rstest;
use tasklist::task::{
    domain::{TaskDraft, TaskId},
    services::CoordinatorError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_edit_toggle_delete_round(harness: TaskListHarness) -> eyre::Result<()> {
    let TaskListHarness {
        store,
        reminders,
        mut coordinator,
        ..
    } = harness;
    coordinator.bootstrap().await.wrap_err("bootstrap")?;

    let created = coordinator
        .upsert(
            TaskDraft::new("  Pay rent  ")
                .with_reminder_at(Some(Utc::now() + Duration::days(2))),
        )
        .await
        .wrap_err("create")?;
    eyre::ensure!(created.id() == TaskId::new(500), "sequential id expected");
    eyre::ensure!(created.title().as_str() == "Pay rent", "title should be trimmed");
    eyre::ensure!(
        coordinator.all().first().map(|task| task.id()) == Some(created.id()),
        "new task should lead the list"
    );
    eyre::ensure!(reminders.pending_for(created.id()).is_some(), "reminder missing");

    let edited = coordinator
        .upsert(TaskDraft::for_task(&created).with_title("Pay rent and bills"))
        .await
        .wrap_err("edit")?;
    eyre::ensure!(edited.created_at() == created.created_at(), "creation time changed");
    eyre::ensure!(coordinator.all().len() == 4, "edit must not add a task");

    let toggled = coordinator
        .toggle_completed(created.id())
        .await
        .wrap_err("toggle")?;
    eyre::ensure!(toggled.is_completed(), "toggle should complete the task");

    coordinator.delete(created.id()).await.wrap_err("delete")?;
    eyre::ensure!(coordinator.find(created.id()).is_none(), "task still listed");
    eyre::ensure!(reminders.pending().is_empty(), "reminder not cancelled");
    eyre::ensure!(store.commit_count()? == 5, "expected one commit per mutation");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_follows_mutations(harness: TaskListHarness) -> eyre::Result<()> {
    let mut harness = harness;
    let coordinator = &mut harness.coordinator;
    coordinator.bootstrap().await?;

    coordinator.set_query(Some("MOVIE"));
    eyre::ensure!(coordinator.filtered().len() == 1, "one seeded match expected");

    coordinator.upsert(TaskDraft::new("Movie night")).await?;
    let matches: Vec<&str> = coordinator
        .filtered()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    eyre::ensure!(
        matches == vec!["Movie night", "Watch a classic movie"],
        "query should be reapplied after reload, got {matches:?}"
    );

    coordinator.set_query(None);
    eyre::ensure!(coordinator.filtered().len() == 4, "clearing shows every task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_drafts_leave_the_store_untouched(harness: TaskListHarness) -> eyre::Result<()> {
    let mut harness = harness;
    harness.coordinator.bootstrap().await?;
    let commits = harness.store.commit_count()?;

    let result = harness.coordinator.upsert(TaskDraft::new(" \t ")).await;

    eyre::ensure!(
        matches!(result, Err(CoordinatorError::Validation(_))),
        "expected a validation error, got {result:?}"
    );
    eyre::ensure!(harness.store.commit_count()? == commits, "nothing should commit");
    eyre::ensure!(harness.coordinator.all().len() == 3, "list should be unchanged");
    Ok(())
}
