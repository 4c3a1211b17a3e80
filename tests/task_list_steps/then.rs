//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use tasklist::task::services::{BootstrapOutcome, CoordinatorError};

#[then("the list shows {count:usize} tasks")]
fn list_shows(world: &mut TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.coordinator()?.all().len();
    if listed != count {
        return Err(eyre::eyre!("expected {count} tasks, found {listed}"));
    }
    Ok(())
}

#[then(r#"the task "{later}" is listed after "{earlier}""#)]
fn listed_after(
    world: &mut TaskListWorld,
    later: String,
    earlier: String,
) -> Result<(), eyre::Report> {
    let titles: Vec<String> = world
        .coordinator()?
        .all()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    let position = |title: &str| {
        titles
            .iter()
            .position(|listed| listed == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in {titles:?}"))
    };
    if position(&later)? <= position(&earlier)? {
        return Err(eyre::eyre!("expected {later:?} after {earlier:?} in {titles:?}"));
    }
    Ok(())
}

#[then("the bootstrap reports a failed seed")]
fn bootstrap_reports_failed_seed(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .bootstrap_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing bootstrap outcome"))?;
    if !matches!(outcome, BootstrapOutcome::SeedFailed { .. }) {
        return Err(eyre::eyre!("expected SeedFailed, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"the search results are "{title}""#)]
fn search_results_are(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let results: Vec<String> = world
        .coordinator()?
        .filtered()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    if results != vec![title.clone()] {
        return Err(eyre::eyre!("expected only {title:?}, got {results:?}"));
    }
    Ok(())
}

#[then("the save fails with a validation error")]
fn save_fails_validation(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_save
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result"))?;
    if !matches!(result, Err(CoordinatorError::Validation(_))) {
        return Err(eyre::eyre!("expected a validation error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task "{title}" is not completed"#)]
fn task_not_completed(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_titled(&title)?;
    let completed = world
        .coordinator()?
        .find(id)
        .is_some_and(|task| task.is_completed());
    if completed {
        return Err(eyre::eyre!("task {title:?} is still completed"));
    }
    Ok(())
}
