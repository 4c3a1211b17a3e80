//! Given steps for task list BDD scenarios.

use super::world::{TaskListWorld, bootstrap_world};
use rstest_bdd_macros::given;
use tasklist::task::{
    adapters::memory::InMemorySeedSource, domain::RemoteTodoRecord, ports::NetworkError,
};

#[given(r#"a seed source offering "{first}" and "{second}""#)]
fn seed_source_offering(world: &mut TaskListWorld, first: String, second: String) {
    let records = [first, second]
        .into_iter()
        .zip(1..)
        .map(|(todo, id)| RemoteTodoRecord {
            id,
            todo,
            completed: false,
            user_id: 1,
        })
        .collect();
    world.seed = Some(InMemorySeedSource::with_records(records));
}

#[given("a seed source that answers with status {status:u16}")]
fn seed_source_failing(world: &mut TaskListWorld, status: u16) {
    world.seed = Some(InMemorySeedSource::failing(NetworkError::BadStatus(status)));
}

#[given("the task list is bootstrapped")]
fn task_list_bootstrapped(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    bootstrap_world(world)
}
