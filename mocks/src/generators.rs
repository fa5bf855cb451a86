//! Random test data generators using the fake crate
//!
//! Provides realistic random titles and descriptions plus proptest
//! strategies for property-based tests.

use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use proptest::prelude::*;
use rand::Rng;
use task_core::{NewTask, UpdateTask};

/// Generate a realistic task title
pub fn generate_task_title() -> String {
    Sentence(2..6).fake()
}

/// Generate a realistic task description
pub fn generate_task_description() -> String {
    Paragraph(1..3).fake()
}

/// Generate a random creation payload
pub fn generate_random_new_task() -> NewTask {
    let mut rng = rand::thread_rng();
    let description = rng.gen_bool(0.5).then(generate_task_description);
    NewTask::new(generate_task_title(), description).with_done(rng.gen_bool(0.2))
}

/// Generate `count` random creation payloads
pub fn generate_new_tasks(count: usize) -> Vec<NewTask> {
    (0..count).map(|_| generate_random_new_task()).collect()
}

/// Strategy for titles that survive trimming
pub fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,40}".prop_map(|s| s.trim_end().to_string())
}

/// Strategy for valid creation payloads
pub fn new_task_strategy() -> impl Strategy<Value = NewTask> {
    (
        title_strategy(),
        proptest::option::of("[a-z ]{0,60}"),
        any::<bool>(),
    )
        .prop_map(|(title, description, done)| {
            NewTask::new(title, description.map(|d| d.trim().to_string())).with_done(done)
        })
}

/// Strategy for arbitrary update payloads, including empty ones
pub fn update_task_strategy() -> impl Strategy<Value = UpdateTask> {
    (
        proptest::option::of(title_strategy()),
        proptest::option::of("[a-z]{0,20}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(title, description, done)| UpdateTask {
            title,
            description,
            done,
        })
}
