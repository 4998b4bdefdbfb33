//! Core data model: todos, projects, and the persisted collection.

mod collection;
mod project;
mod todo;

pub use collection::{
    ARCHIVE_PROJECT_NAME, DEFAULT_PROJECT_NAME, FORMAT_VERSION, ProjectList,
};
pub use project::Project;
pub use todo::{Priority, Todo, TodoDraft};
