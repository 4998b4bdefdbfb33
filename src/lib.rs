//! todo-keeper library
//!
//! A local, single-user task tracker: projects hold ordered todos, and the
//! whole collection persists in one TOML file across sessions.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Session layer**: [`TodoApp`] - owns the collection and the UI-facing
//!   mutation operations (`src/handlers/`)
//! - **Domain layer**: `model` module - todos, projects, and the collection
//! - **Persistence layer**: `storage` module - file-based TOML storage
//!
//! Front ends (the bundled CLI, or any other UI) translate user gestures
//! into calls on [`TodoApp`] and re-render from the refreshed collection
//! after every mutation.
//!
//! # Example
//!
//! ```no_run
//! use todo_keeper::{TodoApp, TodoDraft};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut app = TodoApp::new("todo.toml")?;
//!     let id = app.add_todo(None, TodoDraft::new("Learn Webpack"))?;
//!     app.complete_todo(&id)?;
//!     Ok(())
//! }
//! ```

mod dates;
mod error;
pub mod formatting;
mod handlers;
mod id;
mod model;
mod storage;
mod validation;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used types
pub use dates::normalize_due_date;
pub use error::TodoError;
pub use id::generate_id;
pub use model::{
    ARCHIVE_PROJECT_NAME, DEFAULT_PROJECT_NAME, Priority, Project, ProjectList, Todo, TodoDraft,
};
pub use storage::Storage;

/// One UI session over the project collection.
///
/// Owns the in-memory [`ProjectList`], the [`Storage`] it persists
/// through, and the active-project selection. The selection is session
/// state only: it determines which project is displayed and where new
/// todos land by default, and is never written to disk. Sessions are
/// plain values, so tests and multiple UI instances run in isolation.
pub struct TodoApp {
    pub(crate) data: ProjectList,
    pub(crate) storage: Storage,
    active_project_id: Option<String>,
}

impl TodoApp {
    /// Open a session against the given data file.
    ///
    /// Loads the collection through the store, which bootstraps the
    /// "Default Project" and "Archive" projects on first load and
    /// recovers from a corrupt file by starting fresh.
    pub fn new(storage_path: impl AsRef<Path>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = storage.load()?;
        Ok(Self {
            data,
            storage,
            active_project_id: None,
        })
    }

    /// The full ordered project collection.
    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.data.find_project(project_id)
    }

    pub fn find_project_by_name(&self, name: &str) -> Option<&Project> {
        self.data.find_project_by_name(name)
    }

    /// Find a todo anywhere in the collection, with its holding project.
    pub fn find_todo(&self, todo_id: &str) -> Option<(&Project, &Todo)> {
        self.data.find_todo(todo_id)
    }

    /// Select the project the UI is working in. Session state only, never
    /// persisted. An unknown id leaves the previous selection in place;
    /// returns whether the selection changed.
    pub fn select_project(&mut self, project_id: &str) -> bool {
        if self.data.find_project(project_id).is_none() {
            return false;
        }
        self.active_project_id = Some(project_id.to_string());
        true
    }

    /// The currently selected project, falling back to the Default
    /// Project (or the first project) when nothing valid is selected.
    pub fn active_project(&self) -> Option<&Project> {
        if let Some(ref id) = self.active_project_id
            && let Some(project) = self.data.find_project(id)
        {
            return Some(project);
        }
        self.data
            .find_project_by_name(DEFAULT_PROJECT_NAME)
            .or_else(|| self.data.projects.first())
    }

    /// Persist the whole collection; every mutation funnels through here.
    ///
    /// A failed write leaves the in-memory collection intact and correct;
    /// durability lags until the next successful save.
    pub(crate) fn persist(&self) -> Result<(), TodoError> {
        self.storage.save(&self.data).map_err(TodoError::Save)
    }
}
