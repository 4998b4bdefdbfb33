//! Complete-todo operation.
//!
//! Completion is archival: the todo moves out of its holding project into
//! the Archive project. There is no toggle-in-place variant, so
//! `completed` and `project_id` can never disagree.

use crate::TodoApp;
use crate::error::TodoError;

impl TodoApp {
    /// Mark a todo completed by moving it into the Archive project.
    ///
    /// The todo's `project_id` is rewritten to the Archive project's id
    /// and `completed` is set. An unknown id is a silent no-op; returns
    /// whether anything was archived.
    pub fn complete_todo(&mut self, todo_id: &str) -> Result<bool, TodoError> {
        let Some(mut todo) = self.data.remove_todo(todo_id) else {
            return Ok(false);
        };

        let archive = self.data.archive_project_mut();
        todo.completed = true;
        todo.project_id = archive.id.clone();
        archive.add_todo(todo);

        self.persist()?;
        Ok(true)
    }
}
