//! Delete-todo operation.

use crate::TodoApp;
use crate::error::TodoError;

impl TodoApp {
    /// Remove a todo from whichever project currently holds it.
    ///
    /// Deleting an unknown id is a silent no-op and does not rewrite the
    /// stored collection. Returns whether anything was removed.
    pub fn delete_todo(&mut self, todo_id: &str) -> Result<bool, TodoError> {
        if self.data.remove_todo(todo_id).is_none() {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }
}
