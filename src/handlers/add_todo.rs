//! Add-todo operation.

use crate::TodoApp;
use crate::error::TodoError;
use crate::model::{Todo, TodoDraft};
use crate::validation;

impl TodoApp {
    /// Construct a todo from the draft and append it to a project.
    ///
    /// The target is resolved by project id. `None` targets the session's
    /// active project; an unresolvable reference falls back to the
    /// Default Project. Returns the new todo's id.
    pub fn add_todo(
        &mut self,
        project_id: Option<&str>,
        draft: TodoDraft,
    ) -> Result<String, TodoError> {
        validation::validate_title(&draft.title)?;

        let resolved = match project_id {
            Some(id) => self.data.find_project(id).map(|p| p.id.clone()),
            None => self.active_project().map(|p| p.id.clone()),
        };
        let target_id = match resolved {
            Some(id) => id,
            None => self.data.default_project_mut().id.clone(),
        };

        let todo = Todo::from_draft(draft, &target_id);
        let todo_id = todo.id.clone();
        if let Some(project) = self.data.find_project_mut(&target_id) {
            project.add_todo(todo);
        }

        self.persist()?;
        Ok(todo_id)
    }
}
