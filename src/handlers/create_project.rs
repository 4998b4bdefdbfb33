//! Create-project operation.

use crate::TodoApp;
use crate::error::TodoError;
use crate::model::Project;
use crate::validation;

impl TodoApp {
    /// Create a new, empty project and persist the collection.
    ///
    /// Fails with a validation error when the name is blank, reserved
    /// ("Archive"), or already taken; the collection is untouched in that
    /// case. Returns the new project's id.
    pub fn create_project(&mut self, name: &str) -> Result<String, TodoError> {
        validation::validate_project_name(name, &self.data)?;

        let project = Project::new(name.trim());
        let project_id = project.id.clone();
        self.data.projects.push(project);
        self.persist()?;
        Ok(project_id)
    }
}
