//! Validation for user-supplied titles and project names.
//!
//! Failed validation never mutates the collection; callers return the
//! error before touching any state.

use crate::error::TodoError;
use crate::model::{ARCHIVE_PROJECT_NAME, ProjectList};

/// A todo title must contain at least one non-whitespace character.
pub fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    Ok(())
}

/// A new project name must be non-blank, must not be the reserved
/// "Archive" name, and must not duplicate an existing project's name.
pub fn validate_project_name(name: &str, data: &ProjectList) -> Result<(), TodoError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyProjectName);
    }
    if trimmed == ARCHIVE_PROJECT_NAME {
        return Err(TodoError::ReservedProjectName(trimmed.to_string()));
    }
    if data.find_project_by_name(trimmed).is_some() {
        return Err(TodoError::DuplicateProjectName(trimmed.to_string()));
    }
    Ok(())
}
