//! User-facing error taxonomy for mutation operations.
//!
//! Validation failures are reported synchronously and leave the in-memory
//! collection untouched. Storage write failures are caught at the store
//! boundary and surfaced here; the in-memory state stays correct even when
//! durability lags. No variant is fatal to the process.

/// Errors returned by the mutation operations on [`crate::TodoApp`].
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("todo title must not be empty")]
    EmptyTitle,
    #[error("project name must not be empty")]
    EmptyProjectName,
    #[error("project name '{0}' is reserved")]
    ReservedProjectName(String),
    #[error("a project named '{0}' already exists")]
    DuplicateProjectName(String),
    #[error("failed to persist projects: {0}")]
    Save(#[source] anyhow::Error),
}
