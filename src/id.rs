//! Opaque identifier generation for projects and todos.

use uuid::Uuid;

/// Generate a fresh opaque identifier.
///
/// Identifiers are UUID v4 strings, unique across the process (and in
/// practice across every process) with overwhelming probability. Ids are
/// assigned once at entity construction and never reused, even after the
/// entity is deleted.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
