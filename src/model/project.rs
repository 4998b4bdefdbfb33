use serde::{Deserialize, Serialize};

use crate::id::generate_id;
use crate::model::todo::Todo;

/// A named, ordered collection of todos.
///
/// `name` is unique across the collection; uniqueness is enforced by the
/// create-project operation, not here. Insertion order of `todos` is
/// preserved; display order is a separate, computed sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl Project {
    /// Create an empty project with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Append a todo at the end of the sequence. No de-duplication.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// The current ordered todo sequence. Callers treat it as read-only;
    /// this is not a defensive copy.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Remove and return the todo with the given id. Missing ids are a
    /// silent no-op yielding `None`.
    pub fn remove_todo(&mut self, todo_id: &str) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == todo_id)?;
        Some(self.todos.remove(pos))
    }

    /// Find a todo by id.
    pub fn find_todo(&self, todo_id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }
}
