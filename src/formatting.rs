//! Display helpers: priority ordering and plain-text rendering.
//!
//! Display order is computed on every render and never persisted; the
//! stored sequence keeps insertion order.

use crate::model::{Project, Todo};

/// Order todos for display: `Urgent < High < Normal < Low`, with
/// unrecognized priorities after `Low`. The sort is stable, so todos with
/// equal priority keep their insertion order.
pub fn sorted_for_display(todos: &[Todo]) -> Vec<&Todo> {
    let mut sorted: Vec<&Todo> = todos.iter().collect();
    sorted.sort_by_key(|t| t.priority.rank());
    sorted
}

/// Render one project's todos as a display string.
pub fn format_todos(project: &Project) -> String {
    let todos = sorted_for_display(project.todos());
    if todos.is_empty() {
        return format!("{}: no tasks yet", project.name);
    }

    let mut result = format!("{} ({} task(s)):\n", project.name, todos.len());
    for todo in todos {
        let marker = if todo.completed { "x" } else { " " };
        result.push_str(&format!(
            "- [{}] {} [{}] ({})\n",
            marker, todo.title, todo.priority, todo.id
        ));
        if let Some(ref description) = todo.description {
            result.push_str(&format!("      {}\n", description));
        }
        if let Some(due) = todo.due_date {
            result.push_str(&format!("      due: {}\n", due.format("%Y-%m-%d")));
        }
        if let Some(ref label) = todo.label {
            result.push_str(&format!("      label: {}\n", label));
        }
        for item in &todo.checklist {
            result.push_str(&format!("      * {}\n", item));
        }
    }
    result
}

/// Render the project overview as a display string.
pub fn format_projects(projects: &[Project]) -> String {
    let mut result = format!("{} project(s):\n", projects.len());
    for project in projects {
        result.push_str(&format!(
            "- {} ({} task(s), id: {})\n",
            project.name,
            project.todos().len(),
            project.id
        ));
    }
    result
}
