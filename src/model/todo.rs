use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dates::normalize_due_date;
use crate::id::generate_id;

/// Priority of a todo item.
///
/// Parsing is lenient: text outside the recognized set is preserved as-is
/// in [`Priority::Other`] rather than rejected, consistent with a lenient
/// data-entry tool. Display logic sorts unrecognized values after `Low`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
    /// Unrecognized priority text, carried verbatim.
    Other(String),
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl Priority {
    /// Display-sort rank: Urgent < High < Normal < Low < everything else.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Normal => 2,
            Priority::Low => 3,
            Priority::Other(_) => 4,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Normal => "Normal",
            Priority::Low => "Low",
            Priority::Other(text) => text,
        }
    }
}

impl From<&str> for Priority {
    fn from(text: &str) -> Self {
        match text {
            "Urgent" => Priority::Urgent,
            "High" => Priority::High,
            "Normal" => Priority::Normal,
            "Low" => Priority::Low,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Priorities persist as their plain string form so the stored document
// stays readable and unknown values survive a round trip.
impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Priority::from(text.as_str()))
    }
}

/// Caller-supplied fields for a new todo, before an id is assigned.
///
/// The UI layer fills this from its form fields; `due_date` is the raw
/// user text and is normalized during construction.
#[derive(Debug, Clone, Default)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub checklist: Vec<String>,
    pub label: Option<String>,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    /// Opaque unique id, assigned at construction, immutable afterwards.
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical due date; unparseable input normalizes to `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    /// Stable id of the project currently holding this todo. Rewritten
    /// when the todo is archived.
    pub project_id: String,
    pub completed: bool,
    /// Ordered sub-items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<String>,
    /// Optional classification tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Default for Todo {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            due_date: None,
            priority: Priority::Normal,
            project_id: String::new(),
            completed: false,
            checklist: Vec::new(),
            label: None,
        }
    }
}

impl Todo {
    /// Build a todo from caller-supplied fields.
    ///
    /// Assigns a fresh id, normalizes the raw due-date text (the raw input
    /// is not retained), and defaults the priority to `Normal` when the
    /// caller supplied none. The caller resolves `project_id` first; this
    /// constructor does not validate it.
    pub fn from_draft(draft: TodoDraft, project_id: &str) -> Self {
        let priority = draft
            .priority
            .as_deref()
            .map(Priority::from)
            .unwrap_or_default();

        Self {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            due_date: normalize_due_date(draft.due_date.as_deref()),
            priority,
            project_id: project_id.to_string(),
            completed: false,
            checklist: draft.checklist,
            label: draft.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_assigns_unique_ids() {
        let a = Todo::from_draft(TodoDraft::new("one"), "p-1");
        let b = Todo::from_draft(TodoDraft::new("two"), "p-1");
        assert!(!a.id.is_empty());
        assert!(!b.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_from_draft_normalizes_due_date() {
        let mut draft = TodoDraft::new("dated");
        draft.due_date = Some("2025-07-15".to_string());
        let todo = Todo::from_draft(draft, "p-1");
        assert_eq!(
            todo.due_date.unwrap().format("%Y-%m-%d").to_string(),
            "2025-07-15"
        );

        let mut junk = TodoDraft::new("junk date");
        junk.due_date = Some("next tuesday".to_string());
        let todo = Todo::from_draft(junk, "p-1");
        assert_eq!(todo.due_date, None);
    }

    #[test]
    fn test_from_draft_defaults() {
        let todo = Todo::from_draft(TodoDraft::new("bare"), "p-1");
        assert_eq!(todo.priority, Priority::Normal);
        assert!(!todo.completed);
        assert!(todo.checklist.is_empty());
        assert_eq!(todo.label, None);
        assert_eq!(todo.project_id, "p-1");
    }

    #[test]
    fn test_unrecognized_priority_is_kept_verbatim() {
        let mut draft = TodoDraft::new("odd");
        draft.priority = Some("whenever".to_string());
        let todo = Todo::from_draft(draft, "p-1");
        assert_eq!(todo.priority, Priority::Other("whenever".to_string()));
        assert_eq!(todo.priority.rank(), 4);
    }

    #[test]
    fn test_priority_rank_ordering() {
        assert!(Priority::Urgent.rank() < Priority::High.rank());
        assert!(Priority::High.rank() < Priority::Normal.rank());
        assert!(Priority::Normal.rank() < Priority::Low.rank());
        assert!(Priority::Low.rank() < Priority::Other("?".into()).rank());
    }

    #[test]
    fn test_priority_round_trips_as_plain_string() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            priority: Priority,
        }

        let doc = toml::to_string(&Wrapper {
            priority: Priority::Other("whenever".into()),
        })
        .unwrap();
        assert!(doc.contains("\"whenever\""));

        let back: Wrapper = toml::from_str(&doc).unwrap();
        assert_eq!(back.priority, Priority::Other("whenever".into()));

        let urgent = toml::to_string(&Wrapper {
            priority: Priority::Urgent,
        })
        .unwrap();
        let back: Wrapper = toml::from_str(&urgent).unwrap();
        assert_eq!(back.priority, Priority::Urgent);
    }
}
