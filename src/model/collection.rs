use serde::{Deserialize, Serialize};

use crate::model::project::Project;
use crate::model::todo::Todo;

/// Name of the project that receives todos when no target is given.
pub const DEFAULT_PROJECT_NAME: &str = "Default Project";

/// Reserved name of the project that holds completed todos. Users cannot
/// create a project with this name.
pub const ARCHIVE_PROJECT_NAME: &str = "Archive";

/// Version written into every persisted document. No older format exists,
/// so nothing is migrated on read; the field is there for future readers.
pub const FORMAT_VERSION: u32 = 1;

/// The full ordered sequence of projects: the unit of persistence.
///
/// A `Vec` keeps insertion order, which keeps the serialized document
/// stable and makes iteration order predictable for display. Lookups are
/// linear scans; the collection is a personal todo list, not a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectList {
    pub format_version: u32,
    pub projects: Vec<Project>,
}

impl Default for ProjectList {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            projects: Vec::new(),
        }
    }
}

impl ProjectList {
    /// An empty collection with no projects at all. The store bootstraps
    /// the reserved projects before handing a collection to callers.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty collection carrying the two reserved projects.
    pub fn bootstrapped() -> Self {
        let mut list = Self::new();
        list.ensure_reserved_projects();
        list
    }

    /// Create the "Default Project" and "Archive" projects when absent.
    ///
    /// Returns true when anything was added, so the caller knows to
    /// persist. After this returns, exactly one project carries each
    /// reserved name (neither is ever deleted elsewhere).
    pub fn ensure_reserved_projects(&mut self) -> bool {
        let mut changed = false;
        if self.find_project_by_name(DEFAULT_PROJECT_NAME).is_none() {
            self.projects.push(Project::new(DEFAULT_PROJECT_NAME));
            changed = true;
        }
        if self.find_project_by_name(ARCHIVE_PROJECT_NAME).is_none() {
            self.projects.push(Project::new(ARCHIVE_PROJECT_NAME));
            changed = true;
        }
        changed
    }

    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn find_project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == project_id)
    }

    pub fn find_project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// The default project, created on demand if something removed it.
    pub fn default_project_mut(&mut self) -> &mut Project {
        self.reserved_project_mut(DEFAULT_PROJECT_NAME)
    }

    /// The archive project, created on demand if something removed it.
    pub fn archive_project_mut(&mut self) -> &mut Project {
        self.reserved_project_mut(ARCHIVE_PROJECT_NAME)
    }

    fn reserved_project_mut(&mut self, name: &str) -> &mut Project {
        if self.find_project_by_name(name).is_none() {
            self.projects.push(Project::new(name));
        }
        let pos = self
            .projects
            .iter()
            .position(|p| p.name == name)
            .unwrap_or(0);
        &mut self.projects[pos]
    }

    /// Find a todo anywhere in the collection, with its holding project.
    pub fn find_todo(&self, todo_id: &str) -> Option<(&Project, &Todo)> {
        self.projects
            .iter()
            .find_map(|p| p.find_todo(todo_id).map(|t| (p, t)))
    }

    /// Remove a todo from whichever project holds it. Missing ids are a
    /// silent no-op yielding `None`.
    pub fn remove_todo(&mut self, todo_id: &str) -> Option<Todo> {
        self.projects
            .iter_mut()
            .find_map(|p| p.remove_todo(todo_id))
    }

    pub fn todo_count(&self) -> usize {
        self.projects.iter().map(|p| p.todos().len()).sum()
    }
}
