//! Store contract tests: bootstrap, round trip, recovery.

use tempfile::tempdir;
use todo_keeper::{
    ARCHIVE_PROJECT_NAME, DEFAULT_PROJECT_NAME, Project, Storage, Todo, TodoDraft,
};

fn reserved_counts(projects: &[Project]) -> (usize, usize) {
    let defaults = projects
        .iter()
        .filter(|p| p.name == DEFAULT_PROJECT_NAME)
        .count();
    let archives = projects
        .iter()
        .filter(|p| p.name == ARCHIVE_PROJECT_NAME)
        .count();
    (defaults, archives)
}

#[test]
fn test_first_load_bootstraps_and_persists_reserved_projects() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("todo.toml");
    let storage = Storage::new(&path);

    let data = storage.load().unwrap();
    assert_eq!(reserved_counts(&data.projects), (1, 1));

    // The bootstrapped collection was written back at load time.
    assert!(path.exists());
}

#[test]
fn test_save_then_load_round_trips_the_collection() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("todo.toml"));

    let mut data = storage.load().unwrap();
    let mut project = Project::new("Practice Project");
    let mut draft = TodoDraft::new("Learn Webpack");
    draft.description = Some("Setup config and write modules".to_string());
    draft.due_date = Some("2025-07-15".to_string());
    draft.priority = Some("High".to_string());
    draft.checklist = vec!["Setup config".to_string(), "Write modules".to_string()];
    draft.label = Some("Learning".to_string());
    let pid = project.id.clone();
    project.add_todo(Todo::from_draft(draft, &pid));
    data.projects.push(project);

    // A project with zero todos round-trips too.
    data.projects.push(Project::new("Empty"));

    storage.save(&data).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded, data);

    let reloaded_todo = &loaded
        .find_project_by_name("Practice Project")
        .unwrap()
        .todos()[0];
    assert_eq!(
        reloaded_todo.due_date.unwrap().format("%Y-%m-%d").to_string(),
        "2025-07-15"
    );
    assert_eq!(reloaded_todo.checklist.len(), 2);
}

#[test]
fn test_loading_twice_without_mutation_is_idempotent() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("todo.toml"));

    let first = storage.load().unwrap();
    let second = storage.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_corrupt_file_is_discarded_for_a_fresh_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("todo.toml");
    std::fs::write(&path, "this is {{ not [ valid toml").unwrap();

    let storage = Storage::new(&path);
    let data = storage.load().unwrap();
    assert_eq!(reserved_counts(&data.projects), (1, 1));
    assert_eq!(data.todo_count(), 0);

    // The fresh collection replaced the corrupt file.
    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded, data);
}

#[test]
fn test_existing_file_missing_a_reserved_project_is_repaired() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("todo.toml");
    std::fs::write(
        &path,
        r#"
format_version = 1

[[projects]]
id = "p-1"
name = "Default Project"
"#,
    )
    .unwrap();

    let storage = Storage::new(&path);
    let data = storage.load().unwrap();
    assert_eq!(reserved_counts(&data.projects), (1, 1));
}

#[test]
fn test_save_failure_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("missing-subdir").join("todo.toml"));

    // Load cannot write back its bootstrap, so the failure surfaces here.
    assert!(storage.load().is_err());
}
