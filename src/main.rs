//! todo-keeper - Command-line front end
//!
//! The CLI is the UI collaborator for the core: it parses arguments into
//! drafts and action triggers, invokes the mutation operations on
//! [`TodoApp`], and renders the refreshed collection.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_keeper::{TodoApp, TodoDraft, formatting};

/// Local project/todo tracker with durable single-file storage
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the todo data file
    #[arg(long, default_value = "todo.toml")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a todo to a project (Default Project when none is given)
    Add {
        title: String,
        /// Target project, by id or name
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due date, YYYY-MM-DD (unparseable input is ignored)
        #[arg(long)]
        due: Option<String>,
        /// Urgent, High, Normal or Low
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        label: Option<String>,
        /// Checklist sub-item; repeat for several
        #[arg(long = "check", value_name = "ITEM")]
        checklist: Vec<String>,
    },
    /// Complete a todo: moves it into the Archive project
    Done { id: String },
    /// Delete a todo by id
    Rm { id: String },
    /// List one project's todos in display order
    List {
        /// Project to list, by id or name (default: Default Project)
        #[arg(long)]
        project: Option<String>,
    },
    /// List all projects
    Projects,
    /// Create a new project
    NewProject { name: String },
}

/// Resolve a user-supplied project reference (id or display name) to an id.
fn resolve_project_id(app: &TodoApp, reference: &str) -> Option<String> {
    app.find_project(reference)
        .or_else(|| app.find_project_by_name(reference))
        .map(|p| p.id.clone())
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let args = Args::parse();
    let mut app = TodoApp::new(&args.file)?;

    match args.command {
        Command::Add {
            title,
            project,
            description,
            due,
            priority,
            label,
            checklist,
        } => {
            let target = project.as_deref().and_then(|r| resolve_project_id(&app, r));
            let draft = TodoDraft {
                title,
                description,
                due_date: due,
                priority,
                checklist,
                label,
            };
            let id = app.add_todo(target.as_deref(), draft)?;
            println!("Created todo {}", id);
        }
        Command::Done { id } => {
            if app.complete_todo(&id)? {
                println!("Archived todo {}", id);
            } else {
                println!("No todo with id {}", id);
            }
        }
        Command::Rm { id } => {
            if app.delete_todo(&id)? {
                println!("Deleted todo {}", id);
            } else {
                println!("No todo with id {}", id);
            }
        }
        Command::List { project } => {
            if let Some(reference) = project.as_deref() {
                match resolve_project_id(&app, reference) {
                    Some(id) => {
                        app.select_project(&id);
                    }
                    None => println!("Unknown project '{}', showing default", reference),
                }
            }
            match app.active_project() {
                Some(p) => print!("{}", formatting::format_todos(p)),
                None => println!("No projects"),
            }
        }
        Command::Projects => {
            print!("{}", formatting::format_projects(app.projects()));
        }
        Command::NewProject { name } => {
            let id = app.create_project(&name)?;
            println!("Created project {} ({})", name.trim(), id);
        }
    }

    Ok(())
}
