//! Mutation operations, one file per operation.
//!
//! Each operation follows the same shape: validate, mutate the in-memory
//! collection, persist the whole collection, report.

mod add_todo;
mod complete_todo;
mod create_project;
mod delete_todo;
