//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for every
//! catalog operation regardless of the UI driving it. The facade dispatches
//! to `commands/*`, normalizes raw id strings into `Uuid`s, and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O, no
//! presentation concerns live here.

use crate::commands;
use crate::error::{RegistraError, Result};
use crate::model::CourseDraft;
use crate::store::CourseStore;
use uuid::Uuid;

/// The main facade for catalog operations.
///
/// Generic over `CourseStore` to allow different storage backends:
/// `FileStore` in production, `InMemoryStore` in tests and ephemeral runs.
pub struct RegistraApi<S: CourseStore> {
    store: S,
}

impl<S: CourseStore> RegistraApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_course(&mut self, draft: CourseDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_courses(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_course(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, &parse_id(id)?)
    }

    pub fn update_course(&mut self, id: &str, draft: &CourseDraft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &parse_id(id)?, draft)
    }

    pub fn delete_course(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &parse_id(id)?)
    }
}

// Ids are system-assigned v4 UUIDs, so a string that does not parse can
// never name a stored course; report it as not found.
fn parse_id(input: &str) -> Result<Uuid> {
    Uuid::parse_str(input.trim())
        .map_err(|_| RegistraError::CourseNotFound(input.trim().to_string()))
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
