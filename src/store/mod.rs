//! # Storage Layer
//!
//! The [`CourseStore`] trait abstracts the course catalog so the command
//! layer never touches persistence details.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, the whole catalog as a JSON map
//!   in a single file (`courses.json` by default) inside a data directory.
//! - [`memory::InMemoryStore`]: no persistence; used by tests and the
//!   `--ephemeral` flag.
//!
//! Identifiers are system-assigned UUIDs, so `save_course` is a plain upsert
//! with no uniqueness conflicts to handle.

use crate::error::Result;
use crate::model::Course;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for course storage.
pub trait CourseStore {
    /// Save a course (insert or overwrite by id)
    fn save_course(&mut self, course: &Course) -> Result<()>;

    /// Look up a course by id; absence is a normal outcome
    fn find_course(&self, id: &Uuid) -> Result<Option<Course>>;

    /// All stored courses, order unspecified
    fn list_courses(&self) -> Result<Vec<Course>>;

    /// Remove a course; returns whether a record was removed
    fn delete_course(&mut self, id: &Uuid) -> Result<bool>;
}
