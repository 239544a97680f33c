//! # View Layer
//!
//! Console I/O lives behind the [`CourseView`] trait so the controller can
//! be driven by a scripted double in tests. [`console::ConsoleView`] is the
//! production implementation over stdin/stdout.

use crate::commands::CmdMessage;
use crate::model::{Course, CourseDraft};

pub mod console;
#[cfg(any(test, feature = "test_utils"))]
pub mod scripted;

/// A parsed menu selection. Anything outside 1..=5 (including input that is
/// not an integer at all) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Exit,
    Unknown,
}

impl From<i32> for MenuChoice {
    fn from(option: i32) -> Self {
        match option {
            1 => MenuChoice::Add,
            2 => MenuChoice::List,
            3 => MenuChoice::Update,
            4 => MenuChoice::Delete,
            5 => MenuChoice::Exit,
            _ => MenuChoice::Unknown,
        }
    }
}

/// Abstract interface between the controller and the user.
pub trait CourseView {
    /// Render the menu and return the selected option
    fn menu_choice(&mut self) -> MenuChoice;

    /// Collect name / instructor / credits for a course candidate
    fn course_draft(&mut self) -> CourseDraft;

    /// Collect a course identifier string
    fn course_id(&mut self) -> String;

    /// Display a collection of courses
    fn render_courses(&mut self, courses: &[Course]);

    /// Display a status or error line
    fn show_message(&mut self, message: &CmdMessage);
}
