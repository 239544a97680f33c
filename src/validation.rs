use crate::error::{RegistraError, Result};
use crate::model::Course;

pub const EMPTY_NAME_MSG: &str = "The course name cannot be empty.";
pub const BAD_CREDITS_MSG: &str = "Credits must be a positive number.";

/// Check a course candidate before it is saved. Checks run in order and the
/// first failure wins; a stored course therefore always has a non-blank name
/// and credits > 0.
pub fn validate_course(course: &Course) -> Result<()> {
    if course.name.trim().is_empty() {
        return Err(RegistraError::Validation(EMPTY_NAME_MSG.to_string()));
    }
    if course.credits <= 0 {
        return Err(RegistraError::Validation(BAD_CREDITS_MSG.to_string()));
    }
    Ok(())
}
