use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RegistraError, Result};
use crate::model::{Course, CourseDraft};
use crate::store::CourseStore;
use crate::validation::validate_course;
use chrono::Utc;
use uuid::Uuid;

pub fn run<S: CourseStore>(store: &mut S, id: &Uuid, draft: &CourseDraft) -> Result<CmdResult> {
    let mut course = store
        .find_course(id)?
        .ok_or_else(|| RegistraError::CourseNotFound(id.to_string()))?;

    apply_overrides(&mut course, draft);
    validate_course(&course)?;
    course.updated_at = Utc::now();
    store.save_course(&course)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Course updated: {}",
        course.name
    )));
    result.affected_courses.push(course);
    Ok(result)
}

/// Blank fields and non-positive credits mean "keep the current value".
fn apply_overrides(course: &mut Course, draft: &CourseDraft) {
    if !draft.name.trim().is_empty() {
        course.name = draft.name.trim().to_string();
    }
    if !draft.instructor.trim().is_empty() {
        course.instructor = Some(draft.instructor.trim().to_string());
    }
    if draft.credits > 0 {
        course.credits = draft.credits;
    }
}
