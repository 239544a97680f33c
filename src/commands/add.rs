use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Course, CourseDraft};
use crate::store::CourseStore;
use crate::validation::validate_course;

pub fn run<S: CourseStore>(store: &mut S, draft: CourseDraft) -> Result<CmdResult> {
    let instructor = if draft.instructor.trim().is_empty() {
        None
    } else {
        Some(draft.instructor.trim().to_string())
    };
    let course = Course::new(draft.name.trim().to_string(), instructor, draft.credits);
    validate_course(&course)?;
    store.save_course(&course)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Course added with ID: {}",
        course.id
    )));
    result.affected_courses.push(course);
    Ok(result)
}
