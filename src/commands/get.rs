use crate::commands::CmdResult;
use crate::error::{RegistraError, Result};
use crate::store::CourseStore;
use uuid::Uuid;

pub fn run<S: CourseStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let course = store
        .find_course(id)?
        .ok_or_else(|| RegistraError::CourseNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_affected_courses(vec![course]))
}
