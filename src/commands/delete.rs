use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RegistraError, Result};
use crate::store::CourseStore;
use uuid::Uuid;

pub fn run<S: CourseStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    if !store.delete_course(id)? {
        return Err(RegistraError::CourseNotFound(id.to_string()));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Course deleted."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn removes_course_so_a_later_find_is_absent() {
        let fixture = CatalogFixture::new().with_course("Algebra", None, 3);
        let mut store = fixture.store;
        let id = fixture.ids[0];

        run(&mut store, &id).unwrap();
        assert!(store.find_course(&id).unwrap().is_none());
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let fixture = CatalogFixture::new().with_course("Algebra", None, 3);
        let mut store = fixture.store;

        let err = run(&mut store, &Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, RegistraError::CourseNotFound(_)));
        assert_eq!(store.list_courses().unwrap().len(), 1);
    }
}
