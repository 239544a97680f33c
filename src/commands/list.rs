use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CourseStore;

pub fn run<S: CourseStore>(store: &S) -> Result<CmdResult> {
    let mut courses = store.list_courses()?;
    // Store order is unspecified; sort for stable display
    courses.sort_by_key(|c| c.name.to_lowercase());
    Ok(CmdResult::default().with_listed_courses(courses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn lists_all_courses_sorted_by_name() {
        let fixture = CatalogFixture::new()
            .with_course("zoology", None, 2)
            .with_course("Algebra", Some("Lee"), 3)
            .with_course("Botany", None, 4);

        let result = run(&fixture.store).unwrap();
        let names: Vec<_> = result.listed_courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Algebra", "Botany", "zoology"]);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let fixture = CatalogFixture::new();
        assert!(run(&fixture.store).unwrap().listed_courses.is_empty());
    }
}
