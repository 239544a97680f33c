use super::CourseStore;
use crate::error::Result;
use crate::model::Course;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory catalog for testing and `--ephemeral` runs.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    courses: HashMap<Uuid, Course>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CourseStore for InMemoryStore {
    fn save_course(&mut self, course: &Course) -> Result<()> {
        self.courses.insert(course.id, course.clone());
        Ok(())
    }

    fn find_course(&self, id: &Uuid) -> Result<Option<Course>> {
        Ok(self.courses.get(id).cloned())
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.courses.values().cloned().collect())
    }

    fn delete_course(&mut self, id: &Uuid) -> Result<bool> {
        Ok(self.courses.remove(id).is_some())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct CatalogFixture {
        pub store: InMemoryStore,
        pub ids: Vec<Uuid>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                ids: Vec::new(),
            }
        }

        pub fn with_course(mut self, name: &str, instructor: Option<&str>, credits: i32) -> Self {
            let course = Course::new(
                name.to_string(),
                instructor.map(|i| i.to_string()),
                credits,
            );
            self.ids.push(course.id);
            self.store.save_course(&course).unwrap();
            self
        }

        pub fn with_courses(mut self, count: usize) -> Self {
            for i in 0..count {
                let course = Course::new(format!("Course {}", i + 1), None, 3);
                self.ids.push(course.id);
                self.store.save_course(&course).unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_find_round_trips() {
        let mut store = InMemoryStore::new();
        let course = Course::new("Algebra".into(), Some("Lee".into()), 3);
        store.save_course(&course).unwrap();

        let found = store.find_course(&course.id).unwrap().unwrap();
        assert_eq!(found.name, "Algebra");
        assert_eq!(found.instructor.as_deref(), Some("Lee"));
    }

    #[test]
    fn save_with_same_id_overwrites() {
        let mut store = InMemoryStore::new();
        let mut course = Course::new("Algebra".into(), None, 3);
        store.save_course(&course).unwrap();

        course.credits = 4;
        store.save_course(&course).unwrap();

        assert_eq!(store.list_courses().unwrap().len(), 1);
        assert_eq!(store.find_course(&course.id).unwrap().unwrap().credits, 4);
    }

    #[test]
    fn delete_reports_whether_removed() {
        let mut store = InMemoryStore::new();
        let course = Course::new("Algebra".into(), None, 3);
        store.save_course(&course).unwrap();

        assert!(store.delete_course(&course.id).unwrap());
        assert!(!store.delete_course(&course.id).unwrap());
        assert!(store.find_course(&course.id).unwrap().is_none());
    }
}
