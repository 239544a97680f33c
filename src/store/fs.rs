use super::CourseStore;
use crate::error::{RegistraError, Result};
use crate::model::Course;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const DEFAULT_DATA_FILE: &str = "courses.json";

/// File-backed catalog: the whole course map serialized as JSON in a single
/// file inside the data directory. The catalog is small enough that loading
/// and rewriting it per operation keeps the store trivially consistent.
pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.data_file = name.to_string();
        }
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RegistraError::Io)?;
        }
        Ok(())
    }

    fn load_catalog(&self) -> Result<HashMap<Uuid, Course>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(RegistraError::Io)?;
        let catalog: HashMap<Uuid, Course> =
            serde_json::from_str(&content).map_err(RegistraError::Serialization)?;
        Ok(catalog)
    }

    fn save_catalog(&self, catalog: &HashMap<Uuid, Course>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(catalog).map_err(RegistraError::Serialization)?;
        fs::write(self.data_path(), content).map_err(RegistraError::Io)?;
        Ok(())
    }
}

impl CourseStore for FileStore {
    fn save_course(&mut self, course: &Course) -> Result<()> {
        let mut catalog = self.load_catalog()?;
        catalog.insert(course.id, course.clone());
        self.save_catalog(&catalog)
    }

    fn find_course(&self, id: &Uuid) -> Result<Option<Course>> {
        Ok(self.load_catalog()?.remove(id))
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.load_catalog()?.into_values().collect())
    }

    fn delete_course(&mut self, id: &Uuid) -> Result<bool> {
        let mut catalog = self.load_catalog()?;
        if catalog.remove(id).is_none() {
            return Ok(false);
        }
        self.save_catalog(&catalog)?;
        Ok(true)
    }
}
