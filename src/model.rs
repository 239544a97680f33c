use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub instructor: Option<String>,
    pub credits: i32,
}

impl Course {
    pub fn new(name: String, instructor: Option<String>, credits: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name,
            instructor,
            credits,
        }
    }
}

/// Raw field values collected by a view. Unsaved and unvalidated; during an
/// update an empty string or non-positive credit count means "keep current".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub instructor: String,
    pub credits: i32,
}

impl CourseDraft {
    pub fn new(name: impl Into<String>, instructor: impl Into<String>, credits: i32) -> Self {
        Self {
            name: name.into(),
            instructor: instructor.into(),
            credits,
        }
    }
}
