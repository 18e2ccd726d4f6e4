use std::collections::HashSet;

use rand::Rng;
use tokio::sync::RwLock;

use super::course::{seed_courses, Course};
use crate::error::{CourseError, Result};

/// Generated ids are decimal renderings of `0..ID_SPACE`.
pub const ID_SPACE: u32 = 1_000_000;

const RANDOM_ATTEMPTS: usize = 32;

/// Ordered, in-memory course list. Lookups scan in insertion order and act on
/// the first match.
pub struct Store {
    courses: RwLock<Vec<Course>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_courses(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::with_courses(seed_courses())
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }

    pub async fn list(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Course> {
        let courses = self.courses.read().await;
        courses
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or_else(|| CourseError::NotFound { id: id.to_string() })
    }

    pub async fn create(&self, input: Course) -> Result<Course> {
        let mut courses = self.courses.write().await;
        let id = next_id(&courses, ID_SPACE)?;
        let course = input.with_id(id);
        courses.push(course.clone());

        tracing::debug!(id = %course.id, count = courses.len(), "Created course");
        Ok(course)
    }

    /// Replaces the first course matching `id`. The replacement is moved to
    /// the end of the list.
    pub async fn update(&self, id: &str, input: Course) -> Result<Course> {
        let mut courses = self.courses.write().await;
        let index = courses
            .iter()
            .position(|course| course.id == id)
            .ok_or_else(|| CourseError::NotFound { id: id.to_string() })?;

        courses.remove(index);
        let course = input.with_id(id);
        courses.push(course.clone());

        tracing::debug!(id = %id, from = index, "Updated course");
        Ok(course)
    }

    /// Removes the first course matching `id` and returns what is left. An
    /// unknown id leaves the list untouched.
    pub async fn delete(&self, id: &str) -> Vec<Course> {
        let mut courses = self.courses.write().await;
        if let Some(index) = courses.iter().position(|course| course.id == id) {
            courses.remove(index);
            tracing::debug!(id = %id, count = courses.len(), "Deleted course");
        }
        courses.clone()
    }
}

fn next_id(courses: &[Course], space: u32) -> Result<String> {
    let taken: HashSet<&str> = courses.iter().map(|course| course.id.as_str()).collect();

    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_ATTEMPTS {
        let id = rng.gen_range(0..space).to_string();
        if !taken.contains(id.as_str()) {
            return Ok(id);
        }
    }

    // Dense store, fall back to the lowest free id.
    (0..space)
        .map(|n| n.to_string())
        .find(|id| !taken.contains(id.as_str()))
        .ok_or(CourseError::IdSpaceExhausted)
}
