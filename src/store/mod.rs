pub mod course;
pub mod courses;

pub use course::{seed_courses, Author, Course};
pub use courses::Store;
