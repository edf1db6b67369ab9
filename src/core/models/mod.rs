//! Data models for `course-grid`

pub mod catalog;
pub mod course;

pub use catalog::Catalog;
pub use course::{Attribute, Course};
