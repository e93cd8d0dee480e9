//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod courses;
pub mod departments;
pub mod health;

pub use categories::{category_handler, category_list_handler};
pub use courses::course_handler;
pub use departments::{department_handler, department_list_handler};
pub use health::health_handler;
