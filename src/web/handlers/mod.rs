//! HTML template rendering handlers for the public pages.

mod categories;
mod courses;
mod departments;
mod not_found;

pub use categories::{CATEGORY_LISTING_PATH, categories_page_handler, category_page_handler};
pub use courses::course_page_handler;
pub use departments::{department_page_handler, departments_page_handler};
pub use not_found::{NotFoundTemplate, fallback_handler};
