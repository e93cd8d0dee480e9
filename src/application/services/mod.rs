//! Business logic services for the application layer.

pub mod entity_resolver;

pub use entity_resolver::{
    CategoryPage, CoursePage, DepartmentPage, EntityResolver, RELATED_COURSE_LIMIT,
    ResolutionSource,
};
