//! Catalog entities as served by the upstream API.
//!
//! Entities are read-only projections of server state. They are created from a
//! fetch response, held for the lifetime of one page view and then dropped;
//! nothing here is ever written back.
//!
//! # Entity Types
//!
//! - [`Category`] - Course grouping, referenced by `Course::category`
//! - [`Department`] - Academic department, referenced by `Course::department`
//!   and by name from `Faculty::department`
//! - [`Course`] - A course with fee structure and passthrough fields
//! - [`Faculty`] - Teaching staff
//!
//! Reference shapes (bare identifier vs. embedded object) are modeled by
//! [`EntityRef`] and normalized into [`RefKey`].

pub mod category;
pub mod course;
pub mod department;
pub mod entity_ref;
pub mod faculty;
pub(crate) mod records;

pub use category::Category;
pub use course::{Course, FeeStructure};
pub use department::{Department, DepartmentBundle, DepartmentResponse};
pub use entity_ref::{EntityRef, RefKey};
pub use faculty::Faculty;
pub(crate) use records::decode_records;
