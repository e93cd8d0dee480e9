//! Data Transfer Objects for API responses.
//!
//! Resolved pages ([`crate::application::services::CategoryPage`] and friends)
//! are serialized as-is; this module only adds the listing and health shapes.

pub mod catalog;
pub mod health;
