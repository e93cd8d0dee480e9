//! Repository trait definitions for the domain layer.
//!
//! The portal owns no data; its only repository is the upstream catalog API.
//! The trait is implemented in `crate::infrastructure::http`, and a mock is
//! generated via `mockall` for unit tests.

pub mod catalog_repository;

pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
