//! HTTP access to the catalog API.
//!
//! Provides [`HttpCatalogRepository`], the production implementation of
//! [`crate::domain::repositories::CatalogRepository`], and the decoders that
//! normalize enveloped and bare response bodies.

mod catalog_client;
mod envelope;
mod error;

pub use catalog_client::HttpCatalogRepository;
pub use error::CatalogClientError;
