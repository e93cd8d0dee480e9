//! Infrastructure layer for external integrations.
//!
//! Implements the domain's [`crate::domain::repositories::CatalogRepository`]
//! against the upstream catalog API.
//!
//! # Modules
//!
//! - [`http`] - `reqwest`-based catalog API client and response-shape decoding

pub mod http;
