//! Domain layer containing catalog entities and the repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Categories, courses, departments and faculty
//! - [`repositories`] - The catalog API contract consumed by the resolver
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Response-shape differences are normalized here, once, before any filtering
//! - Resolution logic lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
