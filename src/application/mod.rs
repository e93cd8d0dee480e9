//! Application layer: entity resolution and view lifecycle.
//!
//! # Available Services
//!
//! - [`services::entity_resolver::EntityResolver`] - Resolves a page's focal
//!   entity with its related collections, degrading secondary fetches
//! - [`view_session::ViewSession`] - Runs a view's load once per mount and
//!   guards against late results after re-mount or teardown

pub mod services;
pub mod view_session;

pub use view_session::{LoadState, ViewSession};
