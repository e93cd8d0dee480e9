//! # Campus Portal
//!
//! Presentation tier of a college website. Pages about categories, courses and
//! departments are resolved from an upstream catalog API and rendered as HTML,
//! served as JSON, or browsed from the terminal.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Catalog entities and the catalog API contract
//! - **Application Layer** ([`application`]) - Entity resolution and view lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` client for the catalog API
//! - **API Layer** ([`api`]) - JSON endpoints and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! ## Resolution Policy
//!
//! - A page's focal entity must resolve; otherwise the page redirects (categories)
//!   or shows a not-found view (courses, departments)
//! - Related collections are best effort and degrade to empty lists
//! - Department pages prefer the pre-joined composite endpoint and fall back to
//!   joining courses and faculty client-side
//!
//! ## Quick Start
//!
//! ```bash
//! export CATALOG_API_URL="http://localhost:5000/api"
//! cargo run
//!
//! # or browse from the terminal
//! cargo run --bin portal -- category c1
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CategoryPage, CoursePage, DepartmentPage, EntityResolver, ResolutionSource,
    };
    pub use crate::application::{LoadState, ViewSession};
    pub use crate::domain::entities::{Category, Course, Department, Faculty};
    pub use crate::domain::repositories::CatalogRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpCatalogRepository;
    pub use crate::state::AppState;
}
