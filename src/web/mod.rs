//! Server-rendered public pages.
//!
//! Pages are rendered with Askama from the resolver's results. Navigation
//! policy lives here: unknown categories redirect to the listing, unknown
//! courses and departments render a not-found page.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - Display models consumed by templates

pub mod handlers;
pub mod routes;
pub mod views;
