//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::EntityResolver;
use crate::infrastructure::http::HttpCatalogRepository;

/// Resolver type used by the running service.
pub type CatalogResolver = EntityResolver<HttpCatalogRepository>;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<CatalogResolver>,
}

impl AppState {
    pub fn new(repository: HttpCatalogRepository) -> Self {
        Self {
            resolver: Arc::new(EntityResolver::new(Arc::new(repository))),
        }
    }
}
