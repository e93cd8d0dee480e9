//! Public page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    CATEGORY_LISTING_PATH, categories_page_handler, category_page_handler, course_page_handler,
    department_page_handler, departments_page_handler,
};
use axum::{Router, response::Redirect, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /`                    - Redirects to the category listing
/// - `GET /categories`          - Category listing
/// - `GET /categories/{id}`     - Category page (redirects to listing when unknown)
/// - `GET /courses/{id}`        - Course page (404 page when unknown)
/// - `GET /departments`         - Department listing
/// - `GET /departments/{name}`  - Department page (404 page when unknown)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to(CATEGORY_LISTING_PATH) }))
        .route("/categories", get(categories_page_handler))
        .route("/categories/{id}", get(category_page_handler))
        .route("/courses/{id}", get(course_page_handler))
        .route("/departments", get(departments_page_handler))
        .route("/departments/{name}", get(department_page_handler))
}
