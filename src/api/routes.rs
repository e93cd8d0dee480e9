//! API route configuration.

use crate::api::handlers::{
    category_handler, category_list_handler, course_handler, department_handler,
    department_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public JSON API routes.
///
/// # Endpoints
///
/// - `GET /categories`          - List categories
/// - `GET /categories/{id}`     - Category with its courses
/// - `GET /courses/{id}`        - Course with related courses
/// - `GET /departments`         - List departments
/// - `GET /departments/{name}`  - Department with courses and faculty
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category_list_handler))
        .route("/categories/{id}", get(category_handler))
        .route("/courses/{id}", get(course_handler))
        .route("/departments", get(department_list_handler))
        .route("/departments/{name}", get(department_handler))
}
