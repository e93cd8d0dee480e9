//! Handlers for category endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::catalog::ListResponse;
use crate::application::services::CategoryPage;
use crate::domain::entities::Category;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Category>>, AppError> {
    let categories = state.resolver.list_categories().await?;
    Ok(Json(categories.into()))
}

/// Returns a category with the courses filed under it.
///
/// # Endpoint
///
/// `GET /api/categories/{id}`
///
/// # Errors
///
/// Returns 404 if no category has this identifier.
/// Returns 502 if the catalog API fails.
pub async fn category_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CategoryPage>, AppError> {
    let page = state.resolver.resolve_category_with_courses(&id).await?;
    Ok(Json(page))
}
