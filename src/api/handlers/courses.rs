//! Handler for the course endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::application::services::CoursePage;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a course with up to three related courses from its department.
///
/// # Endpoint
///
/// `GET /api/courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
/// Returns 502 if the course lookup fails. A failing related-course lookup
/// only empties `related`.
pub async fn course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CoursePage>, AppError> {
    let page = state.resolver.resolve_course_with_related(&id).await?;
    Ok(Json(page))
}
