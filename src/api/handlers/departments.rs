//! Handlers for department endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::catalog::ListResponse;
use crate::application::services::DepartmentPage;
use crate::domain::entities::Department;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all departments.
///
/// # Endpoint
///
/// `GET /api/departments`
pub async fn department_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Department>>, AppError> {
    let departments = state.resolver.list_departments().await?;
    Ok(Json(departments.into()))
}

/// Returns a department with its courses and faculty.
///
/// # Endpoint
///
/// `GET /api/departments/{name}`
///
/// The path segment is the department's display name, percent-decoded by
/// the router (`Computer%20Science` → `Computer Science`). Matching is exact
/// and case-sensitive.
///
/// # Errors
///
/// Returns 404 if the department cannot be resolved. Course and faculty
/// failures degrade to empty lists.
pub async fn department_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DepartmentPage>, AppError> {
    let page = state.resolver.resolve_department(&name).await?;
    Ok(Json(page))
}
