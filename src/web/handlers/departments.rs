//! Department listing and department page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use super::not_found::NotFoundTemplate;
use crate::state::AppState;
use crate::web::views::{CourseCard, FacultyRow, ListingEntry, cards};

/// Template for the department listing.
#[derive(Template, WebTemplate)]
#[template(path = "departments.html")]
pub struct DepartmentsTemplate {
    pub departments: Vec<ListingEntry>,
    pub notice: String,
}

/// Template for a department with its courses and faculty.
#[derive(Template, WebTemplate)]
#[template(path = "department.html")]
pub struct DepartmentTemplate {
    pub name: String,
    pub description: String,
    pub courses: Vec<CourseCard>,
    pub faculty: Vec<FacultyRow>,
}

/// Renders the department listing.
///
/// # Endpoint
///
/// `GET /departments`
pub async fn departments_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.resolver.list_departments().await {
        Ok(departments) => DepartmentsTemplate {
            departments: cards(&departments),
            notice: String::new(),
        },
        Err(e) => {
            error!(error = %e, "Failed to list departments");
            DepartmentsTemplate {
                departments: Vec::new(),
                notice: "Departments are unavailable right now.".to_string(),
            }
        }
    }
}

/// Renders a department with its courses and faculty.
///
/// # Endpoint
///
/// `GET /departments/{name}`
///
/// Departments are addressed by display name. Course and faculty failures show
/// as empty sections; only an unresolvable department renders the not-found
/// page with `404`.
pub async fn department_page_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.resolver.resolve_department(&name).await {
        Ok(page) => DepartmentTemplate {
            name: page.department.name.clone(),
            description: page.department.description.clone().unwrap_or_default(),
            courses: cards(&page.courses),
            faculty: cards(&page.faculty),
        }
        .into_response(),
        Err(e) => {
            if e.is_not_found() {
                info!(department = %name, "Unknown department");
            } else {
                error!(department = %name, error = %e, "Department lookup failed");
            }
            (StatusCode::NOT_FOUND, NotFoundTemplate::department()).into_response()
        }
    }
}
