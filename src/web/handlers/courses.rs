//! Course page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{error, info};

use super::categories::CATEGORY_LISTING_PATH;
use super::not_found::NotFoundTemplate;
use crate::state::AppState;
use crate::web::views::{CourseCard, cards, fee_label};

/// Template for a course with its related courses.
#[derive(Template, WebTemplate)]
#[template(path = "course.html")]
pub struct CourseTemplate {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub thumbnail_url: String,
    pub fee: String,
    pub related: Vec<CourseCard>,
}

/// Renders a course with up to three related courses.
///
/// # Endpoint
///
/// `GET /courses/{id}`
///
/// An unknown course renders the not-found page with `404`. A catalog API
/// failure on the course itself redirects to the category listing.
pub async fn course_page_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.resolver.resolve_course_with_related(&id).await {
        Ok(page) => {
            let course = &page.course;
            CourseTemplate {
                name: course.name.clone(),
                description: course.description.clone().unwrap_or_default(),
                duration: course.duration.clone().unwrap_or_default(),
                thumbnail_url: course.thumbnail_url.clone().unwrap_or_default(),
                fee: fee_label(course.fee_structure.as_ref()),
                related: cards(&page.related),
            }
            .into_response()
        }
        Err(e) if e.is_not_found() => {
            info!(course = %id, "Unknown course");
            (StatusCode::NOT_FOUND, NotFoundTemplate::course()).into_response()
        }
        Err(e) => {
            error!(course = %id, error = %e, "Course lookup failed, redirecting to listing");
            Redirect::to(CATEGORY_LISTING_PATH).into_response()
        }
    }
}
