//! Category listing and category page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::{error, info};

use crate::state::AppState;
use crate::web::views::{CourseCard, ListingEntry, cards};

/// Path every failed category lookup redirects to.
pub const CATEGORY_LISTING_PATH: &str = "/categories";

/// Template for the category listing.
#[derive(Template, WebTemplate)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate {
    pub categories: Vec<ListingEntry>,
    pub notice: String,
}

/// Template for a single category with its courses.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub name: String,
    pub description: String,
    pub courses: Vec<CourseCard>,
}

/// Renders the category listing.
///
/// # Endpoint
///
/// `GET /categories`
///
/// A catalog API failure renders an empty listing with a notice.
pub async fn categories_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.resolver.list_categories().await {
        Ok(categories) => CategoriesTemplate {
            categories: cards(&categories),
            notice: String::new(),
        },
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            CategoriesTemplate {
                categories: Vec::new(),
                notice: "Categories are unavailable right now.".to_string(),
            }
        }
    }
}

/// Renders a category with its courses.
///
/// # Endpoint
///
/// `GET /categories/{id}`
///
/// Unknown categories and catalog API failures redirect to the listing
/// (`303 See Other` → `/categories`).
pub async fn category_page_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.resolver.resolve_category_with_courses(&id).await {
        Ok(page) => CategoryTemplate {
            name: page.category.name.clone(),
            description: page.category.description.clone().unwrap_or_default(),
            courses: cards(&page.courses),
        }
        .into_response(),
        Err(e) if e.is_not_found() => {
            info!(category = %id, "Unknown category, redirecting to listing");
            Redirect::to(CATEGORY_LISTING_PATH).into_response()
        }
        Err(e) => {
            error!(category = %id, error = %e, "Category lookup failed, redirecting to listing");
            Redirect::to(CATEGORY_LISTING_PATH).into_response()
        }
    }
}
