//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

/// Template for the not-found page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub what: String,
    pub back_href: String,
    pub back_label: String,
}

impl NotFoundTemplate {
    pub fn course() -> Self {
        Self {
            what: "course".to_string(),
            back_href: "/categories".to_string(),
            back_label: "Browse categories".to_string(),
        }
    }

    pub fn department() -> Self {
        Self {
            what: "department".to_string(),
            back_href: "/departments".to_string(),
            back_label: "Browse departments".to_string(),
        }
    }

    pub fn page() -> Self {
        Self {
            what: "page".to_string(),
            back_href: "/".to_string(),
            back_label: "Home".to_string(),
        }
    }
}

/// Fallback for unknown paths.
pub async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate::page())
}
