//! `reqwest` implementation of the catalog repository.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use super::envelope::{decode_list, decode_single};
use super::error::CatalogClientError;
use crate::domain::entities::{Category, Course, Department, DepartmentResponse, Faculty};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;

/// HTTP client for the catalog API.
///
/// Endpoints, relative to the base URL:
///
/// - `GET categories`, `GET courses`, `GET departments`, `GET faculty`
/// - `GET courses/{id}`
/// - `GET departments/name/{name}` (composite or legacy body)
#[derive(Debug, Clone)]
pub struct HttpCatalogRepository {
    client: Client,
    base_url: Url,
}

impl HttpCatalogRepository {
    /// Creates a repository reusing an existing [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError::InvalidUrl`] unless `base_url` is an
    /// absolute `http`/`https` URL.
    pub fn new(client: Client, base_url: &str) -> Result<Self, CatalogClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| CatalogClientError::InvalidUrl(e.to_string()))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(CatalogClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { client, base_url })
    }

    /// Creates a repository with its own client and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError::Request`] if the client cannot be built,
    /// or [`CatalogClientError::InvalidUrl`] for a bad base URL.
    pub fn connect(base_url: &str, timeout: Duration) -> Result<Self, CatalogClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::new(client, base_url)
    }

    /// Base URL of the catalog API.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL; each segment is percent-encoded on its own.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetches a JSON body; `Ok(None)` on 404.
    async fn fetch(&self, url: Url) -> Result<Option<Value>, CatalogClientError> {
        debug!(%url, "Fetching from catalog API");

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::ensure_success(response).await?;
        Ok(Some(response.json::<Value>().await?))
    }

    async fn fetch_list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, AppError> {
        let url = self.endpoint(&[collection])?;
        let endpoint = url.path().to_string();

        let body = self.fetch(url).await?.ok_or_else(|| CatalogClientError::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            body: format!("no {} endpoint", collection),
        })?;

        let items = decode_list(collection, body)
            .map_err(|reason| CatalogClientError::Decode { endpoint, reason })?;

        debug!(collection, count = items.len(), "Fetched collection");
        Ok(items)
    }

    /// Ensures the response has a success status code, turning anything else
    /// into [`CatalogClientError::Status`] with the body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogRepository for HttpCatalogRepository {
    async fn get_categories(&self) -> Result<Vec<Category>, AppError> {
        self.fetch_list("categories").await
    }

    async fn get_courses(&self) -> Result<Vec<Course>, AppError> {
        self.fetch_list("courses").await
    }

    async fn get_course_by_id(&self, id: &str) -> Result<Option<Course>, AppError> {
        let url = self.endpoint(&["courses", id])?;
        let endpoint = url.path().to_string();

        match self.fetch(url).await? {
            Some(body) => Ok(decode_single(body)
                .map_err(|reason| CatalogClientError::Decode { endpoint, reason })?),
            None => Ok(None),
        }
    }

    async fn get_department_by_name(&self, name: &str) -> Result<DepartmentResponse, AppError> {
        let url = self.endpoint(&["departments", "name", name])?;
        let endpoint = url.path().to_string();

        let body = self.fetch(url).await?.ok_or_else(|| {
            AppError::not_found("Department not found", json!({ "name": name }))
        })?;

        DepartmentResponse::from_value(body).ok_or_else(|| {
            CatalogClientError::Decode {
                endpoint,
                reason: "neither a composite envelope nor a department record".to_string(),
            }
            .into()
        })
    }

    async fn get_departments(&self) -> Result<Vec<Department>, AppError> {
        self.fetch_list("departments").await
    }

    async fn get_faculty(&self) -> Result<Vec<Faculty>, AppError> {
        self.fetch_list("faculty").await
    }
}
