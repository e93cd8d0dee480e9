//! Repository trait for the upstream catalog API.

use crate::domain::entities::{Category, Course, Department, DepartmentResponse, Faculty};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the catalog collections.
///
/// Every operation is a single fetch. Implementations normalize the
/// "list inside an envelope" and "bare list" response shapes; callers only
/// ever see entities.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpCatalogRepository`] - `reqwest` client for the catalog API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetches every category, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the catalog API fails.
    async fn get_categories(&self) -> Result<Vec<Category>, AppError>;

    /// Fetches every course, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the catalog API fails.
    async fn get_courses(&self) -> Result<Vec<Course>, AppError>;

    /// Fetches one course by identifier.
    ///
    /// Returns `Ok(None)` when the API reports the course as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the catalog API fails.
    async fn get_course_by_id(&self, id: &str) -> Result<Option<Course>, AppError>;

    /// Calls the department-by-name endpoint.
    ///
    /// The answer is either the composite bundle or the legacy department
    /// record, see [`DepartmentResponse`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the API reports no such department.
    /// Returns [`AppError::Transport`] when the endpoint is unreachable or
    /// answers with a body matching neither shape.
    async fn get_department_by_name(&self, name: &str) -> Result<DepartmentResponse, AppError>;

    /// Fetches every department, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the catalog API fails.
    async fn get_departments(&self) -> Result<Vec<Department>, AppError>;

    /// Fetches every faculty member, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the catalog API fails.
    async fn get_faculty(&self) -> Result<Vec<Faculty>, AppError>;
}
