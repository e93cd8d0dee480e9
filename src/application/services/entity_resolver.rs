//! Resolution of a page's focal entity and its related collections.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Category, Course, Department, DepartmentResponse, Faculty};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;

/// Maximum number of related courses shown next to a course.
pub const RELATED_COURSE_LIMIT: usize = 3;

/// A category with the courses filed under it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub courses: Vec<Course>,
}

/// A course with up to [`RELATED_COURSE_LIMIT`] courses from its department.
#[derive(Debug, Clone, Serialize)]
pub struct CoursePage {
    pub course: Course,
    pub related: Vec<Course>,
}

/// How a department page was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Pre-joined by the composite endpoint.
    Composite,
    /// Joined client-side from the course and faculty collections.
    Fallback,
}

/// A department with its courses and faculty.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentPage {
    pub department: Department,
    pub courses: Vec<Course>,
    pub faculty: Vec<Faculty>,
    pub source: ResolutionSource,
}

/// Resolves the entity a page is about together with its related collections.
///
/// Failures of the primary lookup are returned to the caller; failures of
/// secondary lookups (related courses, department courses and faculty)
/// degrade to empty collections and are only logged. Nothing is retried.
pub struct EntityResolver<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> EntityResolver<R> {
    /// Creates a new resolver.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all categories in server order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the catalog API fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.get_categories().await
    }

    /// Lists all departments in server order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the catalog API fails.
    pub async fn list_departments(&self) -> Result<Vec<Department>, AppError> {
        self.repository.get_departments().await
    }

    /// Resolves a category and the courses filed under it.
    ///
    /// Courses match when their category reference, bare or embedded, carries
    /// the category's identifier. Server order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category has this identifier.
    /// Returns [`AppError::Transport`] if either fetch fails.
    pub async fn resolve_category_with_courses(
        &self,
        category_id: &str,
    ) -> Result<CategoryPage, AppError> {
        if category_id.trim().is_empty() {
            return Err(category_not_found(category_id));
        }

        let category = self
            .repository
            .get_categories()
            .await?
            .into_iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| category_not_found(category_id))?;

        let courses: Vec<Course> = self
            .repository
            .get_courses()
            .await?
            .into_iter()
            .filter(|course| course.category_key().has_id(&category.id))
            .collect();

        debug!(
            category = %category.id,
            courses = courses.len(),
            "Resolved category"
        );

        Ok(CategoryPage { category, courses })
    }

    /// Resolves a course and up to [`RELATED_COURSE_LIMIT`] related courses.
    ///
    /// Related courses share the course's department identifier, exclude the
    /// course itself, and are the first matches in server order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Transport`] if the course lookup fails.
    pub async fn resolve_course_with_related(
        &self,
        course_id: &str,
    ) -> Result<CoursePage, AppError> {
        if course_id.trim().is_empty() {
            return Err(course_not_found(course_id));
        }

        let course = self
            .repository
            .get_course_by_id(course_id)
            .await?
            .ok_or_else(|| course_not_found(course_id))?;

        let related = match course.department_key().id {
            Some(department_id) => self.related_courses(&course, &department_id).await,
            None => Vec::new(),
        };

        Ok(CoursePage { course, related })
    }

    /// Resolves a department, keyed by display name, with its courses and faculty.
    ///
    /// The composite endpoint is preferred. When it answers with the legacy
    /// record, or cannot be used at all, the department is joined client-side:
    /// courses by department identifier or name, faculty by exact department
    /// name. A failed course or faculty fetch yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if neither path can resolve the department.
    pub async fn resolve_department(&self, name: &str) -> Result<DepartmentPage, AppError> {
        if name.trim().is_empty() {
            return Err(department_not_found(name));
        }

        let department = match self.repository.get_department_by_name(name).await {
            Ok(DepartmentResponse::Composite(bundle)) => {
                debug!(department = %bundle.department.name, "Resolved department via composite endpoint");
                return Ok(DepartmentPage {
                    department: bundle.department,
                    courses: bundle.courses,
                    faculty: bundle.faculty,
                    source: ResolutionSource::Composite,
                });
            }
            Ok(DepartmentResponse::Legacy(department)) => {
                info!(department = %department.name, "Legacy department response, joining client-side");
                department
            }
            Err(e) => {
                warn!(department = %name, error = %e, "Department endpoint unusable, looking up by name");
                self.find_department_by_name(name).await?
            }
        };

        metrics::counter!("portal_department_fallback_total").increment(1);

        let (courses, faculty) = tokio::join!(
            self.repository.get_courses(),
            self.repository.get_faculty()
        );

        let courses = degrade("courses", courses)
            .into_iter()
            .filter(|course| {
                let key = course.department_key();
                key.has_id(&department.id) || key.has_name(&department.name)
            })
            .collect();

        let faculty = degrade("faculty", faculty)
            .into_iter()
            .filter(|member| member.belongs_to(&department.name))
            .collect();

        Ok(DepartmentPage {
            department,
            courses,
            faculty,
            source: ResolutionSource::Fallback,
        })
    }

    async fn related_courses(&self, course: &Course, department_id: &str) -> Vec<Course> {
        degrade("related courses", self.repository.get_courses().await)
            .into_iter()
            .filter(|other| other.id != course.id && other.department_key().has_id(department_id))
            .take(RELATED_COURSE_LIMIT)
            .collect()
    }

    async fn find_department_by_name(&self, name: &str) -> Result<Department, AppError> {
        let departments = self.repository.get_departments().await.map_err(|e| {
            warn!(department = %name, error = %e, "Department list unavailable");
            department_not_found(name)
        })?;

        departments
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| department_not_found(name))
    }
}

/// Turns a failed secondary fetch into an empty collection.
fn degrade<T>(collection: &'static str, result: Result<Vec<T>, AppError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(collection, error = %e, "Secondary fetch failed, showing empty list");
        metrics::counter!("portal_degraded_fetch_total", "collection" => collection).increment(1);
        Vec::new()
    })
}

fn category_not_found(id: &str) -> AppError {
    AppError::not_found("Category not found", json!({ "id": id }))
}

fn course_not_found(id: &str) -> AppError {
    AppError::not_found("Course not found", json!({ "id": id }))
}

fn department_not_found(name: &str) -> AppError {
    AppError::not_found("Department not found", json!({ "name": name }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DepartmentBundle, EntityRef};
    use crate::domain::repositories::MockCatalogRepository;

    fn bare(id: &str) -> EntityRef {
        EntityRef::Bare(id.to_string())
    }

    fn embedded(id: &str) -> EntityRef {
        EntityRef::Embedded {
            id: Some(id.to_string()),
            name: None,
        }
    }

    fn course_in_department(id: &str, department_id: &str) -> Course {
        Course::new(id, id).with_department(bare(department_id))
    }

    fn upstream_down() -> AppError {
        AppError::transport("connection refused", json!({}))
    }

    #[tokio::test]
    async fn test_category_with_matching_courses() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_categories()
            .times(1)
            .returning(|| Ok(vec![Category::new("c1", "Science")]));
        mock_repo.expect_get_courses().times(1).returning(|| {
            Ok(vec![
                Course::new("k1", "Optics").with_category(embedded("c1")),
                Course::new("k2", "Ledgers").with_category(embedded("c2")),
            ])
        });

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_category_with_courses("c1").await.unwrap();

        assert_eq!(page.category.name, "Science");
        let ids: Vec<_> = page.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["k1"]);
    }

    #[tokio::test]
    async fn test_category_matches_bare_and_embedded_in_server_order() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_categories()
            .returning(|| Ok(vec![Category::new("c2", "Arts"), Category::new("c1", "Science")]));
        mock_repo.expect_get_courses().returning(|| {
            Ok(vec![
                Course::new("k3", "Zoology").with_category(bare("c1")),
                Course::new("k1", "Algebra").with_category(bare("c2")),
                Course::new("k2", "Botany").with_category(embedded("c1")),
                Course::new("k4", "Unfiled"),
            ])
        });

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_category_with_courses("c1").await.unwrap();

        let ids: Vec<_> = page.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["k3", "k2"]);
    }

    #[tokio::test]
    async fn test_category_without_courses() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_categories()
            .returning(|| Ok(vec![Category::new("c1", "Science")]));
        mock_repo.expect_get_courses().returning(|| Ok(vec![]));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_category_with_courses("c1").await.unwrap();

        assert!(page.courses.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_found() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_categories()
            .times(1)
            .returning(|| Ok(vec![Category::new("c1", "Science")]));
        mock_repo.expect_get_courses().times(0);

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve_category_with_courses("c9").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_blank_category_id_is_not_found_without_fetching() {
        let mock_repo = MockCatalogRepository::new();
        let resolver = EntityResolver::new(Arc::new(mock_repo));

        let result = resolver.resolve_category_with_courses("  ").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_category_course_fetch_failure_propagates() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_categories()
            .returning(|| Ok(vec![Category::new("c1", "Science")]));
        mock_repo
            .expect_get_courses()
            .returning(|| Err(upstream_down()));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve_category_with_courses("c1").await;

        assert!(matches!(result.unwrap_err(), AppError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_course_with_related_capped_and_excluding_self() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_course_by_id()
            .withf(|id| id == "k2")
            .times(1)
            .returning(|_| Ok(Some(course_in_department("k2", "d1"))));
        mock_repo.expect_get_courses().times(1).returning(|| {
            Ok(vec![
                course_in_department("k1", "d1"),
                course_in_department("k2", "d1"),
                course_in_department("x1", "d2"),
                Course::new("k3", "k3").with_department(embedded("d1")),
                course_in_department("k4", "d1"),
                course_in_department("k5", "d1"),
            ])
        });

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_course_with_related("k2").await.unwrap();

        assert_eq!(page.course.id, "k2");
        let ids: Vec<_> = page.related.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["k1", "k3", "k4"]);
    }

    #[tokio::test]
    async fn test_course_without_department_skips_related_fetch() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_course_by_id()
            .returning(|_| Ok(Some(Course::new("k1", "Optics"))));
        mock_repo.expect_get_courses().times(0);

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_course_with_related("k1").await.unwrap();

        assert!(page.related.is_empty());
    }

    #[tokio::test]
    async fn test_missing_course_is_not_found() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_course_by_id()
            .withf(|id| id == "missing")
            .returning(|_| Ok(None));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve_course_with_related("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_related_fetch_failure_degrades_to_empty() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_course_by_id()
            .returning(|_| Ok(Some(course_in_department("k1", "d1"))));
        mock_repo
            .expect_get_courses()
            .returning(|| Err(upstream_down()));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_course_with_related("k1").await.unwrap();

        assert_eq!(page.course.id, "k1");
        assert!(page.related.is_empty());
    }

    #[tokio::test]
    async fn test_department_composite_used_directly() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_department_by_name()
            .withf(|name| name == "Physics")
            .times(1)
            .returning(|_| {
                Ok(DepartmentResponse::Composite(DepartmentBundle {
                    department: Department::new("d1", "Physics"),
                    courses: vec![course_in_department("k1", "d1")],
                    faculty: vec![Faculty::new("f1", "Dr. Rao").in_department("Physics")],
                }))
            });
        mock_repo.expect_get_courses().times(0);
        mock_repo.expect_get_faculty().times(0);

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_department("Physics").await.unwrap();

        assert_eq!(page.source, ResolutionSource::Composite);
        assert_eq!(page.courses.len(), 1);
        assert_eq!(page.faculty.len(), 1);
    }

    #[tokio::test]
    async fn test_department_legacy_shape_joins_client_side() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_department_by_name()
            .returning(|_| Ok(DepartmentResponse::Legacy(Department::new("d1", "Physics"))));
        mock_repo.expect_get_courses().times(1).returning(|| {
            Ok(vec![
                course_in_department("k1", "d1"),
                course_in_department("k2", "d2"),
                Course::new("k3", "Astro").with_department(EntityRef::Embedded {
                    id: None,
                    name: Some("Physics".to_string()),
                }),
            ])
        });
        mock_repo.expect_get_faculty().times(1).returning(|| {
            Ok(vec![
                Faculty::new("f1", "Dr. Rao").in_department("Physics"),
                Faculty::new("f2", "Dr. Sen").in_department("physics"),
                Faculty::new("f3", "Dr. Das"),
            ])
        });

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_department("Physics").await.unwrap();

        assert_eq!(page.source, ResolutionSource::Fallback);
        let course_ids: Vec<_> = page.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(course_ids, ["k1", "k3"]);
        let faculty_ids: Vec<_> = page.faculty.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(faculty_ids, ["f1"]);
    }

    #[tokio::test]
    async fn test_department_unreachable_composite_with_failing_faculty() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_department_by_name()
            .returning(|_| Err(upstream_down()));
        mock_repo.expect_get_departments().times(1).returning(|| {
            Ok(vec![
                Department::new("d0", "Chemistry"),
                Department::new("d1", "Physics"),
            ])
        });
        mock_repo
            .expect_get_courses()
            .returning(|| Ok(vec![course_in_department("k1", "d1")]));
        mock_repo
            .expect_get_faculty()
            .returning(|| Err(upstream_down()));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_department("Physics").await.unwrap();

        assert_eq!(page.department.id, "d1");
        assert_eq!(page.courses.len(), 1);
        assert!(page.faculty.is_empty());
        assert_eq!(page.source, ResolutionSource::Fallback);
    }

    #[tokio::test]
    async fn test_department_all_secondary_fetches_failing() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_department_by_name()
            .returning(|_| Ok(DepartmentResponse::Legacy(Department::new("d1", "Physics"))));
        mock_repo
            .expect_get_courses()
            .returning(|| Err(upstream_down()));
        mock_repo
            .expect_get_faculty()
            .returning(|| Err(upstream_down()));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let page = resolver.resolve_department("Physics").await.unwrap();

        assert!(page.courses.is_empty());
        assert!(page.faculty.is_empty());
    }

    #[tokio::test]
    async fn test_department_unresolvable_by_either_path() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_department_by_name()
            .returning(|name| Err(department_not_found(name)));
        mock_repo
            .expect_get_departments()
            .returning(|| Ok(vec![Department::new("d0", "Chemistry")]));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve_department("Physics").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_department_list_failure_is_not_found() {
        let mut mock_repo = MockCatalogRepository::new();

        mock_repo
            .expect_get_department_by_name()
            .returning(|_| Err(upstream_down()));
        mock_repo
            .expect_get_departments()
            .returning(|| Err(upstream_down()));

        let resolver = EntityResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve_department("Physics").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
