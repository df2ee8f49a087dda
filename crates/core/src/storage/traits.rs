use async_trait::async_trait;
use uuid::Uuid;

use crate::course::Course;
use crate::query::CourseFilter;

use super::Result;

/// Repository for course operations.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Gets a course by its ID.
    async fn get_course(&self, id: Uuid) -> Result<Option<Course>>;

    /// Creates a new course. Fails with `AlreadyExists` if the ID is taken.
    async fn create_course(&self, course: &Course) -> Result<()>;

    /// Replaces an existing course. Fails with `NotFound` if it does not exist.
    async fn update_course(&self, course: &Course) -> Result<()>;

    /// Deletes a course by its ID. Fails with `NotFound` if it does not exist.
    async fn delete_course(&self, id: Uuid) -> Result<()>;

    /// Lists courses matching a filter, sorted by ID and paginated.
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>>;

    /// Returns true if a course with the given ID exists.
    async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.get_course(id).await?.is_some())
    }

    /// Lists every course of a tenant, optionally narrowed to marketplace membership.
    async fn list_by_tenant(
        &self,
        tenant_id: &str,
        in_marketplace: Option<bool>,
    ) -> Result<Vec<Course>> {
        let mut filter = CourseFilter::new().with_tenant_id(tenant_id);
        filter.in_marketplace = in_marketplace;
        self.list_courses(&filter).await
    }
}
