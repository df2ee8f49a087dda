//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use skillvo_core::course::Course;
use skillvo_core::query::{plan, post_process, CourseFilter};
use skillvo_core::storage::{CourseRepository, RepositoryError, Result};

/// In-memory course storage.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<HashMap<Uuid, Course>>>,
}

impl InMemoryCourseRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with courses.
    pub fn with_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let courses = courses.into_iter().map(|c| (c.id, c)).collect();
        Self {
            courses: Arc::new(RwLock::new(courses)),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn get_course(&self, id: Uuid) -> Result<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.get(&id).cloned())
    }

    async fn create_course(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses.write().await;
        if courses.contains_key(&course.id) {
            return Err(RepositoryError::course_exists(course.id));
        }
        courses.insert(course.id, course.clone());
        Ok(())
    }

    async fn update_course(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses.write().await;
        if !courses.contains_key(&course.id) {
            return Err(RepositoryError::course_not_found(course.id));
        }
        courses.insert(course.id, course.clone());
        Ok(())
    }

    async fn delete_course(&self, id: Uuid) -> Result<()> {
        let mut courses = self.courses.write().await;
        if courses.remove(&id).is_none() {
            return Err(RepositoryError::course_not_found(id));
        }
        Ok(())
    }

    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        let plan = plan(filter);
        let courses = self.courses.read().await;
        let records: Vec<Course> = courses
            .values()
            .filter(|course| plan.matches(course))
            .cloned()
            .collect();
        drop(courses);

        post_process(records, filter, Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillvo_core::course::{CourseStatus, Level};

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn course(n: u128, tenant_id: &str) -> Course {
        Course::new(tenant_id, format!("Course {n}"), Level::Beginner).with_id(id(n))
    }

    fn ids(courses: &[Course]) -> Vec<Uuid> {
        courses.iter().map(|c| c.id).collect()
    }

    #[tokio::test]
    async fn test_course_create_and_get() {
        let repo = InMemoryCourseRepository::new();
        let course = course(1, "t1");

        repo.create_course(&course).await.unwrap();

        let retrieved = repo.get_course(course.id).await.unwrap();
        assert_eq!(retrieved, Some(course));
    }

    #[tokio::test]
    async fn test_course_create_duplicate() {
        let repo = InMemoryCourseRepository::new();
        let course = course(1, "t1");

        repo.create_course(&course).await.unwrap();
        let result = repo.create_course(&course).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_course_get_nonexistent() {
        let repo = InMemoryCourseRepository::new();
        assert!(repo.get_course(Uuid::new_v4()).await.unwrap().is_none());
        assert!(!repo.exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_course_update() {
        let repo = InMemoryCourseRepository::new();
        let mut course = course(1, "t1");
        repo.create_course(&course).await.unwrap();

        course.title = "Updated Title".to_string();
        repo.update_course(&course).await.unwrap();

        let retrieved = repo.get_course(course.id).await.unwrap().unwrap();
        assert_eq!(retrieved.title, "Updated Title");
    }

    #[tokio::test]
    async fn test_course_update_nonexistent() {
        let repo = InMemoryCourseRepository::new();
        let result = repo.update_course(&course(1, "t1")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_course_delete() {
        let repo = InMemoryCourseRepository::new();
        let course = course(1, "t1");
        repo.create_course(&course).await.unwrap();

        repo.delete_course(course.id).await.unwrap();

        assert!(repo.get_course(course.id).await.unwrap().is_none());
        let result = repo.delete_course(course.id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_by_tenant() {
        let repo = InMemoryCourseRepository::with_courses([
            course(3, "t1"),
            course(2, "t2"),
            course(1, "t1"),
        ]);

        let result = repo
            .list_courses(&CourseFilter::new().with_tenant_id("t1"))
            .await
            .unwrap();

        assert_eq!(ids(&result), vec![id(1), id(3)]);
    }

    #[tokio::test]
    async fn test_list_by_tag() {
        let repo = InMemoryCourseRepository::with_courses([
            course(1, "t1").with_tags(["java", "spring"]),
            course(2, "t1").with_tags(["java", "hibernate"]),
            course(3, "t1").with_tags(["python"]),
        ]);

        let result = repo
            .list_courses(&CourseFilter::new().with_tags(["java"]))
            .await
            .unwrap();

        assert_eq!(ids(&result), vec![id(1), id(2)]);
    }

    #[tokio::test]
    async fn test_list_tags_as_residual_filter() {
        let repo = InMemoryCourseRepository::with_courses([
            course(1, "t1").with_tags(["spring", "java"]),
            course(2, "t1").with_tags(["python"]),
            course(3, "t2").with_tags(["java"]),
        ]);

        let result = repo
            .list_courses(
                &CourseFilter::new()
                    .with_tenant_id("t1")
                    .with_tags(["java", "go"]),
            )
            .await
            .unwrap();

        assert_eq!(ids(&result), vec![id(1)]);
    }

    #[tokio::test]
    async fn test_list_limit_and_offset() {
        let repo = InMemoryCourseRepository::with_courses([
            course(4, "t1"),
            course(2, "t1"),
            course(1, "t1"),
            course(3, "t1"),
        ]);

        let result = repo
            .list_courses(&CourseFilter::new().with_limit(2).with_offset(1))
            .await
            .unwrap();
        assert_eq!(ids(&result), vec![id(2), id(3)]);

        let result = repo
            .list_courses(&CourseFilter::new().with_offset(10))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_status_ignores_lower_priority_level() {
        let repo = InMemoryCourseRepository::with_courses([
            course(1, "t1").with_status(CourseStatus::Published),
            course(2, "t1"),
            {
                let mut c = course(3, "t1").with_status(CourseStatus::Published);
                c.level = Level::Advanced;
                c
            },
        ]);

        let result = repo
            .list_courses(
                &CourseFilter::new()
                    .with_status(CourseStatus::Published)
                    .with_level(Level::Beginner),
            )
            .await
            .unwrap();

        assert_eq!(ids(&result), vec![id(1), id(3)]);
    }

    #[tokio::test]
    async fn test_list_by_tenant_and_marketplace() {
        let repo = InMemoryCourseRepository::with_courses([
            course(1, "t1").with_in_marketplace(true),
            course(2, "t1"),
            course(3, "t2").with_in_marketplace(true),
        ]);

        let listed = repo.list_by_tenant("t1", Some(true)).await.unwrap();
        assert_eq!(ids(&listed), vec![id(1)]);

        let listed = repo.list_by_tenant("t1", Some(false)).await.unwrap();
        assert_eq!(ids(&listed), vec![id(2)]);

        let listed = repo.list_by_tenant("t1", None).await.unwrap();
        assert_eq!(ids(&listed), vec![id(1), id(2)]);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = InMemoryCourseRepository::new();
        let result = repo.list_courses(&CourseFilter::new()).await.unwrap();
        assert!(result.is_empty());
    }
}
