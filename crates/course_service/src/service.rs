//! Course commands and queries.
//!
//! Every command loads the course, applies a pure transition from
//! `skillvo_core::course`, persists the result and, for create and publish,
//! emits a domain event. Events are published after the write; a publish
//! failure is logged and returned, but the write is not rolled back.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use skillvo_core::course::{
    self, validate_course, Course, CreateCourseRequest, UpdateCourseRequest,
};
use skillvo_core::events::{CourseEvent, DomainEvent, EventPublisher};
use skillvo_core::query::CourseFilter;
use skillvo_core::storage::CourseRepository;

use crate::error::{Result, ServiceError};

#[derive(Clone)]
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Creates a draft course and emits `CourseCreated`.
    pub async fn create(&self, request: CreateCourseRequest) -> Result<Course> {
        let course = request.into_course();
        validate_course(&course)?;

        self.repository.create_course(&course).await?;
        tracing::info!(course_id = %course.id, tenant_id = %course.tenant_id, "Course created");

        self.emit(CourseEvent::created(&course)).await?;
        Ok(course)
    }

    pub async fn get(&self, id: Uuid) -> Result<Course> {
        self.repository
            .get_course(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn update(&self, id: Uuid, request: UpdateCourseRequest) -> Result<Course> {
        let mut course = self.get(id).await?;
        course::apply_update(&mut course, request)?;

        self.repository.update_course(&course).await?;
        tracing::info!(course_id = %id, version = course.version, "Course updated");
        Ok(course)
    }

    /// Publishes a course to the marketplace and emits `CoursePublished`.
    pub async fn publish(&self, id: Uuid) -> Result<Course> {
        let mut course = self.get(id).await?;
        course::publish(&mut course, Utc::now())?;

        self.repository.update_course(&course).await?;
        tracing::info!(course_id = %id, version = course.version, "Course published");

        self.emit(CourseEvent::published(&course)).await?;
        Ok(course)
    }

    pub async fn archive(&self, id: Uuid) -> Result<Course> {
        let mut course = self.get(id).await?;
        course::archive(&mut course)?;

        self.repository.update_course(&course).await?;
        tracing::info!(course_id = %id, version = course.version, "Course archived");
        Ok(course)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let course = self.get(id).await?;
        course::ensure_deletable(&course)?;

        self.repository.delete_course(id).await?;
        tracing::info!(course_id = %id, "Course deleted");
        Ok(())
    }

    pub async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        Ok(self.repository.list_courses(filter).await?)
    }

    async fn emit(&self, payload: CourseEvent) -> Result<()> {
        let event = DomainEvent::new(payload);
        if let Err(err) = self.publisher.publish(&event).await {
            tracing::error!(
                event_id = %event.event_id,
                event_type = event.event_type(),
                error = %err,
                "Failed to publish domain event"
            );
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::InMemoryEventPublisher;
    use crate::storage::InMemoryCourseRepository;
    use skillvo_core::course::{
        Author, CourseError, CourseStatus, Language, LearningMode, LessonNavigationMode, Level,
        PricingModel, Section,
    };
    use skillvo_core::storage::RepositoryError;

    fn author() -> Author {
        Author {
            id: Uuid::from_u128(10),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn section() -> Section {
        Section {
            id: Uuid::from_u128(20),
            title: "Getting started".to_string(),
            description: String::new(),
            order: 1,
            lessons: vec![],
            duration: 30,
        }
    }

    fn create_request(tenant_id: &str, sections: Vec<Section>) -> CreateCourseRequest {
        CreateCourseRequest {
            tenant_id: tenant_id.to_string(),
            title: "Rust 101".to_string(),
            description: "Ownership and borrowing".to_string(),
            topic_code: "PROG".to_string(),
            category_code: "CS".to_string(),
            languages: vec![Language::English],
            level: Level::Beginner,
            pricing_model: PricingModel::Free,
            prize: None,
            learning_mode: LearningMode::Online,
            points: 0,
            tags: vec!["rust".to_string()],
            authors: vec![author()],
            publisher: None,
            image_url: None,
            duration: 90,
            sections,
            lesson_navigation_mode: LessonNavigationMode::Sequential,
        }
    }

    fn update_request(title: &str) -> UpdateCourseRequest {
        UpdateCourseRequest {
            title: title.to_string(),
            description: "Lifetimes too".to_string(),
            topic_code: "PROG".to_string(),
            category_code: "CS".to_string(),
            languages: vec![Language::English],
            level: Level::Intermediate,
            pricing_model: PricingModel::Free,
            prize: None,
            learning_mode: LearningMode::Online,
            points: 0,
            tags: vec!["rust".to_string()],
            authors: vec![author()],
            publisher: None,
            image_url: None,
            duration: 120,
            sections: vec![section()],
            lesson_navigation_mode: LessonNavigationMode::Sequential,
        }
    }

    fn service() -> (CourseService, InMemoryEventPublisher) {
        let publisher = InMemoryEventPublisher::new();
        let service = CourseService::new(
            Arc::new(InMemoryCourseRepository::new()),
            Arc::new(publisher.clone()),
        );
        (service, publisher)
    }

    #[tokio::test]
    async fn test_create_emits_course_created() {
        let (service, publisher) = service();

        let course = service.create(create_request("t1", Vec::new())).await.unwrap();

        assert_eq!(course.status, CourseStatus::Draft);
        assert_eq!(service.get(course.id).await.unwrap(), course);

        let events = publisher.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "CourseCreated");
    }

    #[tokio::test]
    async fn test_create_invalid_is_not_stored() {
        let (service, publisher) = service();

        let result = service.create(create_request(" ", Vec::new())).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(CourseError::MissingTenantId))
        ));
        assert!(service.list(&CourseFilter::new()).await.unwrap().is_empty());
        assert!(publisher.events().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_course() {
        let (service, _) = service();
        let id = Uuid::new_v4();

        assert!(matches!(
            service.get(id).await,
            Err(ServiceError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let (service, _) = service();
        let course = service.create(create_request("t1", Vec::new())).await.unwrap();

        let updated = service
            .update(course.id, update_request("Rust 102"))
            .await
            .unwrap();

        assert_eq!(updated.title, "Rust 102");
        assert_eq!(updated.version, 2);
        assert_eq!(service.get(course.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_publish_flow() {
        let (service, publisher) = service();
        let course = service
            .create(create_request("t1", vec![section()]))
            .await
            .unwrap();

        let published = service.publish(course.id).await.unwrap();

        assert_eq!(published.status, CourseStatus::Published);
        assert!(published.in_marketplace);
        assert!(published.published_on.is_some());

        let events = publisher.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].event_type(), "CoursePublished");

        let listed = service
            .list(
                &CourseFilter::new()
                    .with_tenant_id("t1")
                    .with_in_marketplace(true),
            )
            .await
            .unwrap();
        assert_eq!(listed, vec![published]);
    }

    #[tokio::test]
    async fn test_publish_without_sections_fails() {
        let (service, publisher) = service();
        let course = service.create(create_request("t1", Vec::new())).await.unwrap();

        let result = service.publish(course.id).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(CourseError::MissingSections))
        ));
        assert_eq!(publisher.events().await.len(), 1);
        assert_eq!(
            service.get(course.id).await.unwrap().status,
            CourseStatus::Draft
        );
    }

    #[tokio::test]
    async fn test_archive_then_delete() {
        let (service, _) = service();
        let course = service
            .create(create_request("t1", vec![section()]))
            .await
            .unwrap();
        service.publish(course.id).await.unwrap();

        let result = service.delete(course.id).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(CourseError::InvalidTransition { .. }))
        ));

        let archived = service.archive(course.id).await.unwrap();
        assert_eq!(archived.status, CourseStatus::Archived);
        assert!(!archived.in_marketplace);

        let result = service.update(course.id, update_request("Again")).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(CourseError::InvalidTransition { .. }))
        ));

        service.delete(course.id).await.unwrap();
        assert!(matches!(
            service.get(course.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_event_failure_surfaces_after_write() {
        let repository = Arc::new(InMemoryCourseRepository::new());
        let service = CourseService::new(
            repository.clone(),
            Arc::new(InMemoryEventPublisher::failing()),
        );

        let result = service.create(create_request("t1", Vec::new())).await;
        assert!(matches!(result, Err(ServiceError::Event(_))));

        let stored = repository
            .list_courses(&CourseFilter::new().with_tenant_id("t1"))
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let (service, _) = service();
        for _ in 0..5 {
            service.create(create_request("t1", Vec::new())).await.unwrap();
        }

        let all = service.list(&CourseFilter::new()).await.unwrap();
        let page = service
            .list(&CourseFilter::new().with_offset(1).with_limit(2))
            .await
            .unwrap();

        assert_eq!(all.len(), 5);
        assert_eq!(page, all[1..3].to_vec());
    }

    #[tokio::test]
    async fn test_repository_errors_pass_through() {
        let (service, _) = service();
        let course = Course::new("t1", "Ghost", Level::Beginner);

        let err = service.delete(course.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = ServiceError::from(RepositoryError::Transport("throttled".to_string()));
        assert_eq!(err.status_code(), 500);
    }
}
