//! Request types for course commands.
//!
//! These share the field set of [`Course`]; the only work done here is
//! deciding which fields a caller may set and which the service owns
//! (id, status, version, marketplace flag, publication date).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{
    CourseStatus, Language, LearningMode, LessonNavigationMode, Level, PricingModel,
};
use super::types::{Author, Course, Prize, Publisher, Section};

/// Request payload for creating a new course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub tenant_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub topic_code: String,
    #[serde(default)]
    pub category_code: String,
    pub languages: Vec<Language>,
    pub level: Level,
    pub pricing_model: PricingModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<Prize>,
    pub learning_mode: LearningMode,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub duration: u32,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default = "default_navigation_mode")]
    pub lesson_navigation_mode: LessonNavigationMode,
}

fn default_navigation_mode() -> LessonNavigationMode {
    LessonNavigationMode::Sequential
}

impl CreateCourseRequest {
    /// Convert into a new draft course with a fresh ID.
    pub fn into_course(self) -> Course {
        Course {
            id: Uuid::new_v4(),
            tenant_id: self.tenant_id,
            title: self.title,
            description: self.description,
            topic_code: self.topic_code,
            category_code: self.category_code,
            languages: self.languages,
            level: self.level,
            pricing_model: self.pricing_model,
            prize: self.prize,
            learning_mode: self.learning_mode,
            points: self.points,
            tags: self.tags,
            authors: self.authors,
            publisher: self.publisher,
            published_on: None,
            image_url: self.image_url,
            in_marketplace: false,
            status: CourseStatus::Draft,
            duration: self.duration,
            sections: self.sections,
            lesson_navigation_mode: self.lesson_navigation_mode,
            version: 1,
        }
    }
}

/// Request payload for updating a course.
///
/// Replaces every editable field of the stored course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub topic_code: String,
    #[serde(default)]
    pub category_code: String,
    pub languages: Vec<Language>,
    pub level: Level,
    pub pricing_model: PricingModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<Prize>,
    pub learning_mode: LearningMode,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub duration: u32,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default = "default_navigation_mode")]
    pub lesson_navigation_mode: LessonNavigationMode,
}

impl UpdateCourseRequest {
    /// Apply updates to an existing course.
    ///
    /// Identity, tenant, lifecycle fields and version are left untouched.
    pub fn apply_to(self, course: &mut Course) {
        course.title = self.title;
        course.description = self.description;
        course.topic_code = self.topic_code;
        course.category_code = self.category_code;
        course.languages = self.languages;
        course.level = self.level;
        course.pricing_model = self.pricing_model;
        course.prize = self.prize;
        course.learning_mode = self.learning_mode;
        course.points = self.points;
        course.tags = self.tags;
        course.authors = self.authors;
        course.publisher = self.publisher;
        course.image_url = self.image_url;
        course.duration = self.duration;
        course.sections = self.sections;
        course.lesson_navigation_mode = self.lesson_navigation_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request_json() -> serde_json::Value {
        serde_json::json!({
            "tenantId": "t1",
            "title": "Rust 101",
            "description": "Ownership and borrowing",
            "languages": ["ENGLISH"],
            "level": "BEGINNER",
            "pricingModel": "FREE",
            "learningMode": "ONLINE",
            "tags": ["rust", "systems"],
            "authors": [{
                "id": "550e8400-e29b-41d4-a716-446655440010",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com"
            }],
            "duration": 90
        })
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateCourseRequest = serde_json::from_value(create_request_json()).unwrap();

        assert_eq!(request.points, 0);
        assert!(request.sections.is_empty());
        assert_eq!(
            request.lesson_navigation_mode,
            LessonNavigationMode::Sequential
        );
    }

    #[test]
    fn test_into_course_is_fresh_draft() {
        let request: CreateCourseRequest = serde_json::from_value(create_request_json()).unwrap();
        let course = request.into_course();

        assert_eq!(course.status, CourseStatus::Draft);
        assert_eq!(course.version, 1);
        assert!(!course.in_marketplace);
        assert_eq!(course.tags, vec!["rust".to_string(), "systems".to_string()]);
        assert_eq!(course.tenant_id, "t1");
    }

    #[test]
    fn test_create_request_rejects_unknown_level() {
        let mut json = create_request_json();
        json["level"] = serde_json::Value::String("EXPERT".to_string());

        assert!(serde_json::from_value::<CreateCourseRequest>(json).is_err());
    }

    #[test]
    fn test_apply_to_keeps_identity_and_lifecycle() {
        let mut course = Course::new("t1", "Old title", Level::Beginner)
            .with_status(CourseStatus::Published)
            .with_in_marketplace(true);
        let id = course.id;

        let request = UpdateCourseRequest {
            title: "New title".to_string(),
            description: "New description".to_string(),
            topic_code: "PROG".to_string(),
            category_code: "CS".to_string(),
            languages: vec![Language::English, Language::Hindi],
            level: Level::Intermediate,
            pricing_model: PricingModel::Free,
            prize: None,
            learning_mode: LearningMode::Hybrid,
            points: 10,
            tags: vec!["java".to_string()],
            authors: Vec::new(),
            publisher: None,
            image_url: None,
            duration: 45,
            sections: Vec::new(),
            lesson_navigation_mode: LessonNavigationMode::Flexible,
        };
        request.apply_to(&mut course);

        assert_eq!(course.id, id);
        assert_eq!(course.tenant_id, "t1");
        assert_eq!(course.status, CourseStatus::Published);
        assert!(course.in_marketplace);
        assert_eq!(course.version, 1);
        assert_eq!(course.title, "New title");
        assert_eq!(course.level, Level::Intermediate);
        assert_eq!(course.tags, vec!["java".to_string()]);
    }
}
