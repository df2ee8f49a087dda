use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::Content;
use super::enums::{
    CourseStatus, Currency, Language, LearningMode, LessonNavigationMode, Level, PricingModel,
    PublisherType,
};

/// Price of a paid course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub amount: f64,
    /// Discount in percent.
    pub discount: u32,
    pub currency: Currency,
}

/// A person credited as author of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Author {
    /// Returns "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The organisation or individual publishing a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub publisher_type: PublisherType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A single unit of teaching inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    /// Duration in minutes.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl Lesson {
    pub fn new(title: impl Into<String>, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            duration,
            cover_image_url: None,
            mandatory: false,
            content: None,
        }
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }
}

/// An ordered block of lessons inside a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub order: u32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    /// Duration in minutes.
    pub duration: u32,
}

/// The course aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub tenant_id: String,
    pub title: String,
    pub description: String,
    pub topic_code: String,
    pub category_code: String,
    pub languages: Vec<Language>,
    pub level: Level,
    pub pricing_model: PricingModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<Prize>,
    pub learning_mode: LearningMode,
    pub points: u32,
    /// Ordered tags. The first tag is the key of the tag index.
    pub tags: Vec<String>,
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub in_marketplace: bool,
    pub status: CourseStatus,
    /// Duration in minutes.
    pub duration: u32,
    pub sections: Vec<Section>,
    pub lesson_navigation_mode: LessonNavigationMode,
    pub version: u32,
}

impl Course {
    /// Creates a new draft course with the given tenant, title and level.
    ///
    /// Everything else is empty or set to the most permissive default; callers
    /// fill in the rest with the `with_*` helpers or by assigning fields.
    pub fn new(tenant_id: impl Into<String>, title: impl Into<String>, level: Level) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id: tenant_id.into(),
            title: title.into(),
            description: String::new(),
            topic_code: String::new(),
            category_code: String::new(),
            languages: vec![Language::English],
            level,
            pricing_model: PricingModel::Free,
            prize: None,
            learning_mode: LearningMode::Online,
            points: 0,
            tags: Vec::new(),
            authors: Vec::new(),
            publisher: None,
            published_on: None,
            image_url: None,
            in_marketplace: false,
            status: CourseStatus::Draft,
            duration: 0,
            sections: Vec::new(),
            lesson_navigation_mode: LessonNavigationMode::Sequential,
            version: 1,
        }
    }

    /// Sets a specific ID for this course (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_in_marketplace(mut self, in_marketplace: bool) -> Self {
        self.in_marketplace = in_marketplace;
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the key of the tag index for this course, if it has any tags.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Returns the display names of all authors.
    pub fn author_names(&self) -> Vec<String> {
        self.authors.iter().map(Author::display_name).collect()
    }
}
