use thiserror::Error;

use super::enums::{ContentType, CourseStatus};

/// Errors that can occur when validating or transitioning a course.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("Tenant ID is required")]
    MissingTenantId,
    #[error("Title is required")]
    EmptyTitle,
    #[error("Description is required")]
    EmptyDescription,
    #[error("At least one language is required")]
    MissingLanguage,
    #[error("At least one author is required")]
    MissingAuthors,
    #[error("Duration must be greater than 0")]
    InvalidDuration,
    #[error("At least one section is required for publishing")]
    MissingSections,
    #[error("Prize is required for paid courses")]
    MissingPrize,
    #[error("{content_type} content requires a non-empty URL")]
    EmptyContentUrl { content_type: ContentType },
    #[error("Quiz content requires at least one quiz item")]
    EmptyQuiz,
    #[error("Question cannot be empty")]
    EmptyQuestion,
    #[error("Question '{question}' has no answer options")]
    MissingAnswerOptions { question: String },
    #[error("Answer cannot be empty")]
    EmptyAnswer,
    #[error("Cannot {action} a course with status {status}")]
    InvalidTransition {
        action: &'static str,
        status: CourseStatus,
    },
}

/// Error returned when an enum literal cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {type_name} value: {value}. Valid values are: {expected}")]
pub struct ParseEnumError {
    pub type_name: &'static str,
    pub value: String,
    pub expected: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_error_display() {
        assert_eq!(CourseError::EmptyTitle.to_string(), "Title is required");
        assert_eq!(
            CourseError::InvalidDuration.to_string(),
            "Duration must be greater than 0"
        );
    }

    #[test]
    fn test_content_error_display() {
        let error = CourseError::EmptyContentUrl {
            content_type: ContentType::Video,
        };
        assert_eq!(error.to_string(), "VIDEO content requires a non-empty URL");
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = CourseError::InvalidTransition {
            action: "publish",
            status: CourseStatus::Archived,
        };
        assert_eq!(error.to_string(), "Cannot publish a course with status ARCHIVED");
    }
}
