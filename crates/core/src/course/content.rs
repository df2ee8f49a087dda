//! Lesson content: videos, PDFs and quizzes.
//!
//! Constructors validate their input. Content deserialized from JSON skips
//! the constructors and is checked with [`Content::validate`] instead.

use serde::{Deserialize, Serialize};

use super::enums::{AnswerChoice, ContentType};
use super::error::CourseError;

/// The material a lesson delivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "contentType",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Content {
    Video { video_url: String },
    Pdf { pdf_url: String },
    Quiz { quiz_items: Vec<QuizItem> },
}

/// One question of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<AnswerOption>,
    pub answer_choice: AnswerChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub answer: String,
    pub correct: bool,
}

impl Content {
    pub fn video(url: impl Into<String>) -> Result<Self, CourseError> {
        let content = Content::Video {
            video_url: url.into(),
        };
        content.validate()?;
        Ok(content)
    }

    pub fn pdf(url: impl Into<String>) -> Result<Self, CourseError> {
        let content = Content::Pdf {
            pdf_url: url.into(),
        };
        content.validate()?;
        Ok(content)
    }

    pub fn quiz(quiz_items: Vec<QuizItem>) -> Result<Self, CourseError> {
        let content = Content::Quiz { quiz_items };
        content.validate()?;
        Ok(content)
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Video { .. } => ContentType::Video,
            Content::Pdf { .. } => ContentType::Pdf,
            Content::Quiz { .. } => ContentType::Quiz,
        }
    }

    /// Checks URLs are non-empty and every quiz item is well formed.
    pub fn validate(&self) -> Result<(), CourseError> {
        match self {
            Content::Video { video_url: url } | Content::Pdf { pdf_url: url } => {
                if url.trim().is_empty() {
                    return Err(CourseError::EmptyContentUrl {
                        content_type: self.content_type(),
                    });
                }
                Ok(())
            }
            Content::Quiz { quiz_items } => {
                if quiz_items.is_empty() {
                    return Err(CourseError::EmptyQuiz);
                }
                quiz_items.iter().try_for_each(QuizItem::validate)
            }
        }
    }
}

impl QuizItem {
    pub fn new(
        question: impl Into<String>,
        options: Vec<AnswerOption>,
        answer_choice: AnswerChoice,
    ) -> Result<Self, CourseError> {
        let item = Self {
            question: question.into(),
            options,
            answer_choice,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), CourseError> {
        if self.question.trim().is_empty() {
            return Err(CourseError::EmptyQuestion);
        }
        if self.options.is_empty() {
            return Err(CourseError::MissingAnswerOptions {
                question: self.question.clone(),
            });
        }
        self.options.iter().try_for_each(AnswerOption::validate)
    }

    /// The options marked correct.
    pub fn correct_answers(&self) -> impl Iterator<Item = &AnswerOption> {
        self.options.iter().filter(|option| option.correct)
    }
}

impl AnswerOption {
    pub fn new(answer: impl Into<String>, correct: bool) -> Result<Self, CourseError> {
        let option = Self {
            answer: answer.into(),
            correct,
        };
        option.validate()?;
        Ok(option)
    }

    pub fn validate(&self) -> Result<(), CourseError> {
        if self.answer.trim().is_empty() {
            return Err(CourseError::EmptyAnswer);
        }
        Ok(())
    }
}
