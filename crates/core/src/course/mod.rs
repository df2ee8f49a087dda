mod content;
mod enums;
mod error;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use content::{AnswerOption, Content, QuizItem};
pub use enums::{
    AnswerChoice, ContentType, CourseStatus, Currency, Language, LearningMode,
    LessonNavigationMode, Level, PricingModel, PublisherType,
};
pub use error::{CourseError, ParseEnumError};
pub use mock_data::generate_seed_courses;
pub use operations::{
    apply_update, archive, ensure_deletable, publish, validate_course, validate_for_publishing,
};
pub use requests::{CreateCourseRequest, UpdateCourseRequest};
pub use types::{Author, Course, Lesson, Prize, Publisher, Section};
