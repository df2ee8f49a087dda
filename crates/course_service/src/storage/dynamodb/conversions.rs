//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! courses. Decoding never defaults: a missing attribute or a malformed value
//! is a `RepositoryError::Decode`.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use skillvo_core::course::{
    AnswerOption, Author, Content, ContentType, Course, Lesson, Prize, Publisher, QuizItem,
    Section,
};
use skillvo_core::query::attributes;
use skillvo_core::storage::RepositoryError;
use uuid::Uuid;

pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Course conversions
// ============================================================================

/// Convert a Course to a DynamoDB item.
///
/// Besides the course fields, writes the index keys `marketplace` (string
/// form of `inMarketplace`) and `tag` (first tag, omitted when untagged).
pub fn course_to_item(course: &Course) -> Item {
    let mut item = HashMap::new();

    // Keys
    item.insert(attributes::COURSE_ID.to_string(), s(course.id));
    item.insert(attributes::TENANT_ID.to_string(), s(&course.tenant_id));
    item.insert(
        attributes::MARKETPLACE.to_string(),
        s(course.in_marketplace),
    );
    if let Some(tag) = course.primary_tag() {
        item.insert(attributes::TAG.to_string(), s(tag));
    }
    item.insert(attributes::STATUS.to_string(), s(course.status));
    item.insert(attributes::LEVEL.to_string(), s(course.level));

    // Data
    item.insert("title".to_string(), s(&course.title));
    item.insert("description".to_string(), s(&course.description));
    item.insert("topicCode".to_string(), s(&course.topic_code));
    item.insert("categoryCode".to_string(), s(&course.category_code));
    item.insert(
        "language".to_string(),
        AttributeValue::L(course.languages.iter().map(s).collect()),
    );
    item.insert("pricingModel".to_string(), s(course.pricing_model));
    if let Some(prize) = &course.prize {
        item.insert("prize".to_string(), prize_to_attribute(prize));
    }
    item.insert("learningMode".to_string(), s(course.learning_mode));
    item.insert("points".to_string(), n(course.points));
    item.insert(
        attributes::TAGS.to_string(),
        AttributeValue::L(course.tags.iter().map(s).collect()),
    );
    item.insert(
        "authors".to_string(),
        AttributeValue::L(course.authors.iter().map(author_to_attribute).collect()),
    );
    if let Some(publisher) = &course.publisher {
        item.insert("publisher".to_string(), publisher_to_attribute(publisher));
    }
    if let Some(published_on) = course.published_on {
        item.insert("publishedOn".to_string(), s(published_on.to_rfc3339()));
    }
    if let Some(image_url) = &course.image_url {
        item.insert("imageUrl".to_string(), s(image_url));
    }
    item.insert(
        attributes::IN_MARKETPLACE.to_string(),
        AttributeValue::Bool(course.in_marketplace),
    );
    item.insert("duration".to_string(), n(course.duration));
    item.insert(
        "sections".to_string(),
        AttributeValue::L(course.sections.iter().map(section_to_attribute).collect()),
    );
    item.insert(
        "lessonNavigationMode".to_string(),
        s(course.lesson_navigation_mode),
    );
    item.insert("version".to_string(), n(course.version));

    item
}

/// Convert a DynamoDB item to a Course.
pub fn item_to_course(item: &Item) -> Result<Course, RepositoryError> {
    Ok(Course {
        id: get_uuid(item, attributes::COURSE_ID)?,
        tenant_id: get_string(item, attributes::TENANT_ID)?,
        title: get_string(item, "title")?,
        description: get_string(item, "description")?,
        topic_code: get_string(item, "topicCode")?,
        category_code: get_string(item, "categoryCode")?,
        languages: get_list(item, "language")?
            .iter()
            .map(|v| parse_value(v, "language"))
            .collect::<Result<_, _>>()?,
        level: get_parsed(item, attributes::LEVEL)?,
        pricing_model: get_parsed(item, "pricingModel")?,
        prize: get_optional_map(item, "prize")?
            .map(attribute_to_prize)
            .transpose()?,
        learning_mode: get_parsed(item, "learningMode")?,
        points: get_number(item, "points")?,
        tags: get_list(item, attributes::TAGS)?
            .iter()
            .map(|v| as_string(v, attributes::TAGS))
            .collect::<Result<_, _>>()?,
        authors: get_list(item, "authors")?
            .iter()
            .map(|v| as_map(v, "authors").and_then(attribute_to_author))
            .collect::<Result<_, _>>()?,
        publisher: get_optional_map(item, "publisher")?
            .map(attribute_to_publisher)
            .transpose()?,
        published_on: get_optional_datetime(item, "publishedOn")?,
        image_url: get_optional_string(item, "imageUrl")?,
        in_marketplace: get_bool(item, attributes::IN_MARKETPLACE)?,
        status: get_parsed(item, attributes::STATUS)?,
        duration: get_number(item, "duration")?,
        sections: get_list(item, "sections")?
            .iter()
            .map(|v| as_map(v, "sections").and_then(attribute_to_section))
            .collect::<Result<_, _>>()?,
        lesson_navigation_mode: get_parsed(item, "lessonNavigationMode")?,
        version: get_number(item, "version")?,
    })
}

// ============================================================================
// Nested value conversions
// ============================================================================

fn prize_to_attribute(prize: &Prize) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        ("prize".to_string(), n(prize.amount)),
        ("discount".to_string(), n(prize.discount)),
        ("currency".to_string(), s(prize.currency)),
    ]))
}

fn attribute_to_prize(item: &Item) -> Result<Prize, RepositoryError> {
    Ok(Prize {
        amount: get_number(item, "prize")?,
        discount: get_number(item, "discount")?,
        currency: get_parsed(item, "currency")?,
    })
}

fn author_to_attribute(author: &Author) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        ("authorId".to_string(), s(author.id)),
        ("firstName".to_string(), s(&author.first_name)),
        ("lastName".to_string(), s(&author.last_name)),
        ("emailId".to_string(), s(&author.email)),
    ]))
}

fn attribute_to_author(item: &Item) -> Result<Author, RepositoryError> {
    Ok(Author {
        id: get_uuid(item, "authorId")?,
        first_name: get_string(item, "firstName")?,
        last_name: get_string(item, "lastName")?,
        email: get_string(item, "emailId")?,
    })
}

fn publisher_to_attribute(publisher: &Publisher) -> AttributeValue {
    let mut map = HashMap::from([
        ("publisherId".to_string(), s(publisher.id)),
        ("name".to_string(), s(&publisher.name)),
        ("type".to_string(), s(publisher.publisher_type)),
    ]);
    let optional = [
        ("logoUrl", &publisher.logo_url),
        ("website", &publisher.website),
        ("contactEmail", &publisher.contact_email),
        ("description", &publisher.description),
        ("country", &publisher.country),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            map.insert(key.to_string(), s(value));
        }
    }
    AttributeValue::M(map)
}

fn attribute_to_publisher(item: &Item) -> Result<Publisher, RepositoryError> {
    Ok(Publisher {
        id: get_uuid(item, "publisherId")?,
        name: get_string(item, "name")?,
        publisher_type: get_parsed(item, "type")?,
        logo_url: get_optional_string(item, "logoUrl")?,
        website: get_optional_string(item, "website")?,
        contact_email: get_optional_string(item, "contactEmail")?,
        description: get_optional_string(item, "description")?,
        country: get_optional_string(item, "country")?,
    })
}

fn section_to_attribute(section: &Section) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        ("sectionId".to_string(), s(section.id)),
        ("title".to_string(), s(&section.title)),
        ("description".to_string(), s(&section.description)),
        ("order".to_string(), n(section.order)),
        (
            "lessons".to_string(),
            AttributeValue::L(section.lessons.iter().map(lesson_to_attribute).collect()),
        ),
        ("duration".to_string(), n(section.duration)),
    ]))
}

fn attribute_to_section(item: &Item) -> Result<Section, RepositoryError> {
    Ok(Section {
        id: get_uuid(item, "sectionId")?,
        title: get_string(item, "title")?,
        description: get_string(item, "description")?,
        order: get_number(item, "order")?,
        lessons: get_list(item, "lessons")?
            .iter()
            .map(|v| as_map(v, "lessons").and_then(attribute_to_lesson))
            .collect::<Result<_, _>>()?,
        duration: get_number(item, "duration")?,
    })
}

fn lesson_to_attribute(lesson: &Lesson) -> AttributeValue {
    let mut map = HashMap::from([
        ("lessonId".to_string(), s(lesson.id)),
        ("title".to_string(), s(&lesson.title)),
        ("duration".to_string(), n(lesson.duration)),
        ("mandatory".to_string(), AttributeValue::Bool(lesson.mandatory)),
    ]);
    if let Some(url) = &lesson.cover_image_url {
        map.insert("coverImageUrl".to_string(), s(url));
    }
    if let Some(content) = &lesson.content {
        map.insert("content".to_string(), content_to_attribute(content));
    }
    AttributeValue::M(map)
}

fn attribute_to_lesson(item: &Item) -> Result<Lesson, RepositoryError> {
    Ok(Lesson {
        id: get_uuid(item, "lessonId")?,
        title: get_string(item, "title")?,
        duration: get_number(item, "duration")?,
        cover_image_url: get_optional_string(item, "coverImageUrl")?,
        mandatory: get_bool(item, "mandatory")?,
        content: get_optional_map(item, "content")?
            .map(attribute_to_content)
            .transpose()?,
    })
}

fn content_to_attribute(content: &Content) -> AttributeValue {
    let mut map = HashMap::from([("contentType".to_string(), s(content.content_type()))]);
    match content {
        Content::Video { video_url } => {
            map.insert("videoUrl".to_string(), s(video_url));
        }
        Content::Pdf { pdf_url } => {
            map.insert("pdfUrl".to_string(), s(pdf_url));
        }
        Content::Quiz { quiz_items } => {
            map.insert(
                "quizItems".to_string(),
                AttributeValue::L(quiz_items.iter().map(quiz_item_to_attribute).collect()),
            );
        }
    }
    AttributeValue::M(map)
}

fn attribute_to_content(item: &Item) -> Result<Content, RepositoryError> {
    match get_parsed(item, "contentType")? {
        ContentType::Video => Ok(Content::Video {
            video_url: get_string(item, "videoUrl")?,
        }),
        ContentType::Pdf => Ok(Content::Pdf {
            pdf_url: get_string(item, "pdfUrl")?,
        }),
        ContentType::Quiz => Ok(Content::Quiz {
            quiz_items: get_list(item, "quizItems")?
                .iter()
                .map(|v| as_map(v, "quizItems").and_then(attribute_to_quiz_item))
                .collect::<Result<_, _>>()?,
        }),
    }
}

fn quiz_item_to_attribute(quiz_item: &QuizItem) -> AttributeValue {
    let options = quiz_item
        .options
        .iter()
        .map(|option| {
            AttributeValue::M(HashMap::from([
                ("answer".to_string(), s(&option.answer)),
                ("correct".to_string(), AttributeValue::Bool(option.correct)),
            ]))
        })
        .collect();

    AttributeValue::M(HashMap::from([
        ("question".to_string(), s(&quiz_item.question)),
        ("options".to_string(), AttributeValue::L(options)),
        ("answerChoice".to_string(), s(quiz_item.answer_choice)),
    ]))
}

fn attribute_to_quiz_item(item: &Item) -> Result<QuizItem, RepositoryError> {
    Ok(QuizItem {
        question: get_string(item, "question")?,
        options: get_list(item, "options")?
            .iter()
            .map(|v| {
                let option = as_map(v, "options")?;
                Ok(AnswerOption {
                    answer: get_string(option, "answer")?,
                    correct: get_bool(option, "correct")?,
                })
            })
            .collect::<Result<_, RepositoryError>>()?,
        answer_choice: get_parsed(item, "answerChoice")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn s(value: impl ToString) -> AttributeValue {
    AttributeValue::S(value.to_string())
}

fn n(value: impl ToString) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

fn missing(key: &str) -> RepositoryError {
    RepositoryError::Decode(format!("Missing or invalid attribute: {key}"))
}

fn as_string(value: &AttributeValue, key: &str) -> Result<String, RepositoryError> {
    value
        .as_s()
        .map(|s| s.to_string())
        .map_err(|_| missing(key))
}

fn as_map<'a>(value: &'a AttributeValue, key: &str) -> Result<&'a Item, RepositoryError> {
    value.as_m().map_err(|_| missing(key))
}

fn parse_value<T>(value: &AttributeValue, key: &str) -> Result<T, RepositoryError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = as_string(value, key)?;
    raw.parse()
        .map_err(|e| RepositoryError::Decode(format!("Invalid {key}: {e}")))
}

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .ok_or_else(|| missing(key))
        .and_then(|v| as_string(v, key))
}

/// Get an optional string attribute. Present but not a string is an error.
fn get_optional_string(item: &Item, key: &str) -> Result<Option<String>, RepositoryError> {
    item.get(key).map(|v| as_string(v, key)).transpose()
}

/// Get a required UUID attribute.
fn get_uuid(item: &Item, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s).map_err(|e| RepositoryError::Decode(format!("Invalid UUID {key}: {e}")))
}

/// Get a required string attribute parsed with `FromStr` (enum literals).
fn get_parsed<T>(item: &Item, key: &str) -> Result<T, RepositoryError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    item.get(key)
        .ok_or_else(|| missing(key))
        .and_then(|v| parse_value(v, key))
}

/// Get a required number attribute.
fn get_number<T>(item: &Item, key: &str) -> Result<T, RepositoryError>
where
    T: FromStr,
{
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| missing(key))?;
    raw.parse()
        .map_err(|_| RepositoryError::Decode(format!("Invalid number {key}: {raw}")))
}

fn get_bool(item: &Item, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| missing(key))
}

fn get_list<'a>(item: &'a Item, key: &str) -> Result<&'a Vec<AttributeValue>, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_l().ok())
        .ok_or_else(|| missing(key))
}

/// Get an optional map attribute. Present but not a map is an error.
fn get_optional_map<'a>(item: &'a Item, key: &str) -> Result<Option<&'a Item>, RepositoryError> {
    item.get(key).map(|v| as_map(v, key)).transpose()
}

/// Get an optional datetime attribute (RFC 3339 format).
fn get_optional_datetime(item: &Item, key: &str) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    get_optional_string(item, key)?
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| RepositoryError::Decode(format!("Invalid datetime {key}: {e}")))
        })
        .transpose()
}
