use chrono::{DateTime, Utc};

use super::content::Content;
use super::enums::{CourseStatus, PricingModel};
use super::error::CourseError;
use super::requests::UpdateCourseRequest;
use super::types::Course;

/// Validates a course before creation or update.
pub fn validate_course(course: &Course) -> Result<(), CourseError> {
    if course.tenant_id.trim().is_empty() {
        return Err(CourseError::MissingTenantId);
    }
    validate_content(course)
}

/// Validates a course before it is published.
///
/// Publishing requires everything [`validate_course`] does, plus at least
/// one section and a prize for paid courses.
pub fn validate_for_publishing(course: &Course) -> Result<(), CourseError> {
    validate_course(course)?;
    if course.sections.is_empty() {
        return Err(CourseError::MissingSections);
    }
    if course.pricing_model == PricingModel::Paid && course.prize.is_none() {
        return Err(CourseError::MissingPrize);
    }
    Ok(())
}

fn validate_content(course: &Course) -> Result<(), CourseError> {
    if course.title.trim().is_empty() {
        return Err(CourseError::EmptyTitle);
    }
    if course.description.trim().is_empty() {
        return Err(CourseError::EmptyDescription);
    }
    if course.languages.is_empty() {
        return Err(CourseError::MissingLanguage);
    }
    if course.authors.is_empty() {
        return Err(CourseError::MissingAuthors);
    }
    if course.duration == 0 {
        return Err(CourseError::InvalidDuration);
    }
    course
        .sections
        .iter()
        .flat_map(|section| &section.lessons)
        .filter_map(|lesson| lesson.content.as_ref())
        .try_for_each(Content::validate)
}

/// Applies an update request to a course.
///
/// Archived courses cannot be edited. The course is only modified when the
/// updated content passes validation.
pub fn apply_update(course: &mut Course, request: UpdateCourseRequest) -> Result<(), CourseError> {
    if course.status == CourseStatus::Archived {
        return Err(CourseError::InvalidTransition {
            action: "update",
            status: course.status,
        });
    }

    let mut updated = course.clone();
    request.apply_to(&mut updated);
    validate_content(&updated)?;

    updated.version += 1;
    *course = updated;
    Ok(())
}

/// Publishes a course at the given instant.
pub fn publish(course: &mut Course, now: DateTime<Utc>) -> Result<(), CourseError> {
    if course.status == CourseStatus::Archived {
        return Err(CourseError::InvalidTransition {
            action: "publish",
            status: course.status,
        });
    }
    validate_for_publishing(course)?;

    course.status = CourseStatus::Published;
    course.published_on = Some(now);
    course.in_marketplace = true;
    course.version += 1;
    Ok(())
}

/// Archives a course and removes it from the marketplace.
pub fn archive(course: &mut Course) -> Result<(), CourseError> {
    if course.status == CourseStatus::Archived {
        return Err(CourseError::InvalidTransition {
            action: "archive",
            status: course.status,
        });
    }

    course.status = CourseStatus::Archived;
    course.in_marketplace = false;
    course.version += 1;
    Ok(())
}

/// Checks that a course may be deleted. Published courses must be archived first.
pub fn ensure_deletable(course: &Course) -> Result<(), CourseError> {
    if course.status == CourseStatus::Published {
        return Err(CourseError::InvalidTransition {
            action: "delete",
            status: course.status,
        });
    }
    Ok(())
}
