//! Seed command implementation.

use chrono::{DateTime, Utc};
use skillvo_core::course::{self, generate_seed_courses, Course};
use skillvo_core::storage::CourseRepository;

use super::error::Result;

/// Generate seed courses, publishing them when requested.
///
/// Published seeds get `published_on` set to `now` and show up in
/// `status = PUBLISHED` queries.
pub fn prepare_seed_courses(
    tenant_id: &str,
    count: u32,
    publish: bool,
    now: DateTime<Utc>,
) -> Result<Vec<Course>> {
    let mut courses = generate_seed_courses(tenant_id, count);
    if publish {
        for draft in &mut courses {
            course::publish(draft, now)?;
        }
    }
    Ok(courses)
}

/// One-line summary of a seed course for the confirmation preview.
pub fn format_course_line(course: &Course) -> String {
    let tags = if course.tags.is_empty() {
        "untagged".to_string()
    } else {
        course.tags.join(", ")
    };
    format!("{} [{}] ({})", course.title, course.level, tags)
}

/// Insert courses through the repository, stopping at the first failure.
///
/// Each insert is a conditional create, so re-running never overwrites.
pub async fn seed_courses(repository: &dyn CourseRepository, courses: &[Course]) -> Result<u32> {
    let mut inserted = 0;
    for course in courses {
        repository.create_course(course).await?;
        inserted += 1;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_service::storage::InMemoryCourseRepository;
    use skillvo_core::course::CourseStatus;
    use skillvo_core::query::CourseFilter;

    #[test]
    fn test_prepare_draft_courses() {
        let courses = prepare_seed_courses("t1", 4, false, Utc::now()).unwrap();

        assert_eq!(courses.len(), 4);
        assert!(courses.iter().all(|c| c.status == CourseStatus::Draft));
    }

    #[test]
    fn test_prepare_published_courses() {
        let now = Utc::now();
        let courses = prepare_seed_courses("t1", 3, true, now).unwrap();

        assert!(courses
            .iter()
            .all(|c| c.status == CourseStatus::Published && c.published_on == Some(now)));
    }

    #[test]
    fn test_format_course_line() {
        let courses = generate_seed_courses("t1", 8);

        assert_eq!(
            format_course_line(&courses[0]),
            "Java Fundamentals [BEGINNER] (java, programming)"
        );
        assert_eq!(
            format_course_line(&courses[7]),
            "Design Systems [INTERMEDIATE] (untagged)"
        );
    }

    #[tokio::test]
    async fn test_seed_courses_inserts_all() {
        let repo = InMemoryCourseRepository::new();
        let courses = prepare_seed_courses("t1", 5, false, Utc::now()).unwrap();

        let inserted = seed_courses(&repo, &courses).await.unwrap();
        let stored = repo
            .list_courses(&CourseFilter::new().with_tenant_id("t1"))
            .await
            .unwrap();

        assert_eq!(inserted, 5);
        assert_eq!(stored.len(), 5);
    }

    #[tokio::test]
    async fn test_seed_courses_stops_on_duplicate() {
        let repo = InMemoryCourseRepository::new();
        let courses = prepare_seed_courses("t1", 2, false, Utc::now()).unwrap();
        seed_courses(&repo, &courses[..1]).await.unwrap();

        let result = seed_courses(&repo, &courses).await;

        assert!(result.is_err());
    }
}
