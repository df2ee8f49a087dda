//! Mock data generation for testing and seeding.
//!
//! Pure functions producing plausible courses. Used by unit tests and by the
//! `xtask dynamodb seed` command.

use uuid::Uuid;

use super::enums::{Currency, Level, PricingModel};
use super::content::Content;
use super::types::{Author, Course, Lesson, Prize, Section};

const TITLES: [(&str, Level, &[&str]); 8] = [
    ("Java Fundamentals", Level::Beginner, &["java", "programming"]),
    ("Spring Boot in Practice", Level::Intermediate, &["java", "spring"]),
    ("Hibernate Deep Dive", Level::Advanced, &["java", "hibernate"]),
    ("Python for Data Analysis", Level::Beginner, &["python", "data"]),
    ("Async Rust", Level::Advanced, &["rust", "async"]),
    ("Cloud Architecture on AWS", Level::Intermediate, &["aws", "cloud"]),
    ("Intro to SQL", Level::Beginner, &["sql"]),
    ("Design Systems", Level::Intermediate, &[]),
];

/// Generate `count` draft courses for a tenant.
///
/// Titles, levels and tags cycle through a fixed catalogue; every third
/// course is paid. Each course has one author and one section so it can be
/// published without further edits.
///
/// # Example
///
/// ```
/// use skillvo_core::course::generate_seed_courses;
///
/// let courses = generate_seed_courses("tenant-1", 10);
///
/// assert_eq!(courses.len(), 10);
/// assert!(courses.iter().all(|c| c.tenant_id == "tenant-1"));
/// ```
pub fn generate_seed_courses(tenant_id: &str, count: u32) -> Vec<Course> {
    (0..count as usize)
        .map(|i| {
            let (title, level, tags) = TITLES[i % TITLES.len()];
            let round = i / TITLES.len();
            let title = if round == 0 {
                title.to_string()
            } else {
                format!("{title} ({})", round + 1)
            };

            let mut course = Course::new(tenant_id, title.clone(), level)
                .with_description(format!("Everything you need to know about {title}."))
                .with_tags(tags.iter().copied())
                .with_author(Author {
                    id: Uuid::new_v4(),
                    first_name: "Grace".to_string(),
                    last_name: "Hopper".to_string(),
                    email: "grace@example.com".to_string(),
                })
                .with_section(Section {
                    id: Uuid::new_v4(),
                    title: "Introduction".to_string(),
                    description: String::new(),
                    order: 1,
                    lessons: vec![Lesson::new("Welcome", 10.0).mandatory().with_content(
                        Content::Video {
                            video_url: format!("https://cdn.skillvo.test/videos/{}.mp4", i + 1),
                        },
                    )],
                    duration: 30,
                })
                .with_duration(30 + 15 * (i as u32 % 4));

            if i % 3 == 2 {
                course.pricing_model = PricingModel::Paid;
                course.prize = Some(Prize {
                    amount: 999.0,
                    discount: 0,
                    currency: Currency::Inr,
                });
            }
            course
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::operations::validate_for_publishing;

    #[test]
    fn test_seed_courses_are_publishable() {
        let courses = generate_seed_courses("t1", 12);

        assert_eq!(courses.len(), 12);
        for course in &courses {
            assert!(validate_for_publishing(course).is_ok(), "{}", course.title);
        }
    }

    #[test]
    fn test_seed_titles_are_unique() {
        let courses = generate_seed_courses("t1", 20);
        let mut titles: Vec<_> = courses.iter().map(|c| c.title.as_str()).collect();
        titles.sort();
        titles.dedup();

        assert_eq!(titles.len(), 20);
    }

    #[test]
    fn test_seed_includes_untagged_course() {
        let courses = generate_seed_courses("t1", 8);
        assert!(courses.iter().any(|c| c.tags.is_empty()));
    }
}
