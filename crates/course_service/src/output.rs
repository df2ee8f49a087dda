//! Output formatting for CLI results.

use serde::Serialize;
use skillvo_core::course::Course;

use crate::cli::OutputFormat;

/// Format a single course.
pub fn format_course(course: &Course, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(course),
        OutputFormat::Table => format_row(course),
    }
}

/// Format a list of courses.
pub fn format_courses(courses: &[Course], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&courses),
        OutputFormat::Table if courses.is_empty() => "No courses found.".to_string(),
        OutputFormat::Table => courses
            .iter()
            .map(format_row)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn format_row(course: &Course) -> String {
    format!(
        "{}  {:<10} {:<12} {:<9} {}  [{}]",
        course.id,
        course.status,
        course.level,
        course.tenant_id,
        course.title,
        course.tags.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillvo_core::course::Level;
    use uuid::Uuid;

    #[test]
    fn test_format_row() {
        let course = Course::new("t1", "Rust 101", Level::Beginner)
            .with_id(Uuid::nil())
            .with_tags(["rust", "systems"]);

        let row = format_course(&course, OutputFormat::Table);

        assert!(row.starts_with("00000000-0000-0000-0000-000000000000"));
        assert!(row.contains("DRAFT"));
        assert!(row.ends_with("Rust 101  [rust, systems]"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_courses(&[], OutputFormat::Table), "No courses found.");
        assert_eq!(format_courses(&[], OutputFormat::Json), "[]");
    }
}
