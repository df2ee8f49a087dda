use crate::course::Course;
use crate::storage::Result;

use super::filter::CourseFilter;

/// Turns raw store records into the final answer for a filter.
///
/// Decodes every record, sorts by course ID ascending, then applies offset
/// and limit. A single record that fails to decode fails the whole call.
/// The plan's key and filter expressions already narrowed the records;
/// nothing is filtered here.
pub fn post_process<R, F>(records: Vec<R>, filter: &CourseFilter, decode: F) -> Result<Vec<Course>>
where
    F: FnMut(R) -> Result<Course>,
{
    let mut courses = records.into_iter().map(decode).collect::<Result<Vec<_>>>()?;
    sort_by_id(&mut courses);
    Ok(paginate(courses, filter.offset, filter.limit))
}

/// Sorts courses by ID.
///
/// UUID byte order equals the lexicographic order of the lowercase
/// hyphenated string form.
pub fn sort_by_id(courses: &mut [Course]) {
    courses.sort_by_key(|course| course.id);
}

/// Returns the items at positions `[offset, offset + limit)`.
///
/// An offset past the end yields an empty vector.
pub fn paginate<T>(items: Vec<T>, offset: Option<usize>, limit: Option<usize>) -> Vec<T> {
    let offset = offset.unwrap_or(0);
    if offset >= items.len() {
        return Vec::new();
    }
    let iter = items.into_iter().skip(offset);
    match limit {
        Some(limit) => iter.take(limit).collect(),
        None => iter.collect(),
    }
}
