use serde::Deserialize;

use crate::course::{CourseStatus, Level};

/// Attribute filter for listing courses.
///
/// Every field is optional. Values are assumed to be well-formed; enum
/// literals are validated when the filter is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseFilter {
    pub tenant_id: Option<String>,
    pub status: Option<CourseStatus>,
    pub level: Option<Level>,
    /// Requested tags, in order. Only the first one can be served by the tag index.
    #[serde(default)]
    pub tags: Vec<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    /// Only honored together with `tenant_id`.
    pub in_marketplace: Option<bool>,
}

impl CourseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
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

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_in_marketplace(mut self, in_marketplace: bool) -> Self {
        self.in_marketplace = Some(in_marketplace);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let filter = CourseFilter::new()
            .with_tenant_id("t1")
            .with_tags(["java", "spring"])
            .with_limit(5)
            .with_offset(10);

        assert_eq!(filter.tenant_id.as_deref(), Some("t1"));
        assert_eq!(filter.tags, vec!["java".to_string(), "spring".to_string()]);
        assert_eq!(filter.limit, Some(5));
        assert_eq!(filter.offset, Some(10));
    }

    #[test]
    fn test_deserialize() {
        let filter: CourseFilter = serde_json::from_str(
            r#"{"status": "PUBLISHED", "tags": ["java"], "inMarketplace": true}"#,
        )
        .unwrap();

        assert_eq!(filter.status, Some(CourseStatus::Published));
        assert_eq!(filter.tags, vec!["java".to_string()]);
        assert_eq!(filter.in_marketplace, Some(true));
        assert!(filter.tenant_id.is_none());
    }

    #[test]
    fn test_deserialize_rejects_unknown_level() {
        let result = serde_json::from_str::<CourseFilter>(r#"{"level": "EXPERT"}"#);
        assert!(result.is_err());
    }
}
