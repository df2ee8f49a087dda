//! Table configuration types (Functional Core - pure data).

use skillvo_core::query::{attributes, IndexDescriptor, ALL_INDEXES};

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub gsis: Vec<GsiConfig>,
}

/// A key attribute definition. Every key attribute of the Courses table is a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
}

impl KeyAttribute {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Global Secondary Index configuration. Indexes project all attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiConfig {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
}

impl From<&IndexDescriptor> for GsiConfig {
    fn from(index: &IndexDescriptor) -> Self {
        Self {
            name: index.name.to_string(),
            partition_key: KeyAttribute::new(index.key_attribute),
            sort_key: index.sort_attribute.map(KeyAttribute::new),
        }
    }
}

impl GsiConfig {
    /// Key attributes of this index, partition key first.
    pub fn key_attributes(&self) -> impl Iterator<Item = &KeyAttribute> {
        std::iter::once(&self.partition_key).chain(self.sort_key.as_ref())
    }
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical table configuration for courses.
///
/// The indexes are exactly the ones the query planner can choose from.
pub fn courses_table_config() -> TableConfig {
    TableConfig {
        table_name: course_service::config::DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute::new(attributes::COURSE_ID),
        gsis: ALL_INDEXES.iter().map(GsiConfig::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courses_table_config() {
        let config = courses_table_config();

        assert_eq!(config.table_name, "Courses");
        assert_eq!(config.partition_key.name, "courseId");

        let names: Vec<&str> = config.gsis.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["TenantIdIndex", "StatusIndex", "LevelIndex", "TagsIndex"]
        );
    }

    #[test]
    fn test_tenant_index_has_marketplace_sort_key() {
        let config = courses_table_config();
        let tenant = &config.gsis[0];

        let keys: Vec<&str> = tenant.key_attributes().map(|k| k.name.as_str()).collect();
        assert_eq!(keys, vec!["tenantId", "marketplace"]);
        assert!(config.gsis[1..].iter().all(|g| g.sort_key.is_none()));
    }

    #[test]
    fn test_with_table_name() {
        let config = courses_table_config().with_table_name("courses-dev");
        assert_eq!(config.table_name, "courses-dev");
    }
}
