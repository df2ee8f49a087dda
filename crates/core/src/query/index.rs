//! Attribute names of stored course records and the secondary indexes over them.

/// Attribute names used in stored course records.
pub mod attributes {
    pub const COURSE_ID: &str = "courseId";
    pub const TENANT_ID: &str = "tenantId";
    pub const STATUS: &str = "status";
    pub const LEVEL: &str = "level";
    pub const TAGS: &str = "tags";
    /// First tag of the course; absent when the course has no tags.
    pub const TAG: &str = "tag";
    /// `"true"` or `"false"`; mirrors `inMarketplace` as an index key.
    pub const MARKETPLACE: &str = "marketplace";
    pub const IN_MARKETPLACE: &str = "inMarketplace";
}

/// A single-attribute secondary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexDescriptor {
    pub name: &'static str,
    pub key_attribute: &'static str,
    pub sort_attribute: Option<&'static str>,
}

pub const TENANT_INDEX: IndexDescriptor = IndexDescriptor {
    name: "TenantIdIndex",
    key_attribute: attributes::TENANT_ID,
    sort_attribute: Some(attributes::MARKETPLACE),
};

pub const STATUS_INDEX: IndexDescriptor = IndexDescriptor {
    name: "StatusIndex",
    key_attribute: attributes::STATUS,
    sort_attribute: None,
};

pub const LEVEL_INDEX: IndexDescriptor = IndexDescriptor {
    name: "LevelIndex",
    key_attribute: attributes::LEVEL,
    sort_attribute: None,
};

pub const TAGS_INDEX: IndexDescriptor = IndexDescriptor {
    name: "TagsIndex",
    key_attribute: attributes::TAG,
    sort_attribute: None,
};

/// All indexes, in planner priority order.
pub const ALL_INDEXES: [IndexDescriptor; 4] = [TENANT_INDEX, STATUS_INDEX, LEVEL_INDEX, TAGS_INDEX];
