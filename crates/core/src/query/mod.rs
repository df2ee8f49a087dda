//! Translation of a course filter into a retrieval plan, and the
//! post-processing applied to whatever the plan retrieves.

mod filter;
mod index;
mod pagination;
mod plan;
mod planner;

pub use filter::CourseFilter;
pub use index::{
    attributes, IndexDescriptor, ALL_INDEXES, LEVEL_INDEX, STATUS_INDEX, TAGS_INDEX, TENANT_INDEX,
};
pub use pagination::{paginate, post_process, sort_by_id};
pub use plan::{
    attribute_value, FilterClause, KeyCondition, QueryPlan, RenderedPlan, ResidualFilter,
};
pub use planner::plan;
