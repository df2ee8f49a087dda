use super::filter::CourseFilter;
use super::index::{attributes, IndexDescriptor, LEVEL_INDEX, STATUS_INDEX, TAGS_INDEX, TENANT_INDEX};
use super::plan::{FilterClause, KeyCondition, QueryPlan, ResidualFilter};

/// Chooses how to retrieve the courses matching a filter.
///
/// At most one index is used, first match wins: tenant, then status, then
/// level, then the first requested tag. `in_marketplace` narrows the tenant
/// index and is otherwise ignored. When tags are requested but another index
/// was chosen, a residual filter keeps records carrying any requested tag.
/// Without any indexable attribute the plan falls back to a scan.
///
/// Limit and offset never reach the plan; see [`post_process`](super::post_process).
pub fn plan(filter: &CourseFilter) -> QueryPlan {
    let primary = primary_index(filter);

    let mut residual = ResidualFilter::default();
    if !filter.tags.is_empty() && primary.as_ref().map(|(index, _)| *index) != Some(TAGS_INDEX) {
        residual = residual.and(FilterClause::ContainsAny {
            attribute: attributes::TAGS,
            values: filter.tags.clone(),
        });
    }
    let residual = (!residual.is_empty()).then_some(residual);

    match primary {
        Some((index, key_conditions)) => QueryPlan::Indexed {
            index,
            key_conditions,
            filter: residual,
        },
        None => QueryPlan::ScanFallback { filter: residual },
    }
}

fn primary_index(filter: &CourseFilter) -> Option<(IndexDescriptor, Vec<KeyCondition>)> {
    if let Some(tenant_id) = &filter.tenant_id {
        let mut conditions = vec![key(attributes::TENANT_ID, tenant_id)];
        if let Some(in_marketplace) = filter.in_marketplace {
            conditions.push(key(attributes::MARKETPLACE, in_marketplace.to_string()));
        }
        return Some((TENANT_INDEX, conditions));
    }
    if let Some(status) = filter.status {
        return Some((STATUS_INDEX, vec![key(attributes::STATUS, status.as_str())]));
    }
    if let Some(level) = filter.level {
        return Some((LEVEL_INDEX, vec![key(attributes::LEVEL, level.as_str())]));
    }
    filter
        .tags
        .first()
        .map(|tag| (TAGS_INDEX, vec![key(attributes::TAG, tag)]))
}

fn key(attribute: &'static str, value: impl Into<String>) -> KeyCondition {
    KeyCondition {
        attribute,
        value: value.into(),
    }
}
