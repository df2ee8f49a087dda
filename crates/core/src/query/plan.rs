use std::collections::BTreeMap;

use crate::course::Course;

use super::index::{attributes, IndexDescriptor};

/// Equality condition on an index key attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCondition {
    pub attribute: &'static str,
    pub value: String,
}

/// A single residual predicate, evaluated after the key condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// The list attribute contains at least one of `values`.
    ContainsAny {
        attribute: &'static str,
        values: Vec<String>,
    },
}

/// Residual filter: every clause must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidualFilter {
    pub clauses: Vec<FilterClause>,
}

impl ResidualFilter {
    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// How to retrieve the candidate records for a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    Indexed {
        index: IndexDescriptor,
        key_conditions: Vec<KeyCondition>,
        filter: Option<ResidualFilter>,
    },
    ScanFallback {
        filter: Option<ResidualFilter>,
    },
}

/// A plan rendered into store expressions with named placeholders.
///
/// Placeholder maps are ordered so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPlan {
    pub index_name: Option<&'static str>,
    pub key_condition_expression: Option<String>,
    pub filter_expression: Option<String>,
    /// `#name` -> attribute name.
    pub attribute_names: BTreeMap<String, String>,
    /// `:value` -> string value.
    pub attribute_values: BTreeMap<String, String>,
}

impl QueryPlan {
    pub fn index(&self) -> Option<&IndexDescriptor> {
        match self {
            QueryPlan::Indexed { index, .. } => Some(index),
            QueryPlan::ScanFallback { .. } => None,
        }
    }

    pub fn residual_filter(&self) -> Option<&ResidualFilter> {
        match self {
            QueryPlan::Indexed { filter, .. } | QueryPlan::ScanFallback { filter } => {
                filter.as_ref()
            }
        }
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, QueryPlan::ScanFallback { .. })
    }

    /// Renders key condition and filter expressions.
    ///
    /// Key conditions become `#attr = :attr` joined with `AND`. A
    /// `ContainsAny` clause becomes
    /// `(contains(#tags, :tagValue0) OR contains(#tags, :tagValue1))`.
    pub fn render(&self) -> RenderedPlan {
        let mut rendered = RenderedPlan::default();

        if let QueryPlan::Indexed {
            index,
            key_conditions,
            ..
        } = self
        {
            rendered.index_name = Some(index.name);
            let parts: Vec<String> = key_conditions
                .iter()
                .map(|condition| {
                    let name = format!("#{}", condition.attribute);
                    let value = format!(":{}", condition.attribute);
                    rendered
                        .attribute_names
                        .insert(name.clone(), condition.attribute.to_string());
                    rendered
                        .attribute_values
                        .insert(value.clone(), condition.value.clone());
                    format!("{name} = {value}")
                })
                .collect();
            if !parts.is_empty() {
                rendered.key_condition_expression = Some(parts.join(" AND "));
            }
        }

        if let Some(filter) = self.residual_filter() {
            let mut next_value = 0;
            let parts: Vec<String> = filter
                .clauses
                .iter()
                .map(|clause| render_clause(clause, &mut rendered, &mut next_value))
                .collect();
            if !parts.is_empty() {
                rendered.filter_expression = Some(parts.join(" AND "));
            }
        }

        rendered
    }

    /// Evaluates the plan against a course in memory.
    ///
    /// Same semantics the store applies: key conditions are exact matches,
    /// and a record without the key attribute (e.g. an untagged course for
    /// the tag index) never matches.
    pub fn matches(&self, course: &Course) -> bool {
        let keys_match = match self {
            QueryPlan::Indexed { key_conditions, .. } => key_conditions.iter().all(|condition| {
                attribute_value(course, condition.attribute).as_deref()
                    == Some(condition.value.as_str())
            }),
            QueryPlan::ScanFallback { .. } => true,
        };

        keys_match
            && self
                .residual_filter()
                .is_none_or(|filter| filter.clauses.iter().all(|c| clause_matches(c, course)))
    }
}

fn render_clause(
    clause: &FilterClause,
    rendered: &mut RenderedPlan,
    next_value: &mut usize,
) -> String {
    match clause {
        FilterClause::ContainsAny { attribute, values } => {
            let name = format!("#{attribute}");
            rendered
                .attribute_names
                .insert(name.clone(), attribute.to_string());
            let parts: Vec<String> = values
                .iter()
                .map(|value| {
                    let placeholder = format!(":tagValue{next_value}");
                    *next_value += 1;
                    rendered
                        .attribute_values
                        .insert(placeholder.clone(), value.clone());
                    format!("contains({name}, {placeholder})")
                })
                .collect();
            format!("({})", parts.join(" OR "))
        }
    }
}

fn clause_matches(clause: &FilterClause, course: &Course) -> bool {
    match clause {
        FilterClause::ContainsAny { attribute, values } => match *attribute {
            attributes::TAGS => values.iter().any(|value| course.tags.contains(value)),
            _ => false,
        },
    }
}

/// The stored string value of a key attribute for a course.
pub fn attribute_value(course: &Course, attribute: &str) -> Option<String> {
    match attribute {
        attributes::COURSE_ID => Some(course.id.to_string()),
        attributes::TENANT_ID => Some(course.tenant_id.clone()),
        attributes::STATUS => Some(course.status.as_str().to_string()),
        attributes::LEVEL => Some(course.level.as_str().to_string()),
        attributes::TAG => course.primary_tag().map(str::to_string),
        attributes::MARKETPLACE => Some(course.in_marketplace.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{CourseStatus, Level};
    use crate::query::index::{TAGS_INDEX, TENANT_INDEX};

    fn tags_clause(values: &[&str]) -> FilterClause {
        FilterClause::ContainsAny {
            attribute: attributes::TAGS,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_composite_key_with_tag_filter() {
        let plan = QueryPlan::Indexed {
            index: TENANT_INDEX,
            key_conditions: vec![
                KeyCondition {
                    attribute: attributes::TENANT_ID,
                    value: "t1".to_string(),
                },
                KeyCondition {
                    attribute: attributes::MARKETPLACE,
                    value: "true".to_string(),
                },
            ],
            filter: Some(ResidualFilter::default().and(tags_clause(&["java", "spring"]))),
        };

        let rendered = plan.render();

        assert_eq!(rendered.index_name, Some("TenantIdIndex"));
        assert_eq!(
            rendered.key_condition_expression.as_deref(),
            Some("#tenantId = :tenantId AND #marketplace = :marketplace")
        );
        assert_eq!(
            rendered.filter_expression.as_deref(),
            Some("(contains(#tags, :tagValue0) OR contains(#tags, :tagValue1))")
        );
        assert_eq!(rendered.attribute_names.len(), 3);
        assert_eq!(rendered.attribute_names["#tags"], "tags");
        assert_eq!(rendered.attribute_values[":tenantId"], "t1");
        assert_eq!(rendered.attribute_values[":marketplace"], "true");
        assert_eq!(rendered.attribute_values[":tagValue1"], "spring");
    }

    #[test]
    fn test_render_unfiltered_scan() {
        let rendered = QueryPlan::ScanFallback { filter: None }.render();

        assert_eq!(rendered, RenderedPlan::default());
    }

    #[test]
    fn test_render_and_joins_clauses() {
        let filter = ResidualFilter::default()
            .and(tags_clause(&["a"]))
            .and(tags_clause(&["b"]));
        let rendered = QueryPlan::ScanFallback {
            filter: Some(filter),
        }
        .render();

        assert_eq!(
            rendered.filter_expression.as_deref(),
            Some("(contains(#tags, :tagValue0)) AND (contains(#tags, :tagValue1))")
        );
    }

    #[test]
    fn test_matches_tag_index_skips_untagged() {
        let plan = QueryPlan::Indexed {
            index: TAGS_INDEX,
            key_conditions: vec![KeyCondition {
                attribute: attributes::TAG,
                value: "java".to_string(),
            }],
            filter: None,
        };

        let tagged = Course::new("t1", "Java", Level::Beginner).with_tags(["java", "spring"]);
        let second_tag = Course::new("t1", "Spring", Level::Beginner).with_tags(["spring", "java"]);
        let untagged = Course::new("t1", "Nothing", Level::Beginner);

        assert!(plan.matches(&tagged));
        assert!(!plan.matches(&second_tag));
        assert!(!plan.matches(&untagged));
    }

    #[test]
    fn test_matches_residual_filter() {
        let plan = QueryPlan::ScanFallback {
            filter: Some(ResidualFilter::default().and(tags_clause(&["rust", "go"]))),
        };

        let rust = Course::new("t1", "Rust", Level::Beginner).with_tags(["systems", "rust"]);
        let python = Course::new("t1", "Python", Level::Beginner).with_tags(["python"]);

        assert!(plan.matches(&rust));
        assert!(!plan.matches(&python));
    }

    #[test]
    fn test_attribute_value() {
        let course = Course::new("t1", "Rust", Level::Advanced)
            .with_status(CourseStatus::Published)
            .with_in_marketplace(true);

        assert_eq!(attribute_value(&course, attributes::LEVEL).as_deref(), Some("ADVANCED"));
        assert_eq!(attribute_value(&course, attributes::STATUS).as_deref(), Some("PUBLISHED"));
        assert_eq!(attribute_value(&course, attributes::MARKETPLACE).as_deref(), Some("true"));
        assert_eq!(attribute_value(&course, attributes::TAG), None);
        assert_eq!(attribute_value(&course, "unknown"), None);
    }
}
