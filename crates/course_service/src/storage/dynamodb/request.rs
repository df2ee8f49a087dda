//! Query and Scan request inputs (Functional Core).
//!
//! Everything the repository passes to the SDK builders is computed here from
//! a [`QueryPlan`], so the translation can be tested without a table.

use std::collections::HashMap;
use std::future::Future;

use aws_sdk_dynamodb::types::AttributeValue;
use skillvo_core::query::QueryPlan;
use skillvo_core::storage::Result;

use super::conversions::Item;

/// Which DynamoDB operation serves a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOperation {
    Query {
        index_name: &'static str,
        key_condition_expression: String,
    },
    Scan,
}

/// Builder inputs shared by every page of a Query or Scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub operation: ListOperation,
    pub filter_expression: Option<String>,
    pub attribute_names: Option<HashMap<String, String>>,
    pub attribute_values: Option<HashMap<String, AttributeValue>>,
}

impl ListRequest {
    /// Renders the plan. Every placeholder value is a string attribute.
    pub fn from_plan(plan: &QueryPlan) -> Self {
        let rendered = plan.render();

        let operation = match (
            plan.is_scan(),
            rendered.index_name,
            rendered.key_condition_expression,
        ) {
            (false, Some(index_name), Some(key_condition_expression)) => ListOperation::Query {
                index_name,
                key_condition_expression,
            },
            _ => ListOperation::Scan,
        };

        let attribute_names = (!rendered.attribute_names.is_empty())
            .then(|| rendered.attribute_names.into_iter().collect());
        let attribute_values = (!rendered.attribute_values.is_empty()).then(|| {
            rendered
                .attribute_values
                .into_iter()
                .map(|(placeholder, value)| (placeholder, AttributeValue::S(value)))
                .collect()
        });

        Self {
            operation,
            filter_expression: rendered.filter_expression,
            attribute_names,
            attribute_values,
        }
    }
}

/// Fetches pages until DynamoDB stops returning a `LastEvaluatedKey`.
///
/// `fetch` receives the exclusive start key (none for the first page) and
/// returns the page's items with its last evaluated key. An empty key map
/// also ends the loop. The first failing page fails the whole call.
pub async fn collect_pages<F, Fut>(mut fetch: F) -> Result<Vec<Item>>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<(Vec<Item>, Option<Item>)>>,
{
    let mut items = Vec::new();
    let mut start_key = None;

    loop {
        let (page, last_key) = fetch(start_key.take()).await?;
        items.extend(page);
        match last_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok(items)
}
