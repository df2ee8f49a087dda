//! DynamoDB repository implementation.
//!
//! Implements `CourseRepository` from `skillvo_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use skillvo_core::course::Course;
use skillvo_core::query::{attributes, plan, post_process, CourseFilter};
use skillvo_core::storage::{CourseRepository, Result};

use super::conversions::{course_to_item, item_to_course, Item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_scan_error, PutCondition,
};
use super::request::{collect_pages, ListOperation, ListRequest};
use crate::config::Config;

/// DynamoDB-based course repository.
pub struct DynamoDbCourseRepository {
    client: Client,
    table_name: String,
    page_size: Option<i32>,
}

impl DynamoDbCourseRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_size: None,
        }
    }

    /// Caps the number of items DynamoDB evaluates per request.
    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Creates a repository from service configuration.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = config.aws_config().await;
        Self::new(Client::new(&sdk_config), &config.table_name).with_page_size(config.page_size)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn put(&self, course: &Course, condition: PutCondition) -> Result<()> {
        let expression = match condition {
            PutCondition::Create => "attribute_not_exists(#courseId)",
            PutCondition::Replace => "attribute_exists(#courseId)",
        };

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(course_to_item(course)))
            .condition_expression(expression)
            .expression_attribute_names("#courseId", attributes::COURSE_ID)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, condition, course.id.to_string()))?;

        Ok(())
    }

    /// Runs the request as a Query or Scan, following `LastEvaluatedKey`.
    async fn fetch_all(&self, request: &ListRequest) -> Result<Vec<Item>> {
        match &request.operation {
            ListOperation::Query {
                index_name,
                key_condition_expression,
            } => {
                collect_pages(|start_key| async move {
                    let output = self
                        .client
                        .query()
                        .table_name(&self.table_name)
                        .index_name(*index_name)
                        .key_condition_expression(key_condition_expression)
                        .set_filter_expression(request.filter_expression.clone())
                        .set_expression_attribute_names(request.attribute_names.clone())
                        .set_expression_attribute_values(request.attribute_values.clone())
                        .set_limit(self.page_size)
                        .set_exclusive_start_key(start_key)
                        .send()
                        .await
                        .map_err(map_query_error)?;
                    Ok((output.items.unwrap_or_default(), output.last_evaluated_key))
                })
                .await
            }
            ListOperation::Scan => {
                collect_pages(|start_key| async move {
                    let output = self
                        .client
                        .scan()
                        .table_name(&self.table_name)
                        .set_filter_expression(request.filter_expression.clone())
                        .set_expression_attribute_names(request.attribute_names.clone())
                        .set_expression_attribute_values(request.attribute_values.clone())
                        .set_limit(self.page_size)
                        .set_exclusive_start_key(start_key)
                        .send()
                        .await
                        .map_err(map_scan_error)?;
                    Ok((output.items.unwrap_or_default(), output.last_evaluated_key))
                })
                .await
            }
        }
    }
}

#[async_trait]
impl CourseRepository for DynamoDbCourseRepository {
    async fn get_course(&self, id: Uuid) -> Result<Option<Course>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(attributes::COURSE_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_course(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_course(&self, course: &Course) -> Result<()> {
        self.put(course, PutCondition::Create).await
    }

    async fn update_course(&self, course: &Course) -> Result<()> {
        self.put(course, PutCondition::Replace).await
    }

    async fn delete_course(&self, id: Uuid) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(attributes::COURSE_ID, AttributeValue::S(id.to_string()))
            .condition_expression("attribute_exists(#courseId)")
            .expression_attribute_names("#courseId", attributes::COURSE_ID)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id.to_string()))?;

        Ok(())
    }

    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        let request = ListRequest::from_plan(&plan(filter));

        match &request.operation {
            ListOperation::Query {
                index_name,
                key_condition_expression,
            } => tracing::debug!(
                table = %self.table_name,
                index = %index_name,
                key_condition = %key_condition_expression,
                filter = ?request.filter_expression,
                "Querying courses by index"
            ),
            ListOperation::Scan => tracing::debug!(
                table = %self.table_name,
                filter = ?request.filter_expression,
                "No index applies, scanning courses"
            ),
        }

        let items = self.fetch_all(&request).await?;
        tracing::debug!(count = items.len(), "Retrieved course records");
        post_process(items, filter, |item| item_to_course(&item))
    }
}
