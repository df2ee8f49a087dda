use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding courses (default: "Courses")
    pub table_name: String,
    /// SQS queue receiving domain events. Events are only logged when unset.
    pub events_queue_url: Option<String>,
    /// Override for the AWS endpoint, e.g. DynamoDB Local or LocalStack.
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Maximum items per Query/Scan request. Unset lets DynamoDB decide.
    pub page_size: Option<i32>,
}

pub const DEFAULT_TABLE_NAME: &str = "Courses";
pub const DEFAULT_REGION: &str = "us-east-1";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COURSES_TABLE_NAME` - DynamoDB table name (default: "Courses")
    /// - `DOMAIN_EVENTS_QUEUE_URL` - SQS queue URL for domain events
    /// - `AWS_ENDPOINT_URL` - AWS endpoint override
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_PAGE_SIZE` - Query/Scan page size
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            table_name: non_empty("COURSES_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            events_queue_url: non_empty("DOMAIN_EVENTS_QUEUE_URL"),
            endpoint_url: non_empty("AWS_ENDPOINT_URL"),
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            page_size: non_empty("DYNAMODB_PAGE_SIZE").and_then(|v| parse_page_size(&v)),
        }
    }

    /// Load the shared AWS SDK configuration for this service.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));
        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        loader.load().await
    }
}

/// Positive page size, or `None` with a warning when the value is unusable.
fn parse_page_size(value: &str) -> Option<i32> {
    match value.trim().parse::<i32>() {
        Ok(size) if size > 0 => Some(size),
        _ => {
            tracing::warn!(
                value,
                "Ignoring DYNAMODB_PAGE_SIZE, expected a positive integer"
            );
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
