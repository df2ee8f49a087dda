//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use skillvo_core::course::{CourseStatus, Level};
use skillvo_core::query::CourseFilter;
use uuid::Uuid;

use crate::config::{Config, DEFAULT_REGION, DEFAULT_TABLE_NAME};

/// Course catalog service.
#[derive(Debug, Parser)]
#[command(name = "course-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// DynamoDB table holding courses.
    #[arg(long, global = true, env = "COURSES_TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// SQS queue URL for domain events. Events are only logged when unset.
    #[arg(long, global = true, env = "DOMAIN_EVENTS_QUEUE_URL")]
    pub queue_url: Option<String>,

    /// AWS endpoint override (DynamoDB Local, LocalStack).
    #[arg(long, global = true, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// AWS region.
    #[arg(long, global = true, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Maximum items per DynamoDB Query/Scan request.
    #[arg(long, global = true, env = "DYNAMODB_PAGE_SIZE")]
    pub page_size: Option<i32>,

    /// Output format.
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Service configuration from flags, which already fall back to the environment.
    pub fn config(&self) -> Config {
        Config {
            table_name: self.table_name.clone(),
            events_queue_url: self.queue_url.clone(),
            endpoint_url: self.endpoint_url.clone(),
            region: self.region.clone(),
            page_size: self.page_size.filter(|size| *size > 0),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// One course per line.
    Table,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Course management.
    Courses(CoursesCommand),
}

/// Course management commands.
#[derive(Debug, Parser)]
pub struct CoursesCommand {
    #[command(subcommand)]
    pub action: CoursesAction,
}

/// Available course actions.
#[derive(Debug, Subcommand)]
pub enum CoursesAction {
    /// List courses matching a filter.
    List(ListArgs),
    /// Show a course.
    Get {
        /// Course ID.
        id: Uuid,
    },
    /// Create a course from a JSON file ("-" reads stdin).
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace the editable fields of a course from a JSON file ("-" reads stdin).
    Update {
        /// Course ID.
        id: Uuid,
        #[arg(long)]
        file: PathBuf,
    },
    /// Publish a course to the marketplace.
    Publish {
        /// Course ID.
        id: Uuid,
    },
    /// Archive a course.
    Archive {
        /// Course ID.
        id: Uuid,
    },
    /// Delete a course. Published courses must be archived first.
    Delete {
        /// Course ID.
        id: Uuid,
    },
}

/// Filter flags for `courses list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by tenant ID.
    #[arg(long)]
    pub tenant_id: Option<String>,
    /// Filter by status (DRAFT, PUBLISHED, ARCHIVED).
    #[arg(long)]
    pub status: Option<CourseStatus>,
    /// Filter by level (BEGINNER, INTERMEDIATE, ADVANCED).
    #[arg(long)]
    pub level: Option<Level>,
    /// Filter by tag. Repeat to match any of several tags.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Marketplace membership. Only applies together with --tenant-id.
    #[arg(long)]
    pub in_marketplace: Option<bool>,
    /// Maximum number of courses to return.
    #[arg(long)]
    pub limit: Option<usize>,
    /// Number of courses to skip.
    #[arg(long)]
    pub offset: Option<usize>,
}

impl From<ListArgs> for CourseFilter {
    fn from(args: ListArgs) -> Self {
        CourseFilter {
            tenant_id: args.tenant_id,
            status: args.status,
            level: args.level,
            tags: args.tags,
            limit: args.limit,
            offset: args.offset,
            in_marketplace: args.in_marketplace,
        }
    }
}
