//! course-service CLI entry point.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_service::cli::{Cli, Commands, CoursesAction};
use course_service::events::publisher_from_config;
use course_service::output::{format_course, format_courses};
use course_service::storage::DynamoDbCourseRepository;
use course_service::CourseService;
use skillvo_core::query::CourseFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    tracing::debug!(?config, "Loaded configuration");

    let repository = DynamoDbCourseRepository::from_config(&config).await;
    let publisher = publisher_from_config(&config).await;
    let service = CourseService::new(Arc::new(repository), publisher);

    match cli.command {
        Commands::Courses(courses) => match courses.action {
            CoursesAction::List(args) => {
                let filter = CourseFilter::from(args);
                let courses = service.list(&filter).await?;
                println!("{}", format_courses(&courses, cli.format));
            }
            CoursesAction::Get { id } => {
                let course = service.get(id).await?;
                println!("{}", format_course(&course, cli.format));
            }
            CoursesAction::Create { file } => {
                let request = read_json(&file)?;
                let course = service.create(request).await?;
                println!("{}", format_course(&course, cli.format));
            }
            CoursesAction::Update { id, file } => {
                let request = read_json(&file)?;
                let course = service.update(id, request).await?;
                println!("{}", format_course(&course, cli.format));
            }
            CoursesAction::Publish { id } => {
                let course = service.publish(id).await?;
                println!("{}", format_course(&course, cli.format));
            }
            CoursesAction::Archive { id } => {
                let course = service.archive(id).await?;
                println!("{}", format_course(&course, cli.format));
            }
            CoursesAction::Delete { id } => {
                service.delete(id).await?;
                tracing::info!(course_id = %id, "Deleted");
            }
        },
    }

    Ok(())
}

/// Reads a JSON request body from a file, or from stdin when the path is "-".
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read request from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| format!("Invalid request in {}", path.display()))
}
