//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use course_service::config::DEFAULT_TABLE_NAME;
use course_service::storage::DynamoDbCourseRepository;
use course_service::Config;
use dialoguer::Confirm;

use crate::prelude::*;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the Courses table.
    Deploy(DeployCommand),

    /// Seed a tenant with generated courses.
    Seed(SeedCommand),
}

/// Deploy or update DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the Courses DynamoDB table.

By default, this command creates or updates the Courses table with the
`courseId` partition key and the Global Secondary Indexes the course query
planner relies on: TenantIdIndex (tenantId + marketplace), StatusIndex,
LevelIndex and TagsIndex.

The command shows a plan of changes before applying and asks for confirmation.
Existing indexes with a different key schema are reported but never modified.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating/updating.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,
}

/// Seed a tenant with generated courses.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo courses into DynamoDB.

Courses cycle through a small catalogue of titles, levels and tags, with
one course left untagged and every third course paid. Inserts are
conditional, so seeding never overwrites existing courses.")]
pub struct SeedCommand {
    /// Tenant that owns the generated courses.
    #[arg(long)]
    pub tenant_id: String,

    /// Number of courses to generate.
    #[arg(long, default_value = "12")]
    pub count: u32,

    /// Publish the courses (and list them in the marketplace) before inserting.
    #[arg(long)]
    pub publish: bool,

    /// Table name to use.
    #[arg(long, default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| DynamodbError::Prompt(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = Config::from_env();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), client::target_display(&aws_config));
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
        return Ok(());
    }

    let table_config = config::courses_table_config().with_table_name(&cmd.table_name);
    let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in planning::format_deploy_plan(&plan) {
            aprintln!("  {}", paint_plan_line(&line));
        }
        aprintln!();
    }

    if matches!(plan, planning::DeployPlan::NoChanges { .. }) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure is up to date."));
        }
        return Ok(());
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let aws_config = Config::from_env();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), client::target_display(&aws_config));
        aprintln!("{} {}", p_b("Table:"), cmd.table_name);
        aprintln!("{} {}", p_b("Tenant:"), cmd.tenant_id);
        aprintln!("{} {}", p_b("Course count:"), cmd.count);
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;

    if client::get_table_state(&dynamo_client, &cmd.table_name)
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let courses =
        seed::prepare_seed_courses(&cmd.tenant_id, cmd.count, cmd.publish, chrono::Utc::now())?;

    if !global.is_silent() {
        aprintln!("{}", p_c("Courses to create:"));
        for course in courses.iter().take(5) {
            aprintln!("  {}", seed::format_course_line(course));
        }
        if courses.len() > 5 {
            aprintln!("  ... and {} more", courses.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        confirm(&format!("Insert {} courses?", courses.len()), true)?;
    }

    let repository = DynamoDbCourseRepository::new(dynamo_client, &cmd.table_name);
    let inserted = seed::seed_courses(&repository, &courses).await?;

    if !global.is_silent() {
        aprintln!("{} {} courses inserted.", p_g("Success:"), inserted);
    }

    Ok(())
}
