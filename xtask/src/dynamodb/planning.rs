//! Pure functions for calculating deployment plans (Functional Core).

use super::config::{GsiConfig, TableConfig};

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    pub gsis: Vec<GsiState>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// GSI state as reported by DescribeTable.
#[derive(Debug, Clone)]
pub struct GsiState {
    pub name: String,
    /// Key attribute names, partition key first.
    pub key_attributes: Vec<String>,
    pub status: GsiStatus,
}

/// GSI status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GsiStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

impl TableState {
    pub fn is_ready(&self) -> bool {
        self.status == TableStatus::Active
            && self.gsis.iter().all(|g| g.status == GsiStatus::Active)
    }
}

/// An existing index whose key schema differs from what the planner expects.
///
/// DynamoDB cannot change the keys of an index in place, so these are reported
/// and left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiMismatch {
    pub name: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists, GSIs need to be added.
    AddGsis {
        table_name: String,
        gsis_to_add: Vec<GsiConfig>,
        mismatched: Vec<GsiMismatch>,
    },
    /// Table has every index.
    NoChanges {
        table_name: String,
        mismatched: Vec<GsiMismatch>,
    },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    DeleteTable { table_name: String },
    AlreadyGone { table_name: String },
}

/// Calculate what changes are needed to reach the desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let mut gsis_to_add = Vec::new();
    let mut mismatched = Vec::new();

    for gsi in &desired.gsis {
        let expected: Vec<String> = gsi.key_attributes().map(|k| k.name.clone()).collect();
        match state.gsis.iter().find(|existing| existing.name == gsi.name) {
            None => gsis_to_add.push(gsi.clone()),
            Some(existing) if existing.key_attributes != expected => {
                mismatched.push(GsiMismatch {
                    name: gsi.name.clone(),
                    expected,
                    actual: existing.key_attributes.clone(),
                })
            }
            Some(_) => {}
        }
    }

    let table_name = desired.table_name.clone();
    if gsis_to_add.is_empty() {
        DeployPlan::NoChanges {
            table_name,
            mismatched,
        }
    } else {
        DeployPlan::AddGsis {
            table_name,
            gsis_to_add,
            mismatched,
        }
    }
}

/// Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    let table_name = table_name.to_string();
    match current {
        Some(_) => DestroyPlan::DeleteTable { table_name },
        None => DestroyPlan::AlreadyGone { table_name },
    }
}

fn format_gsi(lines: &mut Vec<String>, prefix: &str, gsi: &GsiConfig) {
    lines.push(format!("{prefix}: {}", gsi.name));
    lines.push(format!("    Partition key: {} (S)", gsi.partition_key.name));
    if let Some(sk) = &gsi.sort_key {
        lines.push(format!("    Sort key: {} (S)", sk.name));
    }
}

fn format_mismatches(lines: &mut Vec<String>, mismatched: &[GsiMismatch]) {
    for mismatch in mismatched {
        lines.push(format!(
            "  ! GSI {} has keys [{}], expected [{}] (recreate manually)",
            mismatch.name,
            mismatch.actual.join(", "),
            mismatch.expected.join(", ")
        ));
    }
}

/// Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    let mut lines = Vec::new();
    match plan {
        DeployPlan::CreateTable { config } => {
            lines.push(format!("+ Create table: {}", config.table_name));
            lines.push(format!("  Partition key: {} (S)", config.partition_key.name));
            for gsi in &config.gsis {
                format_gsi(&mut lines, "  + GSI", gsi);
            }
            lines.push("  Billing: PAY_PER_REQUEST".to_string());
        }
        DeployPlan::AddGsis {
            table_name,
            gsis_to_add,
            mismatched,
        } => {
            lines.push(format!("~ Update table: {}", table_name));
            for gsi in gsis_to_add {
                format_gsi(&mut lines, "  + Add GSI", gsi);
            }
            format_mismatches(&mut lines, mismatched);
        }
        DeployPlan::NoChanges {
            table_name,
            mismatched,
        } => {
            lines.push(format!("= Table '{}' is up to date", table_name));
            format_mismatches(&mut lines, mismatched);
        }
    }
    lines
}

/// Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::courses_table_config;

    fn gsi_state(name: &str, keys: &[&str]) -> GsiState {
        GsiState {
            name: name.to_string(),
            key_attributes: keys.iter().map(|k| k.to_string()).collect(),
            status: GsiStatus::Active,
        }
    }

    fn state(gsis: Vec<GsiState>) -> TableState {
        TableState {
            status: TableStatus::Active,
            gsis,
        }
    }

    fn complete_state() -> TableState {
        state(vec![
            gsi_state("TenantIdIndex", &["tenantId", "marketplace"]),
            gsi_state("StatusIndex", &["status"]),
            gsi_state("LevelIndex", &["level"]),
            gsi_state("TagsIndex", &["tag"]),
        ])
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = courses_table_config();
        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_missing_gsis_are_added() {
        let current = state(vec![gsi_state("TenantIdIndex", &["tenantId", "marketplace"])]);
        let plan = calculate_deploy_plan(Some(&current), &courses_table_config());

        match plan {
            DeployPlan::AddGsis {
                gsis_to_add,
                mismatched,
                ..
            } => {
                let names: Vec<&str> = gsis_to_add.iter().map(|g| g.name.as_str()).collect();
                assert_eq!(names, vec!["StatusIndex", "LevelIndex", "TagsIndex"]);
                assert!(mismatched.is_empty());
            }
            other => panic!("expected AddGsis, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_table_has_no_changes() {
        let plan = calculate_deploy_plan(Some(&complete_state()), &courses_table_config());

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "Courses".to_string(),
                mismatched: vec![],
            }
        );
    }

    #[test]
    fn test_tenant_index_without_sort_key_is_reported() {
        let mut current = complete_state();
        current.gsis[0] = gsi_state("TenantIdIndex", &["tenantId"]);

        let plan = calculate_deploy_plan(Some(&current), &courses_table_config());
        let lines = format_deploy_plan(&plan);

        assert!(matches!(plan, DeployPlan::NoChanges { ref mismatched, .. } if mismatched.len() == 1));
        assert!(lines.iter().any(|l| l.contains(
            "! GSI TenantIdIndex has keys [tenantId], expected [tenantId, marketplace]"
        )));
    }

    #[test]
    fn test_format_create_plan_lists_indexes() {
        let lines = format_deploy_plan(&calculate_deploy_plan(None, &courses_table_config()));

        assert_eq!(lines[0], "+ Create table: Courses");
        assert!(lines.contains(&"  + GSI: TagsIndex".to_string()));
        assert!(lines.contains(&"    Sort key: marketplace (S)".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("  Billing: PAY_PER_REQUEST"));
    }

    #[test]
    fn test_destroy_plan() {
        assert_eq!(
            calculate_destroy_plan(None, "Courses"),
            DestroyPlan::AlreadyGone {
                table_name: "Courses".to_string()
            }
        );
        let plan = calculate_destroy_plan(Some(&complete_state()), "Courses");
        assert_eq!(
            format_destroy_plan(&plan),
            vec!["- Delete table: Courses (ALL DATA WILL BE LOST)".to_string()]
        );
    }

    #[test]
    fn test_table_readiness() {
        let mut current = complete_state();
        assert!(current.is_ready());

        current.gsis[2].status = GsiStatus::Creating;
        assert!(!current.is_ready());
    }
}
