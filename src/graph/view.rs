//! Read-only views handed out by the org chart
//!
//! None of these hold references into the chart, so they can outlive the
//! lock that produced them and be serialized directly.

use super::types::EmployeeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup result for a single employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub id: EmployeeId,
    pub name: String,
    /// Manager names from the nearest manager up to the root
    pub managers: Vec<String>,
    pub direct_reports: usize,
    pub indirect_reports: usize,
}

/// One employee in a chart export
///
/// Exports are flat and in pre-order: every root is followed by its whole
/// subtree, so a tree is rebuilt from `manager` or `reports` without the
/// export itself nesting once per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartNode {
    pub id: EmployeeId,
    /// `None` while the employee is still a placeholder
    pub name: Option<String>,
    pub manager: Option<EmployeeId>,
    /// Distance from the root, which sits at level 0
    pub level: usize,
    pub total_reports: usize,
    /// Direct reports in report-list order
    pub reports: Vec<EmployeeId>,
}

impl ChartNode {
    pub fn is_root(&self) -> bool {
        self.manager.is_none()
    }
}

/// Structural warning about the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Anomaly {
    /// More than one employee sits at the top of a tree
    MultipleRoots { count: usize },
    /// Employee with neither a manager nor reports. `name` is empty for
    /// placeholders.
    Isolated { id: EmployeeId, name: String },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::MultipleRoots { count } => {
                write!(f, "{} employees lack a manager", count)
            }
            Anomaly::Isolated { id, name } if name.is_empty() => {
                write!(
                    f,
                    "unregistered employee (id: {}) has no manager and no direct reports",
                    id
                )
            }
            Anomaly::Isolated { id, name } => {
                write!(f, "{} (id: {}) has no manager and no direct reports", name, id)
            }
        }
    }
}

/// Summary counters for status reporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStatistics {
    pub employees: usize,
    pub placeholders: usize,
    pub roots: usize,
    pub distinct_names: usize,
    /// Number of levels in the deepest tree
    pub max_depth: usize,
}
