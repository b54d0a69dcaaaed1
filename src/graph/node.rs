//! Employee node stored in the org chart arena
//!
//! Links between nodes are identifiers, never references: `manager` points up
//! one level and `direct_reports` lists the nodes pointing back down.

use super::types::{EmployeeId, Identity};
use serde::{Deserialize, Serialize};

/// A node in the org chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for this employee
    pub id: EmployeeId,

    /// Registered name, or placeholder while the record is still missing
    pub identity: Identity,

    /// Manager one level up, `None` for a root
    pub manager: Option<EmployeeId>,

    /// Employees whose manager is this node, in attach order
    pub direct_reports: Vec<EmployeeId>,

    /// Count of all direct and transitive reports
    pub total_reports: usize,
}

impl Employee {
    /// Create a registered employee with no links
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Employee {
            id,
            identity: Identity::Registered(name.into()),
            manager: None,
            direct_reports: Vec::new(),
            total_reports: 0,
        }
    }

    /// Create a stand-in for a manager that has not been inserted yet
    pub fn placeholder(id: EmployeeId) -> Self {
        Employee {
            id,
            identity: Identity::Placeholder,
            manager: None,
            direct_reports: Vec::new(),
            total_reports: 0,
        }
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn is_placeholder(&self) -> bool {
        self.identity.is_placeholder()
    }

    pub fn is_root(&self) -> bool {
        self.manager.is_none()
    }

    pub fn direct_report_count(&self) -> usize {
        self.direct_reports.len()
    }

    /// Transitive reports that are not direct reports
    pub fn indirect_report_count(&self) -> usize {
        self.total_reports.saturating_sub(self.direct_reports.len())
    }

    /// Position of `report` in this node's report list
    pub(crate) fn report_position(&self, report: EmployeeId) -> Option<usize> {
        self.direct_reports.iter().position(|id| *id == report)
    }
}
