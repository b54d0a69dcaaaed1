//! Core type definitions for the org chart

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an employee
///
/// Identifiers are supplied by callers, so they are sparse and never
/// reassigned by the chart. Zero is not a valid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EmployeeId(pub u64);

impl EmployeeId {
    pub fn new(id: u64) -> Self {
        EmployeeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Reject identifiers the chart will never store
    pub fn validate(self) -> GraphResult<Self> {
        if self.0 == 0 {
            return Err(GraphError::InvalidInput(
                "employee id must be a positive integer".to_string(),
            ));
        }
        Ok(self)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        EmployeeId(id)
    }
}

impl TryFrom<i64> for EmployeeId {
    type Error = GraphError;

    fn try_from(raw: i64) -> GraphResult<Self> {
        if raw <= 0 {
            return Err(GraphError::InvalidInput(format!(
                "employee id must be a positive integer, got {}",
                raw
            )));
        }
        Ok(EmployeeId(raw as u64))
    }
}

/// Whether a node has been registered with a real name yet
///
/// Placeholders are created when an employee references a manager id that
/// has not been inserted. They render as the empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    Placeholder,
    Registered(String),
}

impl Identity {
    pub fn name(&self) -> &str {
        match self {
            Identity::Placeholder => "",
            Identity::Registered(name) => name,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Identity::Placeholder)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Requested change to an employee's manager during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagerUpdate {
    /// Leave the current manager in place
    #[default]
    Unchanged,
    /// Move under the given manager, or detach with `None`
    Set(Option<EmployeeId>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id() {
        let id = EmployeeId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "42");

        let id2: EmployeeId = 100.into();
        assert_eq!(id2.as_u64(), 100);
    }

    #[test]
    fn test_employee_id_from_raw() {
        assert_eq!(EmployeeId::try_from(7i64), Ok(EmployeeId::new(7)));
        assert!(matches!(
            EmployeeId::try_from(0i64),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(matches!(
            EmployeeId::try_from(-3i64),
            Err(GraphError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(EmployeeId::new(0).validate().is_err());
        assert_eq!(EmployeeId::new(1).validate(), Ok(EmployeeId::new(1)));
    }

    #[test]
    fn test_identity_name() {
        assert_eq!(Identity::Placeholder.name(), "");
        assert!(Identity::Placeholder.is_placeholder());

        let registered = Identity::Registered("adam".to_string());
        assert_eq!(registered.name(), "adam");
        assert!(!registered.is_placeholder());
        assert_eq!(format!("{}", registered), "adam");
    }

    #[test]
    fn test_id_ordering() {
        assert!(EmployeeId::new(1) < EmployeeId::new(2));
    }

    #[test]
    fn test_manager_update_default() {
        assert_eq!(ManagerUpdate::default(), ManagerUpdate::Unchanged);
    }
}
