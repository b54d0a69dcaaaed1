//! Org Chart
//!
//! An in-memory organizational hierarchy: a forest of employees linked by
//! manager relationships, searchable by id or name, with live direct and
//! indirect report counts.
//!
//! # Guarantees
//!
//! - Employee ids are unique; re-inserting an id fails unless it belongs to a
//!   placeholder created for a not-yet-registered manager
//! - The manager relation never forms a cycle; a rejected change leaves the
//!   chart exactly as it was
//! - Report counters, the name index and the set of rootless employees are
//!   consistent after every operation
//! - Deleting an employee promotes its direct reports one level up
//!
//! ## Example Usage
//!
//! ```rust
//! use orgchart::graph::{EmployeeId, ManagerUpdate, OrgChart};
//!
//! let mut chart = OrgChart::new();
//!
//! // Reports may arrive before their manager
//! chart.insert(EmployeeId::new(1), "adam", Some(EmployeeId::new(99))).unwrap();
//! chart.insert(EmployeeId::new(99), "lancelot", None).unwrap();
//!
//! let found = chart.find_by_name("adam");
//! assert_eq!(found[0].managers, vec!["lancelot".to_string()]);
//!
//! // Moving lancelot under adam would form a circle
//! let result = chart.update(
//!     EmployeeId::new(99),
//!     None,
//!     ManagerUpdate::Set(Some(EmployeeId::new(1))),
//! );
//! assert!(result.is_err());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod http;
pub mod index;

// Re-export main types for convenience
pub use graph::{
    Anomaly, ChartNode, ChartStatistics, Employee, EmployeeDetail, EmployeeId, EmployeeRecord,
    GraphError, GraphResult, Identity, ManagerUpdate, OrgChart,
};

pub use http::{ApiError, HttpServer, ServerConfig, SharedChart};

pub use index::NameIndex;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
