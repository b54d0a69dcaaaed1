//! Org chart engine
//!
//! Employees form a forest linked by manager relationships. The chart keeps
//! an identifier index, a name index and the set of rootless employees in
//! step with every change, maintains per-employee report counters, and
//! rejects any change that would make an employee its own ancestor.

pub mod node;
pub mod record;
pub mod store;
pub mod types;
pub mod view;

// Re-export main types
pub use node::Employee;
pub use record::EmployeeRecord;
pub use store::{GraphError, GraphResult, OrgChart};
pub use types::{EmployeeId, Identity, ManagerUpdate};
pub use view::{Anomaly, ChartNode, ChartStatistics, EmployeeDetail};
