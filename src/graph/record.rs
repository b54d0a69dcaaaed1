//! Raw employee records as supplied by callers
//!
//! Identifiers are kept as signed integers here so that malformed input
//! (zero, negative ids) reaches the chart and is rejected there.

use serde::{Deserialize, Serialize};

/// One employee record: `{ "id": 1, "name": "adam", "managerId": 99 }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub manager_id: Option<i64>,
}

impl EmployeeRecord {
    pub fn new(id: i64, name: impl Into<String>, manager_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            manager_id,
        }
    }
}
