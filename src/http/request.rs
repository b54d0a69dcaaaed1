//! Validation of incoming request bodies
//!
//! Bodies arrive as loose JSON. Each parser checks the fields it needs and
//! produces the typed input the chart expects, or a 400-class `ApiError`.

use super::error::ApiError;
use crate::graph::{EmployeeId, EmployeeRecord, ManagerUpdate};
use serde_json::Value;

const ID_REQUIRED: &str = "Employee ID is required (id)";
const NAME_REQUIRED: &str = "Employee name is required (name)";
const MANAGER_INVALID: &str = "Manager ID must be an integer or null (managerId)";

/// Parsed body of an update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub id: EmployeeId,
    pub name: Option<String>,
    pub manager: ManagerUpdate,
}

/// Accept a single record or an array of records
///
/// Every record is validated before any is returned.
pub fn parse_new_employees(body: &Value) -> Result<Vec<EmployeeRecord>, ApiError> {
    match body {
        Value::Array(items) => items.iter().map(parse_new_employee).collect(),
        single => Ok(vec![parse_new_employee(single)?]),
    }
}

pub fn parse_new_employee(value: &Value) -> Result<EmployeeRecord, ApiError> {
    let id = required_id(value)?;
    let name = match value.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => return Err(ApiError::Validation(NAME_REQUIRED.to_string())),
    };
    let manager_id = manager_field(value)?.flatten();
    Ok(EmployeeRecord::new(id, name, manager_id))
}

/// `managerId` absent keeps the manager, `null` detaches, a number reassigns
pub fn parse_update(value: &Value) -> Result<UpdateRequest, ApiError> {
    let id = EmployeeId::try_from(required_id(value)?)?;
    let name = match value.get("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) if name.trim().is_empty() => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => return Err(ApiError::Validation(NAME_REQUIRED.to_string())),
    };
    let manager = match manager_field(value)? {
        None => ManagerUpdate::Unchanged,
        Some(None) => ManagerUpdate::Set(None),
        Some(Some(raw)) => ManagerUpdate::Set(Some(EmployeeId::try_from(raw)?)),
    };
    Ok(UpdateRequest { id, name, manager })
}

pub fn parse_delete(value: &Value) -> Result<EmployeeId, ApiError> {
    Ok(EmployeeId::try_from(required_id(value)?)?)
}

fn required_id(value: &Value) -> Result<i64, ApiError> {
    value
        .get("id")
        .and_then(Value::as_i64)
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation(ID_REQUIRED.to_string()))
}

/// Outer `None`: field absent. Inner `None`: explicit null.
fn manager_field(value: &Value) -> Result<Option<Option<i64>>, ApiError> {
    match value.get("managerId") {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::Number(number)) => number
            .as_i64()
            .map(|raw| Some(Some(raw)))
            .ok_or_else(|| ApiError::Validation(MANAGER_INVALID.to_string())),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map(|raw| Some(Some(raw)))
            .map_err(|_| ApiError::Validation(MANAGER_INVALID.to_string())),
        Some(_) => Err(ApiError::Validation(MANAGER_INVALID.to_string())),
    }
}
