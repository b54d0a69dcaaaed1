//! HTTP handlers for the org chart API
//!
//! Every successful response is wrapped in the same envelope:
//! `{ "success": true, "data": ..., "warning": [...] }`, where `warning`
//! carries the chart's current anomalies.

use super::error::ApiError;
use super::request::{parse_delete, parse_new_employees, parse_update};
use crate::graph::{ChartNode, EmployeeDetail, EmployeeId, EmployeeRecord, GraphError, OrgChart};
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Chart shared between request handlers
pub type SharedChart = Arc<RwLock<OrgChart>>;

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    success: bool,
    data: T,
    warning: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn new(data: T, chart: &OrgChart) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            warning: chart.warnings(),
        })
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Handler for adding one employee or an array of employees
pub async fn add_handler(
    State(chart): State<SharedChart>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Vec<EmployeeRecord>> {
    let Json(body) = payload?;
    let records = parse_new_employees(&body)?;

    let mut chart = chart.write().await;
    let inserted = chart.insert_many(&records)?;
    info!(inserted, "Added employees");
    Ok(ApiResponse::new(records, &chart))
}

/// Handler for lookups by id or name
pub async fn find_handler(
    State(chart): State<SharedChart>,
    Path(query): Path<String>,
) -> ApiResult<Vec<EmployeeDetail>> {
    if query.trim().is_empty() {
        return Err(ApiError::Validation(
            "The name of the employee to be searched is required (name)".to_string(),
        ));
    }

    let chart = chart.read().await;
    let found = chart.lookup(&query);
    if found.is_empty() {
        return Err(ApiError::NotFound(format!(
            "Cannot find employee with name '{}'",
            query
        )));
    }
    Ok(ApiResponse::new(found, &chart))
}

/// Handler for renaming and reparenting
pub async fn update_handler(
    State(chart): State<SharedChart>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<EmployeeDetail> {
    let Json(body) = payload?;
    let request = parse_update(&body)?;

    let mut chart = chart.write().await;
    chart.update(request.id, request.name.as_deref(), request.manager)?;
    let detail = chart
        .find_by_id(request.id)
        .ok_or(GraphError::UnknownIdentifier(request.id))?;
    Ok(ApiResponse::new(detail, &chart))
}

/// Handler for deleting an employee
pub async fn delete_handler(
    State(chart): State<SharedChart>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<EmployeeId> {
    let Json(body) = payload?;
    let id = parse_delete(&body)?;

    let mut chart = chart.write().await;
    let removed = chart.delete(id)?;
    info!(employee = %removed.id, "Deleted employee");
    Ok(ApiResponse::new(removed.id, &chart))
}

/// Handler for exporting the full chart
pub async fn export_handler(State(chart): State<SharedChart>) -> ApiResult<Vec<ChartNode>> {
    let chart = chart.read().await;
    Ok(ApiResponse::new(chart.export(), &chart))
}

/// Handler for discarding the whole chart
pub async fn reset_handler(State(chart): State<SharedChart>) -> ApiResult<()> {
    let mut chart = chart.write().await;
    chart.clear();
    info!("Chart reset");
    Ok(ApiResponse::new((), &chart))
}

/// Handler for system status
pub async fn status_handler(State(chart): State<SharedChart>) -> impl IntoResponse {
    let chart = chart.read().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "chart": chart.statistics(),
    }))
}
