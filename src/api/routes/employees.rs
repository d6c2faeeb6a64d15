//! Employee routes: list, details, create, delete and update.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{Employee, EmployeeModel, EmployeeResponse, EmployeeShortResponse};
use crate::storage::Repository;

type EmployeeRepository = Arc<dyn Repository<Employee>>;

/// Create the employees router
pub fn employees_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_employees).post(create_employee))
        .route("/{id}", get(get_employee_by_id))
        .route("/deleteEmp/{id}", delete(delete_employee))
        .route("/update/{id}", post(update_employee))
}

/// GET /employees - Get all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees, in repository order", body = [EmployeeShortResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_employees(
    State(employees): State<EmployeeRepository>,
) -> Result<Json<Vec<EmployeeShortResponse>>, ApiError> {
    let employees = employees.get_all().await?;

    Ok(Json(employees.iter().map(EmployeeShortResponse::from).collect()))
}

/// GET /employees/{id} - Get employee details
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee details", body = EmployeeResponse),
        (status = 400, description = "Malformed employee id"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee_by_id(
    State(employees): State<EmployeeRepository>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = employees.get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(EmployeeResponse::from(&employee)))
}

/// POST /employees - Create a new employee
///
/// The server assigns the employee id and fresh role ids; ids in the payload are ignored.
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = EmployeeModel,
    responses(
        (status = 200, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Unreadable payload"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_employee(
    State(employees): State<EmployeeRepository>,
    payload: Result<Json<EmployeeModel>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let Json(model) = payload?;
    let employee = employees.create(model.into_new_employee()).await?;
    info!(
        "[POST /employees] Created employee {} with {} roles",
        employee.id,
        employee.roles.len()
    );

    Ok(Json(EmployeeResponse::from(&employee)))
}

/// DELETE /employees/deleteEmp/{id} - Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/deleteEmp/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 400, description = "Unknown or malformed employee id")
    )
)]
pub async fn delete_employee(
    State(employees): State<EmployeeRepository>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let Some(employee) = employees.get_by_id(id).await? else {
        warn!("[DELETE /employees/deleteEmp] Unknown employee {}", id);
        return Err(ApiError::BadRequest);
    };

    employees.delete(&employee).await?;
    info!("[DELETE /employees/deleteEmp] Deleted employee {}", id);

    Ok(StatusCode::OK)
}

/// POST /employees/update/{id} - Update an employee
///
/// Replaces email, names and roles. Responds with the stored entity, role ids included.
#[utoipa::path(
    post,
    path = "/employees/update/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee id")
    ),
    request_body = EmployeeModel,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Unknown or malformed employee id, or unreadable payload")
    )
)]
pub async fn update_employee(
    State(employees): State<EmployeeRepository>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EmployeeModel>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Json(model) = payload?;
    let Some(mut employee) = employees.get_by_id(id).await? else {
        warn!("[POST /employees/update] Unknown employee {}", id);
        return Err(ApiError::BadRequest);
    };

    model.apply_to(&mut employee);
    let employee = employees.update(employee).await?;
    info!("[POST /employees/update] Updated employee {}", id);

    Ok(Json(employee))
}
