//! HTTP request handlers for the HR API.
//!
//! One handler per endpoint; each validates its input, calls into the
//! service/store layer, and translates failures through
//! [`ApiErrorResponse`]. Every request gets a correlation id for tracing.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth;
use crate::error::HrError;
use crate::models::{Employee, LeaveApplication};

use super::request::{
    ApplyLeaveRequest, DeleteEmployeeRequest, LoginRequest, MeDetailsQuery, MyLeavesQuery,
    NewEmployeeRequest, RegisterRequest, UpdateEmployeeRequest, parse_leave_date,
};
use super::response::{ApiError, ApiErrorResponse, StatusResponse};
use super::state::AppState;

/// How long a single request may run before the server gives up on it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees))
        .route("/api/employees/new", post(create_employee))
        .route("/api/employees/update", post(update_employee))
        .route("/api/employees/delete", post(delete_employee))
        .route("/api/me/details", get(me_details))
        .route("/api/leaves/apply", post(apply_leave))
        .route("/api/leaves/my-leaves", get(my_leaves))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .with_state(state)
}

/// Unwraps a JSON body, mapping extraction failures to a 400 response.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Body text carries the detailed serde error.
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Handler for `GET /api/employees`: all employee records, natural order.
async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    let employees = state.db().employees.list().await;
    Json(employees)
}

/// Handler for `POST /api/employees/new`.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let employee = Employee::new(
        request.employee_name,
        request.employee_id,
        request.department,
        request.position,
        request.base_pay,
    );
    let employee_id = employee.employee_id.clone();

    match state.db().employees.insert(employee).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, employee_id = %employee_id, "employee added");
            Json(StatusResponse::new("Employee Added Successfully")).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "employee add failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /api/employees/update`: partial merge of the supplied
/// fields only.
async fn update_employee(
    State(state): State<AppState>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.db().employees.update(request.id, request.patch).await {
        Ok(_) => {
            info!(correlation_id = %correlation_id, id = %request.id, "employee updated");
            Json(StatusResponse::new("Employee Updated Successfully")).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "employee update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /api/employees/delete`.
///
/// Lenient by contract: deleting an id that no longer exists still returns
/// the success envelope.
async fn delete_employee(
    State(state): State<AppState>,
    payload: Result<Json<DeleteEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.db().employees.delete(request.id).await {
        Ok(removed) => {
            info!(correlation_id = %correlation_id, id = %request.id, removed, "employee delete");
            Json(StatusResponse::new("Employee deleted successfully")).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "employee delete failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /api/me/details?username=`.
///
/// Identity arrives as a client-supplied query parameter because the
/// contract has no session token; the username doubles as the employeeId.
async fn me_details(
    State(state): State<AppState>,
    Query(query): Query<MeDetailsQuery>,
) -> Response {
    let username = match query.username.as_deref() {
        Some(username) if !username.is_empty() => username,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::validation_error("Username is required")),
            )
                .into_response();
        }
    };

    match state.db().employees.find_by_employee_id(username).await {
        Some(employee) => Json(employee).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::new("NOT_FOUND", "Employee not found")),
        )
            .into_response(),
    }
}

/// Handler for `POST /api/leaves/apply`.
async fn apply_leave(
    State(state): State<AppState>,
    payload: Result<Json<ApplyLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = submit_leave(&state, request).await;
    match result {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "leave application submitted");
            (
                StatusCode::CREATED,
                Json(StatusResponse::new(
                    "Leave application submitted successfully.",
                )),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "leave application failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates and persists a leave application.
async fn submit_leave(state: &AppState, request: ApplyLeaveRequest) -> Result<(), HrError> {
    if request.reason.trim().is_empty() {
        return Err(HrError::validation("reason is required"));
    }
    if request.leave_type.trim().is_empty() {
        return Err(HrError::validation("leaveType is required"));
    }

    // Normalize to calendar dates before persisting.
    let start_date = parse_leave_date("startDate", &request.start_date)?;
    let end_date = parse_leave_date("endDate", &request.end_date)?;

    let application = LeaveApplication::new(
        request.employee_id,
        request.leave_type,
        request.reason,
        start_date,
        end_date,
    );
    state.db().leaves.insert(application).await
}

/// Handler for `GET /api/leaves/my-leaves?employeeId=`: the caller's
/// applications, most recent first.
async fn my_leaves(
    State(state): State<AppState>,
    Query(query): Query<MyLeavesQuery>,
) -> Json<Vec<LeaveApplication>> {
    let leaves = state.db().leaves.list_for_employee(&query.employee_id).await;
    Json(leaves)
}

/// Handler for `POST /api/register`.
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = auth::register(
        &state.db().users,
        request.full_name,
        request.email,
        request.username,
        &request.password,
        request.role,
    )
    .await;

    match result {
        Ok(()) => (
            StatusCode::CREATED,
            Json(StatusResponse::new("Registration successful!")),
        )
            .into_response(),
        Err(err @ HrError::Conflict { .. }) => {
            warn!(correlation_id = %correlation_id, error = %err, "registration conflict");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::with_details(
                    "CONFLICT",
                    "User already exists. Check username or email.",
                    err.to_string(),
                )),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "registration failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /api/login`.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match auth::login(
        &state.db().users,
        &request.identifier,
        &request.password,
        request.role,
    )
    .await
    {
        Ok(descriptor) => Json(json!({
            "status": "Login successful!",
            "user": descriptor,
        }))
        .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "login failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
