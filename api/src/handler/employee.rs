use crate::model::{
    employee::{
        CreateEmployeeRequest, EmployeeCreatedResponse, EmployeeResponse, EmployeesResponse,
        PositionsResponse, UpdateEmployeeProfileRequest, UpdateEmployeeProfileRequestWithId,
    },
    StatusMessage,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::EmployeeId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_employee(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeCreatedResponse>)> {
    req.validate()?;

    let employee_id = registry.employee_repository().create(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(EmployeeCreatedResponse::new(employee_id)),
    ))
}

pub async fn show_employee_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EmployeesResponse>> {
    registry
        .employee_repository()
        .find_all()
        .await
        .map(EmployeesResponse::from)
        .map(Json)
}

pub async fn show_employee(
    Path(employee_id): Path<EmployeeId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EmployeeResponse>> {
    registry
        .employee_repository()
        .find_by_id(employee_id)
        .await
        .and_then(|employee| match employee {
            Some(employee) => Ok(Json(employee.into())),
            None => Err(AppError::EntityNotFound("the employee was not found".into())),
        })
}

pub async fn update_employee_profile(
    Path(employee_id): Path<EmployeeId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateEmployeeProfileRequest>,
) -> AppResult<Json<StatusMessage>> {
    req.validate()?;

    let event = UpdateEmployeeProfileRequestWithId::new(employee_id, req);
    let outcome = registry
        .employee_repository()
        .update_profile(event.into())
        .await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the profile was updated",
        "no employee with this id exists",
    )))
}

pub async fn show_position_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PositionsResponse>> {
    registry
        .employee_repository()
        .find_positions()
        .await
        .map(PositionsResponse::from)
        .map(Json)
}
