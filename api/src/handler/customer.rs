use crate::model::{
    customer::{
        CreateCustomerRequest, CustomerCreatedResponse, CustomerResponse,
        UpdateCustomerProfileRequest, UpdateCustomerProfileRequestWithId,
    },
    StatusMessage,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::CustomerId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_customer(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<CustomerCreatedResponse>)> {
    req.validate()?;

    let customer_id = registry.customer_repository().create(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CustomerCreatedResponse::new(customer_id)),
    ))
}

pub async fn show_customer(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CustomerResponse>> {
    registry
        .customer_repository()
        .find_by_id(customer_id)
        .await
        .and_then(|customer| match customer {
            Some(customer) => Ok(Json(customer.into())),
            None => Err(AppError::EntityNotFound("the customer was not found".into())),
        })
}

pub async fn update_customer_profile(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateCustomerProfileRequest>,
) -> AppResult<Json<StatusMessage>> {
    req.validate()?;

    let event = UpdateCustomerProfileRequestWithId::new(customer_id, req);
    let outcome = registry
        .customer_repository()
        .update_profile(event.into())
        .await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the profile was updated",
        "no customer with this id exists",
    )))
}
