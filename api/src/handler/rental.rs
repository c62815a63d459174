use crate::model::rental::{
    CreateDirectRentalRequest, CreateRentalFromBookingRequest, RentalCreatedResponse,
    RentalsResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::DateRange,
    id::CustomerId,
    rental::event::{CreateDirectRental, CreateRentalFromBooking},
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn check_in_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRentalFromBookingRequest>,
) -> AppResult<(StatusCode, Json<RentalCreatedResponse>)> {
    req.validate()?;

    let event = CreateRentalFromBooking::new(req.booking_id, req.amount_paid);
    let rental_id = registry.rental_repository().create_from_booking(event).await?;
    Ok((
        StatusCode::CREATED,
        Json(RentalCreatedResponse::new(rental_id)),
    ))
}

pub async fn register_direct_rental(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateDirectRentalRequest>,
) -> AppResult<(StatusCode, Json<RentalCreatedResponse>)> {
    req.validate()?;

    let period = DateRange::new(req.start_date, req.end_date)?;
    let event = CreateDirectRental::new(
        req.customer_id,
        req.hotel_id,
        req.room_number,
        period,
        req.amount_paid,
    );
    let rental_id = registry.rental_repository().create_direct(event).await?;
    Ok((
        StatusCode::CREATED,
        Json(RentalCreatedResponse::new(rental_id)),
    ))
}

pub async fn show_customer_rentals(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RentalsResponse>> {
    registry
        .rental_repository()
        .find_by_customer(customer_id)
        .await
        .map(RentalsResponse::from)
        .map(Json)
}
