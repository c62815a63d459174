use crate::model::{
    booking::{
        BookingCreatedResponse, BookingSearchQuery, BookingSummariesResponse, BookingsResponse,
        CreateBookingRequest,
    },
    StatusMessage,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        DateRange,
    },
    id::{BookingId, CustomerId},
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn create_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    req.validate()?;

    let period = DateRange::new(req.start_date, req.end_date)?;
    let event = CreateBooking::new(req.customer_id, req.hotel_id, req.room_number, period);
    let booking_id = registry.booking_repository().create(event).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse::new(booking_id)),
    ))
}

pub async fn search_bookings(
    Query(query): Query<BookingSearchQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingSummariesResponse>> {
    registry
        .booking_repository()
        .search(query.into())
        .await
        .map(BookingSummariesResponse::from)
        .map(Json)
}

pub async fn show_customer_bookings(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_customer(customer_id)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn cancel_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusMessage>> {
    let outcome = registry
        .booking_repository()
        .cancel(CancelBooking::new(booking_id))
        .await?;
    Ok(Json(StatusMessage::from_outcome(
        outcome,
        "the booking was cancelled",
        "the booking was already gone",
    )))
}
