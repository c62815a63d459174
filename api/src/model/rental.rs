use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::{BookingId, CustomerId, HotelId, RentalId},
    rental::Rental,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Check-in for an existing booking.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalFromBookingRequest {
    #[garde(skip)]
    pub booking_id: BookingId,
    #[garde(custom(non_negative))]
    pub amount_paid: Decimal,
}

/// Walk-in rental without a booking.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDirectRentalRequest {
    #[garde(skip)]
    pub customer_id: CustomerId,
    #[garde(skip)]
    pub hotel_id: HotelId,
    #[garde(length(min = 1))]
    pub room_number: String,
    #[garde(skip)]
    pub start_date: NaiveDate,
    #[garde(skip)]
    pub end_date: NaiveDate,
    #[garde(custom(non_negative))]
    pub amount_paid: Decimal,
}

fn non_negative(value: &Decimal, _: &()) -> garde::Result {
    if value.is_sign_negative() {
        return Err(garde::Error::new("the amount paid cannot be negative"));
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCreatedResponse {
    pub category: &'static str,
    pub message: String,
    pub rental_id: RentalId,
}

impl RentalCreatedResponse {
    pub fn new(rental_id: RentalId) -> Self {
        Self {
            category: "success",
            message: "the rental was recorded".into(),
            rental_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalsResponse {
    pub items: Vec<RentalResponse>,
}

impl From<Vec<Rental>> for RentalsResponse {
    fn from(value: Vec<Rental>) -> Self {
        Self {
            items: value.into_iter().map(RentalResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub rental_id: RentalId,
    pub booking_id: Option<BookingId>,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount_paid: Decimal,
}

impl From<Rental> for RentalResponse {
    fn from(value: Rental) -> Self {
        let Rental {
            rental_id,
            booking_id,
            customer_id,
            hotel_id,
            room_number,
            start_date,
            end_date,
            amount_paid,
        } = value;
        Self {
            rental_id,
            booking_id,
            customer_id,
            hotel_id,
            room_number,
            start_date,
            end_date,
            amount_paid,
        }
    }
}
