use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    booking::{event::BookingSearchFilter, Booking, BookingSummary},
    id::{BookingId, CustomerId, HotelId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
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
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub category: &'static str,
    pub message: String,
    pub booking_id: BookingId,
}

impl BookingCreatedResponse {
    pub fn new(booking_id: BookingId) -> Self {
        Self {
            category: "success",
            message: "the room was booked".into(),
            booking_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
}

impl From<BookingSearchQuery> for BookingSearchFilter {
    fn from(value: BookingSearchQuery) -> Self {
        let BookingSearchQuery {
            first_name,
            last_name,
            city,
        } = value;
        Self {
            first_name,
            last_name,
            city,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummariesResponse {
    pub items: Vec<BookingSummaryResponse>,
}

impl From<Vec<BookingSummary>> for BookingSummariesResponse {
    fn from(value: Vec<BookingSummary>) -> Self {
        Self {
            items: value.into_iter().map(BookingSummaryResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummaryResponse {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub chain_name: String,
    pub city: String,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<BookingSummary> for BookingSummaryResponse {
    fn from(value: BookingSummary) -> Self {
        let BookingSummary {
            booking_id,
            customer_id,
            first_name,
            last_name,
            chain_name,
            city,
            hotel_id,
            room_number,
            start_date,
            end_date,
        } = value;
        Self {
            booking_id,
            customer_id,
            first_name,
            last_name,
            chain_name,
            city,
            hotel_id,
            room_number,
            start_date,
            end_date,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            customer_id,
            hotel_id,
            room_number,
            start_date,
            end_date,
        } = value;
        Self {
            booking_id,
            customer_id,
            hotel_id,
            room_number,
            start_date,
            end_date,
        }
    }
}
