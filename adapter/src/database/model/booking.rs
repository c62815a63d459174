use chrono::NaiveDate;
use kernel::model::{
    booking::{Booking, BookingSummary},
    id::{BookingId, CustomerId, HotelId},
};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            customer_id,
            hotel_id,
            room_number,
            start_date,
            end_date,
        } = value;
        Booking {
            booking_id,
            customer_id,
            hotel_id,
            room_number,
            start_date,
            end_date,
        }
    }
}

/// Front-desk search row: booking joined with customer and hotel.
#[derive(sqlx::FromRow)]
pub struct BookingSummaryRow {
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

impl From<BookingSummaryRow> for BookingSummary {
    fn from(value: BookingSummaryRow) -> Self {
        let BookingSummaryRow {
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
        BookingSummary {
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
