use crate::model::id::{BookingId, CustomerId, HotelId, RentalId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub mod event;

/// A paid, recorded stay. Walk-in rentals carry no booking id.
#[derive(Debug)]
pub struct Rental {
    pub rental_id: RentalId,
    pub booking_id: Option<BookingId>,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount_paid: Decimal,
}
