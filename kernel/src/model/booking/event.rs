use super::DateRange;
use crate::model::id::{BookingId, CustomerId, HotelId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub period: DateRange,
}

#[derive(Debug, new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
}

/// Front-desk booking search: customer names match case-insensitively
/// as substrings, the hotel city matches exactly.
#[derive(Debug, Default)]
pub struct BookingSearchFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
}
