use crate::model::booking::DateRange;
use crate::model::id::{BookingId, CustomerId, HotelId};
use derive_new::new;
use rust_decimal::Decimal;

/// Check-in against an existing booking; the room and stay dates are
/// copied from the booking row inside the transaction.
#[derive(Debug, new)]
pub struct CreateRentalFromBooking {
    pub booking_id: BookingId,
    pub amount_paid: Decimal,
}

/// Walk-in rental with no prior booking.
#[derive(Debug, new)]
pub struct CreateDirectRental {
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub period: DateRange,
    pub amount_paid: Decimal,
}
