use chrono::NaiveDate;
use kernel::model::{
    id::{BookingId, CustomerId, HotelId, RentalId},
    rental::Rental,
};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct RentalRow {
    pub rental_id: RentalId,
    pub booking_id: Option<BookingId>,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount_paid: Decimal,
}

impl From<RentalRow> for Rental {
    fn from(value: RentalRow) -> Self {
        let RentalRow {
            rental_id,
            booking_id,
            customer_id,
            hotel_id,
            room_number,
            start_date,
            end_date,
            amount_paid,
        } = value;
        Rental {
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
