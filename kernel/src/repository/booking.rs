use crate::model::{
    booking::{
        event::{BookingSearchFilter, CancelBooking, CreateBooking},
        Booking, BookingSummary,
    },
    id::{BookingId, CustomerId},
    MutationOutcome,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a booking. Overlapping another booking for the same room
    /// is a terminal conflict: the transaction rolls back and the caller
    /// reports it; no retry happens.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn search(&self, filter: BookingSearchFilter) -> AppResult<Vec<BookingSummary>>;
    async fn find_by_customer(&self, customer_id: CustomerId) -> AppResult<Vec<Booking>>;
    async fn cancel(&self, event: CancelBooking) -> AppResult<MutationOutcome>;
}
