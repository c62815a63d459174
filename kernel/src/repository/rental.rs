use crate::model::{
    id::{CustomerId, RentalId},
    rental::{
        event::{CreateDirectRental, CreateRentalFromBooking},
        Rental,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RentalRepository: Send + Sync {
    async fn create_from_booking(&self, event: CreateRentalFromBooking) -> AppResult<RentalId>;
    async fn create_direct(&self, event: CreateDirectRental) -> AppResult<RentalId>;
    async fn find_by_customer(&self, customer_id: CustomerId) -> AppResult<Vec<Rental>>;
}
