use crate::model::{
    hotel::{event::DeleteHotel, Hotel},
    id::HotelId,
    MutationOutcome,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Hotel>>;
    async fn find_by_id(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>>;
    async fn delete(&self, event: DeleteHotel) -> AppResult<MutationOutcome>;
}
