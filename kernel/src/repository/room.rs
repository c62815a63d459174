use crate::model::{
    booking::DateRange,
    id::HotelId,
    room::{
        event::{DeleteRoom, RoomSearchFilter},
        Room, RoomSearchFacets, RoomSummary,
    },
    MutationOutcome,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Filtered search over all rooms; an empty filter returns every room.
    async fn search(&self, filter: RoomSearchFilter) -> AppResult<Vec<RoomSummary>>;
    /// Availability search: only rooms with no booking overlapping the
    /// given period. Bypasses the attribute filters entirely.
    async fn find_available(&self, period: DateRange) -> AppResult<Vec<RoomSummary>>;
    async fn find_by_key(&self, hotel_id: HotelId, room_number: &str)
        -> AppResult<Option<Room>>;
    async fn delete(&self, event: DeleteRoom) -> AppResult<MutationOutcome>;
    async fn search_facets(&self) -> AppResult<RoomSearchFacets>;
}
