use crate::model::id::{ChainId, HotelId};

pub mod event;

#[derive(Debug)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub chain_id: ChainId,
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub province_or_state: String,
    pub country: String,
    pub zip: String,
    pub stars: i32,
    pub num_rooms: i32,
}
