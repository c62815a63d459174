use kernel::model::{
    hotel::Hotel,
    id::{ChainId, HotelId},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelsResponse {
    pub items: Vec<HotelResponse>,
}

impl From<Vec<Hotel>> for HotelsResponse {
    fn from(value: Vec<Hotel>) -> Self {
        Self {
            items: value.into_iter().map(HotelResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
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

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        let Hotel {
            hotel_id,
            chain_id,
            street_number,
            street_name,
            city,
            province_or_state,
            country,
            zip,
            stars,
            num_rooms,
        } = value;
        Self {
            hotel_id,
            chain_id,
            street_number,
            street_name,
            city,
            province_or_state,
            country,
            zip,
            stars,
            num_rooms,
        }
    }
}
