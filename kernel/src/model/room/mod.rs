use crate::model::id::HotelId;
use rust_decimal::Decimal;

pub mod event;

/// One row of the room search result: a room joined with its hotel,
/// chain and view metadata.
#[derive(Debug)]
pub struct RoomSummary {
    pub hotel_id: HotelId,
    pub chain_name: String,
    pub stars: i32,
    pub num_rooms: i32,
    pub country: String,
    pub province_or_state: String,
    pub city: String,
    pub address: String,
    pub room_number: String,
    pub capacity: i32,
    pub view_description: String,
    pub price: Decimal,
}

/// Full room detail with amenity flags, shown on the booking page.
#[derive(Debug)]
pub struct Room {
    pub hotel_id: HotelId,
    pub room_number: String,
    pub chain_name: String,
    pub country: String,
    pub province_or_state: String,
    pub city: String,
    pub address: String,
    pub zip: String,
    pub capacity: i32,
    pub view_description: String,
    pub extensible: bool,
    pub tv: bool,
    pub air_condition: bool,
    pub fridge: bool,
    pub price: Decimal,
}

/// Distinct values offered as dropdown options on the search form.
#[derive(Debug)]
pub struct RoomSearchFacets {
    pub chains: Vec<String>,
    pub capacities: Vec<i32>,
    pub cities: Vec<String>,
    pub countries: Vec<String>,
    pub provinces_or_states: Vec<String>,
    pub stars: Vec<i32>,
    pub num_rooms: Vec<i32>,
}
