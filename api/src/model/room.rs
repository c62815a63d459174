use kernel::model::{
    id::HotelId,
    room::{event::RoomSearchFilter, Room, RoomSearchFacets, RoomSummary},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw search-form submission. The date pair switches the search into
/// availability mode; everything else is an attribute filter that is
/// active only when non-empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchQuery {
    pub chain: Option<String>,
    pub stars: Option<String>,
    pub num_rooms: Option<String>,
    pub country: Option<String>,
    pub province_or_state: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<String>,
    pub price: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<RoomSearchQuery> for RoomSearchFilter {
    fn from(value: RoomSearchQuery) -> Self {
        let RoomSearchQuery {
            chain,
            stars,
            num_rooms,
            country,
            province_or_state,
            city,
            capacity,
            price,
            start_date: _,
            end_date: _,
        } = value;
        Self {
            chain,
            stars,
            num_rooms,
            country,
            province_or_state,
            city,
            capacity,
            price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomSummaryResponse>,
}

impl From<Vec<RoomSummary>> for RoomsResponse {
    fn from(value: Vec<RoomSummary>) -> Self {
        Self {
            items: value.into_iter().map(RoomSummaryResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryResponse {
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

impl From<RoomSummary> for RoomSummaryResponse {
    fn from(value: RoomSummary) -> Self {
        let RoomSummary {
            hotel_id,
            chain_name,
            stars,
            num_rooms,
            country,
            province_or_state,
            city,
            address,
            room_number,
            capacity,
            view_description,
            price,
        } = value;
        Self {
            hotel_id,
            chain_name,
            stars,
            num_rooms,
            country,
            province_or_state,
            city,
            address,
            room_number,
            capacity,
            view_description,
            price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
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

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            hotel_id,
            room_number,
            chain_name,
            country,
            province_or_state,
            city,
            address,
            zip,
            capacity,
            view_description,
            extensible,
            tv,
            air_condition,
            fridge,
            price,
        } = value;
        Self {
            hotel_id,
            room_number,
            chain_name,
            country,
            province_or_state,
            city,
            address,
            zip,
            capacity,
            view_description,
            extensible,
            tv,
            air_condition,
            fridge,
            price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchFacetsResponse {
    pub chains: Vec<String>,
    pub capacities: Vec<i32>,
    pub cities: Vec<String>,
    pub countries: Vec<String>,
    pub provinces_or_states: Vec<String>,
    pub stars: Vec<i32>,
    pub num_rooms: Vec<i32>,
}

impl From<RoomSearchFacets> for RoomSearchFacetsResponse {
    fn from(value: RoomSearchFacets) -> Self {
        let RoomSearchFacets {
            chains,
            capacities,
            cities,
            countries,
            provinces_or_states,
            stars,
            num_rooms,
        } = value;
        Self {
            chains,
            capacities,
            cities,
            countries,
            provinces_or_states,
            stars,
            num_rooms,
        }
    }
}
