use kernel::model::{
    id::HotelId,
    room::{Room, RoomSummary},
};
use rust_decimal::Decimal;

/// Search result shape: also the row type returned by the
/// `get_available_rooms` SQL function.
#[derive(sqlx::FromRow)]
pub struct RoomSummaryRow {
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

impl From<RoomSummaryRow> for RoomSummary {
    fn from(value: RoomSummaryRow) -> Self {
        let RoomSummaryRow {
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
        RoomSummary {
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

#[derive(sqlx::FromRow)]
pub struct RoomRow {
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

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
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
        Room {
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
