use kernel::model::{
    hotel::Hotel,
    id::{ChainId, HotelId},
};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
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

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
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
        Hotel {
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
