use crate::model::id::HotelId;
use derive_new::new;

/// Raw form values for the room search. Values stay untyped strings here
/// because activation is decided by presence, not truthiness: an empty or
/// absent field deactivates its filter while "0" keeps it active.
#[derive(Debug, Default)]
pub struct RoomSearchFilter {
    pub chain: Option<String>,
    pub stars: Option<String>,
    pub num_rooms: Option<String>,
    pub country: Option<String>,
    pub province_or_state: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, new)]
pub struct DeleteRoom {
    pub hotel_id: HotelId,
    pub room_number: String,
}
