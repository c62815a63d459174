use crate::model::id::HotelId;
use derive_new::new;

#[derive(Debug, new)]
pub struct DeleteHotel {
    pub hotel_id: HotelId,
}
