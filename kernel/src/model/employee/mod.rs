use crate::model::id::{EmployeeId, HotelId, PositionId};

pub mod event;

#[derive(Debug)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub ssn: String,
    pub first_name: String,
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub street_number: String,
    pub street_name: String,
    pub apt_number: Option<String>,
    pub city: String,
    pub province_or_state: String,
    pub country: String,
    pub zip: String,
    pub position_name: String,
    pub hotel_id: HotelId,
}

#[derive(Debug)]
pub struct Position {
    pub position_id: PositionId,
    pub position_name: String,
}
