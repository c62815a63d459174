use crate::model::id::{EmployeeId, HotelId, PositionId};

pub struct CreateEmployee {
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
    pub position_id: PositionId,
    pub hotel_id: HotelId,
}

/// Same partial-update shape as the customer profile.
#[derive(Debug)]
pub struct UpdateEmployeeProfile {
    pub employee_id: EmployeeId,
    pub ssn: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub apt_number: Option<String>,
    pub city: Option<String>,
    pub province_or_state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}
