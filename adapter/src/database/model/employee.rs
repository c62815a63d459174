use kernel::model::{
    employee::{Employee, Position},
    id::{EmployeeId, HotelId, PositionId},
};

#[derive(sqlx::FromRow)]
pub struct EmployeeRow {
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

impl From<EmployeeRow> for Employee {
    fn from(value: EmployeeRow) -> Self {
        let EmployeeRow {
            employee_id,
            ssn,
            first_name,
            middle_initial,
            last_name,
            street_number,
            street_name,
            apt_number,
            city,
            province_or_state,
            country,
            zip,
            position_name,
            hotel_id,
        } = value;
        Employee {
            employee_id,
            ssn,
            first_name,
            middle_initial,
            last_name,
            street_number,
            street_name,
            apt_number,
            city,
            province_or_state,
            country,
            zip,
            position_name,
            hotel_id,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct PositionRow {
    pub position_id: PositionId,
    pub position_name: String,
}

impl From<PositionRow> for Position {
    fn from(value: PositionRow) -> Self {
        let PositionRow {
            position_id,
            position_name,
        } = value;
        Position {
            position_id,
            position_name,
        }
    }
}
