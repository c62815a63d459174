use crate::model::id::CustomerId;

pub mod event;

#[derive(Debug)]
pub struct Customer {
    pub customer_id: CustomerId,
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
}
