use crate::model::id::CustomerId;

pub struct CreateCustomer {
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

/// Partial profile update: only fields with a non-empty submitted value
/// make it into the SET clause.
#[derive(Debug)]
pub struct UpdateCustomerProfile {
    pub customer_id: CustomerId,
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
