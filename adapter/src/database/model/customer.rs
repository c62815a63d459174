use kernel::model::{customer::Customer, id::CustomerId};

#[derive(sqlx::FromRow)]
pub struct CustomerRow {
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

impl From<CustomerRow> for Customer {
    fn from(value: CustomerRow) -> Self {
        let CustomerRow {
            customer_id,
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
        } = value;
        Customer {
            customer_id,
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
        }
    }
}
