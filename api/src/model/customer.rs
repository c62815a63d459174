use derive_new::new;
use garde::Validate;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomerProfile},
        Customer,
    },
    id::CustomerId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[garde(length(min = 1))]
    pub ssn: String,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(skip)]
    pub middle_initial: Option<String>,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(length(min = 1))]
    pub street_number: String,
    #[garde(length(min = 1))]
    pub street_name: String,
    #[garde(skip)]
    pub apt_number: Option<String>,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(length(min = 1))]
    pub province_or_state: String,
    #[garde(length(min = 1))]
    pub country: String,
    #[garde(length(min = 1))]
    pub zip: String,
}

impl From<CreateCustomerRequest> for CreateCustomer {
    fn from(value: CreateCustomerRequest) -> Self {
        let CreateCustomerRequest {
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
        Self {
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

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedResponse {
    pub category: &'static str,
    pub message: String,
    pub customer_id: CustomerId,
}

impl CustomerCreatedResponse {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            category: "success",
            message: "the customer account was created".into(),
            customer_id,
        }
    }
}

/// Absent and empty fields alike leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerProfileRequest {
    #[garde(skip)]
    pub ssn: Option<String>,
    #[garde(skip)]
    pub first_name: Option<String>,
    #[garde(skip)]
    pub middle_initial: Option<String>,
    #[garde(skip)]
    pub last_name: Option<String>,
    #[garde(skip)]
    pub street_number: Option<String>,
    #[garde(skip)]
    pub street_name: Option<String>,
    #[garde(skip)]
    pub apt_number: Option<String>,
    #[garde(skip)]
    pub city: Option<String>,
    #[garde(skip)]
    pub province_or_state: Option<String>,
    #[garde(skip)]
    pub country: Option<String>,
    #[garde(skip)]
    pub zip: Option<String>,
}

#[derive(new)]
pub struct UpdateCustomerProfileRequestWithId(CustomerId, UpdateCustomerProfileRequest);

impl From<UpdateCustomerProfileRequestWithId> for UpdateCustomerProfile {
    fn from(value: UpdateCustomerProfileRequestWithId) -> Self {
        let UpdateCustomerProfileRequestWithId(
            customer_id,
            UpdateCustomerProfileRequest {
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
            },
        ) = value;
        Self {
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

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
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

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let Customer {
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
        Self {
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
