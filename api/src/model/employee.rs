use derive_new::new;
use garde::Validate;
use kernel::model::{
    employee::{
        event::{CreateEmployee, UpdateEmployeeProfile},
        Employee, Position,
    },
    id::{EmployeeId, HotelId, PositionId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
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
    #[garde(skip)]
    pub position_id: PositionId,
    #[garde(skip)]
    pub hotel_id: HotelId,
}

impl From<CreateEmployeeRequest> for CreateEmployee {
    fn from(value: CreateEmployeeRequest) -> Self {
        let CreateEmployeeRequest {
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
            position_id,
            hotel_id,
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
            position_id,
            hotel_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreatedResponse {
    pub category: &'static str,
    pub message: String,
    pub employee_id: EmployeeId,
}

impl EmployeeCreatedResponse {
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            category: "success",
            message: "the employee account was created".into(),
            employee_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeProfileRequest {
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
pub struct UpdateEmployeeProfileRequestWithId(EmployeeId, UpdateEmployeeProfileRequest);

impl From<UpdateEmployeeProfileRequestWithId> for UpdateEmployeeProfile {
    fn from(value: UpdateEmployeeProfileRequestWithId) -> Self {
        let UpdateEmployeeProfileRequestWithId(
            employee_id,
            UpdateEmployeeProfileRequest {
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
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesResponse {
    pub items: Vec<EmployeeResponse>,
}

impl From<Vec<Employee>> for EmployeesResponse {
    fn from(value: Vec<Employee>) -> Self {
        Self {
            items: value.into_iter().map(EmployeeResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
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

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        let Employee {
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
        Self {
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

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsResponse {
    pub items: Vec<PositionResponse>,
}

impl From<Vec<Position>> for PositionsResponse {
    fn from(value: Vec<Position>) -> Self {
        Self {
            items: value.into_iter().map(PositionResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub position_id: PositionId,
    pub position_name: String,
}

impl From<Position> for PositionResponse {
    fn from(value: Position) -> Self {
        let Position {
            position_id,
            position_name,
        } = value;
        Self {
            position_id,
            position_name,
        }
    }
}
