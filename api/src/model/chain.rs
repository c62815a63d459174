use garde::Validate;
use kernel::model::{
    chain::{Chain, ChainContacts, ChainEmail, ChainOffice, ChainPhone},
    id::{ChainId, EmailId, OfficeId, PhoneId},
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainsResponse {
    pub items: Vec<ChainResponse>,
}

impl From<Vec<Chain>> for ChainsResponse {
    fn from(value: Vec<Chain>) -> Self {
        Self {
            items: value.into_iter().map(ChainResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainResponse {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub num_hotels: i32,
}

impl From<Chain> for ChainResponse {
    fn from(value: Chain) -> Self {
        let Chain {
            chain_id,
            chain_name,
            num_hotels,
        } = value;
        Self {
            chain_id,
            chain_name,
            num_hotels,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChainNameRequest {
    #[garde(length(min = 1))]
    pub chain_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainContactsResponse {
    pub offices: Vec<ChainOfficeResponse>,
    pub phones: Vec<ChainPhoneResponse>,
    pub emails: Vec<ChainEmailResponse>,
}

impl From<ChainContacts> for ChainContactsResponse {
    fn from(value: ChainContacts) -> Self {
        let ChainContacts {
            offices,
            phones,
            emails,
        } = value;
        Self {
            offices: offices.into_iter().map(ChainOfficeResponse::from).collect(),
            phones: phones.into_iter().map(ChainPhoneResponse::from).collect(),
            emails: emails.into_iter().map(ChainEmailResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainOfficeResponse {
    pub office_id: OfficeId,
    pub street_number: String,
    pub street_name: String,
    pub apt_number: Option<String>,
    pub city: String,
    pub province_or_state: String,
    pub country: String,
    pub zip: String,
}

impl From<ChainOffice> for ChainOfficeResponse {
    fn from(value: ChainOffice) -> Self {
        let ChainOffice {
            office_id,
            street_number,
            street_name,
            apt_number,
            city,
            province_or_state,
            country,
            zip,
        } = value;
        Self {
            office_id,
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
pub struct ChainPhoneResponse {
    pub phone_id: PhoneId,
    pub phone_number: String,
    pub description: String,
}

impl From<ChainPhone> for ChainPhoneResponse {
    fn from(value: ChainPhone) -> Self {
        let ChainPhone {
            phone_id,
            phone_number,
            description,
        } = value;
        Self {
            phone_id,
            phone_number,
            description,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEmailResponse {
    pub email_id: EmailId,
    pub email_address: String,
    pub description: String,
}

impl From<ChainEmail> for ChainEmailResponse {
    fn from(value: ChainEmail) -> Self {
        let ChainEmail {
            email_id,
            email_address,
            description,
        } = value;
        Self {
            email_id,
            email_address,
            description,
        }
    }
}
