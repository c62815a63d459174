use crate::model::id::{ChainId, EmailId, OfficeId, PhoneId};

pub mod event;

#[derive(Debug)]
pub struct Chain {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub num_hotels: i32,
}

#[derive(Debug)]
pub struct ChainOffice {
    pub office_id: OfficeId,
    pub street_number: String,
    pub street_name: String,
    pub apt_number: Option<String>,
    pub city: String,
    pub province_or_state: String,
    pub country: String,
    pub zip: String,
}

#[derive(Debug)]
pub struct ChainPhone {
    pub phone_id: PhoneId,
    pub phone_number: String,
    pub description: String,
}

#[derive(Debug)]
pub struct ChainEmail {
    pub email_id: EmailId,
    pub email_address: String,
    pub description: String,
}

/// Contact satellites shown on the chain edit page.
#[derive(Debug)]
pub struct ChainContacts {
    pub offices: Vec<ChainOffice>,
    pub phones: Vec<ChainPhone>,
    pub emails: Vec<ChainEmail>,
}
