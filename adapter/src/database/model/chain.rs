use kernel::model::{
    chain::{Chain, ChainEmail, ChainOffice, ChainPhone},
    id::{ChainId, EmailId, OfficeId, PhoneId},
};

#[derive(sqlx::FromRow)]
pub struct ChainRow {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub num_hotels: i32,
}

impl From<ChainRow> for Chain {
    fn from(value: ChainRow) -> Self {
        let ChainRow {
            chain_id,
            chain_name,
            num_hotels,
        } = value;
        Chain {
            chain_id,
            chain_name,
            num_hotels,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct ChainOfficeRow {
    pub office_id: OfficeId,
    pub street_number: String,
    pub street_name: String,
    pub apt_number: Option<String>,
    pub city: String,
    pub province_or_state: String,
    pub country: String,
    pub zip: String,
}

impl From<ChainOfficeRow> for ChainOffice {
    fn from(value: ChainOfficeRow) -> Self {
        let ChainOfficeRow {
            office_id,
            street_number,
            street_name,
            apt_number,
            city,
            province_or_state,
            country,
            zip,
        } = value;
        ChainOffice {
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

#[derive(sqlx::FromRow)]
pub struct ChainPhoneRow {
    pub phone_id: PhoneId,
    pub phone_number: String,
    pub description: String,
}

impl From<ChainPhoneRow> for ChainPhone {
    fn from(value: ChainPhoneRow) -> Self {
        let ChainPhoneRow {
            phone_id,
            phone_number,
            description,
        } = value;
        ChainPhone {
            phone_id,
            phone_number,
            description,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct ChainEmailRow {
    pub email_id: EmailId,
    pub email_address: String,
    pub description: String,
}

impl From<ChainEmailRow> for ChainEmail {
    fn from(value: ChainEmailRow) -> Self {
        let ChainEmailRow {
            email_id,
            email_address,
            description,
        } = value;
        ChainEmail {
            email_id,
            email_address,
            description,
        }
    }
}
