use crate::model::id::{BookingId, CustomerId, HotelId};
use chrono::NaiveDate;
use shared::error::{AppError, AppResult};

pub mod event;

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Booking joined with customer and hotel metadata, used by the
/// front-desk search.
#[derive(Debug)]
pub struct BookingSummary {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub chain_name: String,
    pub city: String,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A half-open stay interval [start_date, end_date). Two stays overlap
/// iff their intervals intersect; back-to-back stays sharing a boundary
/// date do not.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<Self> {
        if start_date >= end_date {
            return Err(AppError::UnprocessableEntity(format!(
                "the start date ({start_date}) must be before the end date ({end_date})"
            )));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        let d = |s: &str| s.parse::<NaiveDate>().unwrap();
        assert!(DateRange::new(d("2024-06-01"), d("2024-06-05")).is_ok());
        assert!(DateRange::new(d("2024-06-05"), d("2024-06-05")).is_err());
        assert!(DateRange::new(d("2024-06-07"), d("2024-06-03")).is_err());
    }
}
