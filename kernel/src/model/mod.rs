pub mod booking;
pub mod chain;
pub mod customer;
pub mod employee;
pub mod hotel;
pub mod id;
pub mod rental;
pub mod room;

/// Result of a delete/update-by-key write. A missing target row is a
/// no-op, not a failure; constraint violations surface as errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NoOp,
}

impl MutationOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            Self::Applied
        } else {
            Self::NoOp
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
