use kernel::model::MutationOutcome;
use serde::Serialize;

pub mod booking;
pub mod chain;
pub mod customer;
pub mod employee;
pub mod hotel;
pub mod rental;
pub mod room;

/// Flash-style payload returned by mutations.
#[derive(Serialize)]
pub struct StatusMessage {
    pub category: &'static str,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: "success",
            message: message.into(),
        }
    }

    pub fn from_outcome(outcome: MutationOutcome, applied: &str, noop: &str) -> Self {
        match outcome {
            MutationOutcome::Applied => Self::success(applied),
            MutationOutcome::NoOp => Self::success(noop),
        }
    }
}
