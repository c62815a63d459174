pub mod booking;
pub mod chain;
pub mod customer;
pub mod employee;
pub mod health;
pub mod hotel;
pub mod rental;
pub mod room;
