pub mod booking;
pub mod chain;
pub mod customer;
pub mod employee;
pub mod hotel;
pub mod rental;
pub mod room;
