//! Database entities module

pub mod booking_account;
pub mod department;
pub mod project;
pub mod user;
