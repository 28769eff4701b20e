//! `SeaORM` entities for the rental service.

pub mod prelude;

pub mod booking;
pub mod listing;
pub mod user;
pub mod user_booking;
pub mod user_listing;
