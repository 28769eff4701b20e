//! Wire DTOs exchanged over the HTTP API.
//!
//! All JSON bodies use camelCase field names.

pub mod api;
pub mod auth;
pub mod booking;
pub mod listing;
