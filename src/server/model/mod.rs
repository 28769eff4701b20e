//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry already
//! validated input from controllers into services.

pub mod booking;
pub mod listing;
pub mod user;
