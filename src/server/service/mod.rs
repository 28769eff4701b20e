//! Service layer for business logic.
//!
//! Services sit between controllers and repositories. They enforce the business
//! rules (ownership, uniqueness, the booked-listing guard), convert entity models
//! to domain models, and return `AppError` with the client-facing message for every
//! rule a request breaks.

pub mod auth;
pub mod booking;
pub mod image;
pub mod listing;
pub mod token;

#[cfg(test)]
mod test;
