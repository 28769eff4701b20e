//! Database repository layer.
//!
//! Repositories wrap a `DatabaseConnection`, use SeaORM entity models internally and
//! return entity models or plain values to the service layer. Writes that must land
//! together with an owner link go through [`linked::LinkedWrite`].

pub mod booking;
pub mod linked;
pub mod listing;
pub mod user;

#[cfg(test)]
mod test;
