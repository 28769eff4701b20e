use thiserror::Error;

/// Reasons a bearer token is rejected.
///
/// All of them surface to clients as the same 401; the distinction only reaches logs.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature, encoding or claim structure is invalid.
    #[error("Malformed or wrongly signed token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("Token has expired")]
    Expired,

    #[error("Token issued in the future")]
    NotYetValid,

    #[error("Token expires before it was issued")]
    InvalidTimeWindow,
}
