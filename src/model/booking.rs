use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Booking request body.
///
/// Every field is optional at the wire level so that a missing field produces the same
/// validation error as an empty one.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    /// JSON number or numeric string.
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    #[schema(value_type = Option<i32>)]
    pub listing_id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub check_in: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub listing_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub booking_user: i32,
}

/// Reads an ID sent either as a JSON number or as a string such as `"12"`.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i32),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid listing ID '{}'", text))),
    }
}
