//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a host, a guest, a listing owned by the host and a booking of that
/// listing made by the guest.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((host, guest, listing, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::listing::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let host = crate::factory::user::create_host(db).await?;
    let guest = crate::factory::user::create_guest(db).await?;
    let listing = crate::factory::listing::create_listing(db, host.id).await?;
    let booking = crate::factory::booking::create_booking(db, listing.id, guest.id).await?;

    Ok((host, guest, listing, booking))
}
