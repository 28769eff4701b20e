use super::*;

/// Tests the admin removes a booking from the booking user's own set.
///
/// Verifies only the targeted booking disappears and the user's other bookings
/// stay linked.
///
/// Expected: Ok(()), one booking left in the guest's set
#[tokio::test]
async fn detaches_from_booking_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guest, listing, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let kept = factory::booking::create_booking(db, listing.id, guest.id).await?;

    let service = BookingService::new(db);
    service.delete_as_admin(booking.id).await?;

    let owned = service.get_by_owner(guest.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, kept.id);

    Ok(())
}

/// Tests the admin removing a missing booking.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db).delete_as_admin(31).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
