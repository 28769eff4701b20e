use super::*;

/// Tests the booking user removes their booking.
///
/// Expected: Ok(()), booking gone from the list and the user's set
#[tokio::test]
async fn owner_removes_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guest, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    service.delete(guest.id, booking.id).await?;

    assert!(service.get_all().await?.is_empty());
    assert!(service.get_by_owner(guest.id).await?.is_empty());

    Ok(())
}

/// Tests another user cannot remove someone else's booking.
///
/// Expected: Err(AuthError::AccessDenied), booking still present
#[tokio::test]
async fn rejects_removal_by_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, guest, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let result = service.delete(host.id, booking.id).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, host.id);
            assert_eq!(msg, "Unauthorized.");
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }
    assert_eq!(service.get_by_owner(guest.id).await?.len(), 1);

    Ok(())
}

/// Tests removing a booking that does not exist.
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

    let guest = factory::user::create_guest(db).await?;

    let result = BookingService::new(db).delete(guest.id, 5).await;
    assert!(
        matches!(result, Err(AppError::NotFound(msg)) if msg == "Could not find a booking for the provided id.")
    );

    Ok(())
}
