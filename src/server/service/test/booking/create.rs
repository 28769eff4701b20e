use super::*;

/// Tests a guest books a listing and sees it in their booking set.
///
/// Expected: Ok(Booking) listed for the guest and in the full list
#[tokio::test]
async fn guest_books_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    let guest = factory::user::create_guest(db).await?;
    let listing = factory::listing::create_listing(db, host.id).await?;

    let service = BookingService::new(db);
    let booking = service.create(params(listing.id, guest.id)).await?;

    assert_eq!(booking.listing_id, listing.id);
    assert_eq!(booking.booking_user, guest.id);

    let owned = service.get_by_owner(guest.id).await?;
    assert_eq!(owned, vec![booking.clone()]);
    assert_eq!(service.get_all().await?, vec![booking]);

    Ok(())
}

/// Tests overlapping stays on the same listing are both accepted.
///
/// Expected: Ok for both bookings
#[tokio::test]
async fn accepts_overlapping_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    let guest = factory::user::create_guest(db).await?;
    let other_guest = factory::user::create_guest(db).await?;
    let listing = factory::listing::create_listing(db, host.id).await?;

    let service = BookingService::new(db);
    service.create(params(listing.id, guest.id)).await?;
    service.create(params(listing.id, other_guest.id)).await?;

    assert_eq!(service.get_all().await?.len(), 2);

    Ok(())
}

/// Tests booking a listing that does not exist.
///
/// Expected: Err(AppError::NotFound), nothing stored
#[tokio::test]
async fn rejects_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_guest(db).await?;

    let service = BookingService::new(db);
    let result = service.create(params(999, guest.id)).await;

    assert!(
        matches!(result, Err(AppError::NotFound(msg)) if msg == "Could not find a listing for the provided id.")
    );
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
