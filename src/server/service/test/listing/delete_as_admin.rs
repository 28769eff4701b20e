use super::*;

/// Tests the admin removes a listing from its creator's set.
///
/// Expected: Ok(()), listing gone and the creator's set empty
#[tokio::test]
async fn removes_listing_from_creator_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    let listing = factory::listing::create_listing(db, host.id).await?;
    let kept = factory::listing::create_listing(db, host.id).await?;

    let service = ListingService::new(db);
    service.delete_as_admin(listing.id).await?;

    let owned = service.get_by_owner(host.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, kept.id);

    Ok(())
}

/// Tests the booked-listing guard also binds the admin.
///
/// Expected: Err(AppError::Conflict), listing still present
#[tokio::test]
async fn rejects_booked_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, listing, _) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = ListingService::new(db);
    let result = service.delete_as_admin(listing.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(listing.id).await.is_ok());

    Ok(())
}

/// Tests deleting a missing listing as admin.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListingService::new(db).delete_as_admin(12).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
