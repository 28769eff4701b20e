use super::*;

/// Tests deleting a listing also removes it from the owner's set.
///
/// Expected: Ok(true), listing and link gone
#[tokio::test]
async fn deletes_listing_and_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    let listing = factory::listing::create_listing(db, host.id).await?;

    let repo = ListingRepository::new(db);
    assert!(repo.delete(listing.id, host.id).await?);

    assert!(repo.get_by_id(listing.id).await?.is_none());
    assert_eq!(entity::prelude::UserListing::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a listing that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;

    let repo = ListingRepository::new(db);
    assert!(!repo.delete(42, host.id).await?);

    Ok(())
}

/// Tests the booking count used to guard deletion.
///
/// Expected: 0 before any booking, 2 after two bookings
#[tokio::test]
async fn counts_bookings_of_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    let guest = factory::user::create_guest(db).await?;
    let listing = factory::listing::create_listing(db, host.id).await?;
    let other = factory::listing::create_listing(db, host.id).await?;

    let repo = ListingRepository::new(db);
    assert_eq!(repo.booking_count(listing.id).await?, 0);

    factory::booking::create_booking(db, listing.id, guest.id).await?;
    factory::booking::create_booking(db, listing.id, guest.id).await?;
    factory::booking::create_booking(db, other.id, guest.id).await?;

    assert_eq!(repo.booking_count(listing.id).await?, 2);

    Ok(())
}
