use super::*;

/// Tests creating a listing appends it to the creator's listing set.
///
/// Expected: Ok(listing) with the stored fields and a link to the creator
#[tokio::test]
async fn creates_listing_with_owner_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;

    let repo = ListingRepository::new(db);
    let listing = repo
        .create(CreateListingParams {
            creator: host.id,
            img: "uploads/images/a.webp".to_string(),
            title: "Santorini".to_string(),
            location: "Greece".to_string(),
            listing_type: "Villa".to_string(),
            info: ListingInfo {
                guests: 4,
                bedrooms: 2,
                bathrooms: 2,
            },
            price_per_night: "$250".to_string(),
            rating: "4.5".to_string(),
        })
        .await?;

    assert_eq!(listing.title, "Santorini");
    assert_eq!(listing.guests, 4);
    assert_eq!(listing.creator, host.id);

    let owned = repo.get_by_owner(host.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, listing.id);

    Ok(())
}

/// Tests title lookups are exact.
///
/// Expected: true for the stored title, false for a different one
#[tokio::test]
async fn title_exists_matches_exact_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    factory::listing::ListingFactory::new(db, host.id)
        .title("Kyoto")
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    assert!(repo.title_exists("Kyoto").await?);
    assert!(!repo.title_exists("Osaka").await?);

    Ok(())
}

/// Tests a capacity count that does not fit its column is refused before insert.
///
/// Expected: Err(DbErr::Custom), no listing and no link stored
#[tokio::test]
async fn refuses_count_outside_column_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;

    let result = ListingRepository::new(db)
        .create(CreateListingParams {
            creator: host.id,
            img: "uploads/images/b.png".to_string(),
            title: "Lofoten".to_string(),
            location: "Norway".to_string(),
            listing_type: "Cabin".to_string(),
            info: ListingInfo {
                guests: 3_000_000_000,
                bedrooms: 1,
                bathrooms: 1,
            },
            price_per_night: "$140".to_string(),
            rating: "4.7".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(entity::prelude::Listing::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserListing::find().count(db).await?, 0);

    Ok(())
}
