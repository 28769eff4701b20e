use super::*;

/// Tests a missing or blank query returns every listing.
///
/// Expected: all listings for `None`, `""` and `"   "`
#[tokio::test]
async fn blank_query_returns_all() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    factory::listing::create_listing(db, host.id).await?;
    factory::listing::create_listing(db, host.id).await?;

    let service = ListingService::new(db);
    assert_eq!(service.search(None).await?.len(), 2);
    assert_eq!(service.search(Some("")).await?.len(), 2);
    assert_eq!(service.search(Some("   ")).await?.len(), 2);

    Ok(())
}

/// Tests a query is trimmed before matching and unmatched queries return nothing.
///
/// Expected: one match for " paris ", empty vec for "Atlantis"
#[tokio::test]
async fn trims_query_and_returns_empty_on_no_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    factory::listing::ListingFactory::new(db, host.id)
        .title("Studio")
        .location("Paris, France")
        .build()
        .await?;

    let service = ListingService::new(db);
    assert_eq!(service.search(Some(" paris ")).await?.len(), 1);
    assert!(service.search(Some("Atlantis")).await?.is_empty());

    Ok(())
}
