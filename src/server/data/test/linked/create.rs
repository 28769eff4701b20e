use super::*;

/// Tests that a successful linked create commits both rows.
///
/// Verifies that the entity and the link built from its generated ID are both
/// visible after the call returns.
///
/// Expected: Ok with one listing and one link pointing at it
#[tokio::test]
async fn commits_entity_and_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;

    let listing = LinkedWrite::new(db)
        .create(listing_active_model(listing_params(host.id, "Cabin"))?, |listing| {
            Ok(entity::user_listing::ActiveModel {
                user_id: ActiveValue::Set(host.id),
                listing_id: ActiveValue::Set(listing.id),
                ..Default::default()
            })
        })
        .await?;

    let links = entity::prelude::UserListing::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].listing_id, listing.id);
    assert_eq!(links[0].user_id, host.id);

    Ok(())
}

/// Tests that a failure between the two writes leaves neither applied.
///
/// Verifies that when the link builder fails after the entity insert, the
/// transaction is rolled back and the entity row is gone.
///
/// Expected: Err(DbErr::Custom), no listing and no link stored
#[tokio::test]
async fn rolls_back_entity_when_link_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;

    let result = LinkedWrite::new(db)
        .create(
            listing_active_model(listing_params(host.id, "Cabin"))?,
            |_| -> Result<entity::user_listing::ActiveModel, DbErr> {
                Err(DbErr::Custom("injected failure".to_string()))
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::Custom(msg)) if msg == "injected failure"));
    assert_eq!(entity::prelude::Listing::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserListing::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failed link insert rolls back the entity insert.
///
/// Verifies that when the link row violates the unique listing constraint, the
/// freshly inserted entity is not kept either.
///
/// Expected: Err, only the pre-existing listing and link remain
#[tokio::test]
async fn rolls_back_entity_when_link_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_host(db).await?;
    let existing = factory::listing::create_listing(db, host.id).await?;

    // Link the new listing to the existing listing's ID, which is already linked
    let result = LinkedWrite::new(db)
        .create(listing_active_model(listing_params(host.id, "Cabin"))?, |_| {
            Ok(entity::user_listing::ActiveModel {
                user_id: ActiveValue::Set(host.id),
                listing_id: ActiveValue::Set(existing.id),
                ..Default::default()
            })
        })
        .await;

    assert!(result.is_err());
    let listings = entity::prelude::Listing::find().all(db).await?;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, existing.id);
    assert_eq!(entity::prelude::UserListing::find().count(db).await?, 1);

    Ok(())
}
