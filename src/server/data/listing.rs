use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{data::linked::LinkedWrite, model::listing::CreateListingParams};

pub struct ListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every listing in creation order.
    pub async fn get_all(&self) -> Result<Vec<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .order_by_asc(entity::listing::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets listings whose title or location contains `query`, ignoring case.
    ///
    /// Matching is done on lowercased text in Rust so the result does not depend on the
    /// database collation.
    pub async fn search(&self, query: &str) -> Result<Vec<entity::listing::Model>, DbErr> {
        let needle = query.to_lowercase();

        let listings = self
            .get_all()
            .await?
            .into_iter()
            .filter(|listing| {
                listing.title.to_lowercase().contains(&needle)
                    || listing.location.to_lowercase().contains(&needle)
            })
            .collect();

        Ok(listings)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find_by_id(id).one(self.db).await
    }

    /// Gets the listings in a user's listing set, in the order they were added.
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<entity::listing::Model>, DbErr> {
        let linked = entity::prelude::UserListing::find()
            .filter(entity::user_listing::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_listing::Column::Id)
            .find_also_related(entity::prelude::Listing)
            .all(self.db)
            .await?;

        Ok(linked
            .into_iter()
            .filter_map(|(_, listing)| listing)
            .collect())
    }

    pub async fn title_exists(&self, title: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Listing::find()
            .filter(entity::listing::Column::Title.eq(title))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the bookings that reference a listing.
    pub async fn booking_count(&self, listing_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ListingId.eq(listing_id))
            .count(self.db)
            .await
    }

    /// Creates a listing and appends it to its creator's listing set in one transaction.
    pub async fn create(
        &self,
        params: CreateListingParams,
    ) -> Result<entity::listing::Model, DbErr> {
        let creator = params.creator;

        LinkedWrite::new(self.db)
            .create(listing_active_model(params)?, |listing| {
                Ok(entity::user_listing::ActiveModel {
                    user_id: ActiveValue::Set(creator),
                    listing_id: ActiveValue::Set(listing.id),
                    ..Default::default()
                })
            })
            .await
    }

    /// Removes a listing from `owner_id`'s listing set and deletes it in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The listing was deleted
    /// - `Ok(false)` - No listing with that ID existed
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let deleted = LinkedWrite::new(self.db)
            .delete(
                entity::prelude::UserListing::delete_many()
                    .filter(entity::user_listing::Column::UserId.eq(owner_id))
                    .filter(entity::user_listing::Column::ListingId.eq(id)),
                entity::prelude::Listing::delete_many()
                    .filter(entity::listing::Column::Id.eq(id)),
            )
            .await?;

        Ok(deleted > 0)
    }
}

/// Builds the active model inserted for a new listing.
///
/// # Returns
/// - `Ok(ActiveModel)` - The model to insert
/// - `Err(DbErr::Custom)` - A capacity count does not fit its column
pub(crate) fn listing_active_model(
    params: CreateListingParams,
) -> Result<entity::listing::ActiveModel, DbErr> {
    let column = |field: &str, value: u32| {
        i32::try_from(value).map_err(|_| {
            DbErr::Custom(format!("Listing {} count {} does not fit its column", field, value))
        })
    };

    Ok(entity::listing::ActiveModel {
        img: ActiveValue::Set(params.img),
        title: ActiveValue::Set(params.title),
        location: ActiveValue::Set(params.location),
        listing_type: ActiveValue::Set(params.listing_type),
        guests: ActiveValue::Set(column("guests", params.info.guests)?),
        bedrooms: ActiveValue::Set(column("bedrooms", params.info.bedrooms)?),
        bathrooms: ActiveValue::Set(column("bathrooms", params.info.bathrooms)?),
        price_per_night: ActiveValue::Set(params.price_per_night),
        rating: ActiveValue::Set(params.rating),
        creator: ActiveValue::Set(params.creator),
        ..Default::default()
    })
}
