use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::listing::ListingRepository,
    error::{auth::AuthError, AppError},
    model::listing::{CreateListingParams, Listing},
};

const LISTING_NOT_FOUND: &str = "Could not find a listing for the provided id.";
const LISTING_BOOKED: &str = "Cannot delete listing with active bookings.";

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Listing>, AppError> {
        let listings = ListingRepository::new(self.db).get_all().await?;

        listings.into_iter().map(Listing::from_entity).collect()
    }

    /// Searches listings by title or location.
    ///
    /// A missing or blank query returns every listing.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Listing>, AppError> {
        let repo = ListingRepository::new(self.db);

        let listings = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => repo.search(query).await?,
            None => repo.get_all().await?,
        };

        listings.into_iter().map(Listing::from_entity).collect()
    }

    /// Gets a listing by ID.
    ///
    /// # Returns
    /// - `Ok(Listing)` - The listing
    /// - `Err(AppError::NotFound)` - No listing with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Listing, AppError> {
        let listing = ListingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(LISTING_NOT_FOUND.to_string()))?;

        Listing::from_entity(listing)
    }

    /// Gets a user's listing set, oldest first.
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<Listing>, AppError> {
        let listings = ListingRepository::new(self.db)
            .get_by_owner(user_id)
            .await?;

        listings.into_iter().map(Listing::from_entity).collect()
    }

    /// Creates a listing and links it to its creator.
    ///
    /// The creator must already have been checked to be a host.
    ///
    /// # Returns
    /// - `Ok(Listing)` - The created listing
    /// - `Err(AppError::Conflict)` - A listing with the same title exists
    pub async fn create(&self, params: CreateListingParams) -> Result<Listing, AppError> {
        let repo = ListingRepository::new(self.db);

        if repo.title_exists(&params.title).await? {
            return Err(AppError::Conflict(
                "Listing with same name already exists.".to_string(),
            ));
        }

        let listing = repo.create(params).await?;

        tracing::info!("User {} created listing {}", listing.creator, listing.id);

        Listing::from_entity(listing)
    }

    /// Deletes a listing on behalf of its creator.
    ///
    /// # Returns
    /// - `Ok(())` - Listing and owner link removed
    /// - `Err(AppError::NotFound)` - No listing with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller did not create the listing
    /// - `Err(AppError::Conflict)` - The listing has bookings
    pub async fn delete(&self, caller_id: i32, id: i32) -> Result<(), AppError> {
        let listing = self.get_by_id(id).await?;

        if listing.creator != caller_id {
            return Err(AuthError::AccessDenied(
                caller_id,
                "You are not authorized to delete this listing.".to_string(),
            )
            .into());
        }

        self.remove(listing).await
    }

    /// Deletes any listing. The caller must already have been checked to be the admin.
    ///
    /// The link removed is the one in the creator's listing set. The booked-listing
    /// guard applies here too.
    pub async fn delete_as_admin(&self, id: i32) -> Result<(), AppError> {
        let listing = self.get_by_id(id).await?;

        self.remove(listing).await
    }

    async fn remove(&self, listing: Listing) -> Result<(), AppError> {
        let repo = ListingRepository::new(self.db);

        if repo.booking_count(listing.id).await? > 0 {
            return Err(AppError::Conflict(LISTING_BOOKED.to_string()));
        }

        let deleted = repo
            .delete(listing.id, listing.creator)
            .await
            .map_err(delete_error)?;

        if !deleted {
            return Err(AppError::NotFound(LISTING_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted listing {} of user {}", listing.id, listing.creator);

        Ok(())
    }
}

/// Maps a failed listing delete.
///
/// A booking made after the booking count was read makes the delete violate the
/// booking's listing foreign key; that is reported like any other booked listing.
pub(crate) fn delete_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Listing delete blocked by a booking: {}", detail);
            AppError::Conflict(LISTING_BOOKED.to_string())
        }
        _ => err.into(),
    }
}
