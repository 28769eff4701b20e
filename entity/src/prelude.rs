pub use super::booking::Entity as Booking;
pub use super::listing::Entity as Listing;
pub use super::user::Entity as User;
pub use super::user_booking::Entity as UserBooking;
pub use super::user_listing::Entity as UserListing;
