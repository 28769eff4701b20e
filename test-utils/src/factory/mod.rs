//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and `create_*` convenience functions for quick default creation. Listing and
//! booking factories also insert the owner link row so the created data matches
//! what the server writes.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let host = factory::user::create_host(db).await?;
//! let guest = factory::user::create_guest(db).await?;
//! let listing = factory::listing::create_listing(db, host.id).await?;
//! let booking = factory::booking::create_booking(db, listing.id, guest.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let listing = factory::listing::ListingFactory::new(db, host.id)
//!     .title("Harbour Loft")
//!     .location("Lisbon")
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod listing;
pub mod user;

pub use booking::create_booking;
pub use listing::create_listing;
pub use user::{create_guest, create_host};
