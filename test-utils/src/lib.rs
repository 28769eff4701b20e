//! Stayhub Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the stayhub
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for users, listings
//! and bookings.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn creates_listing() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_rental_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let host = factory::user::create_host(db).await?;
//!     let listing = factory::listing::create_listing(db, host.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
