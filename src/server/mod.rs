//! HTTP backend for rental listings and bookings.
//!
//! The server uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Repositories and the transactional linked write
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication and permission guards
//! - **Extract** (`extract`) - `Json` and `Path` extractors that reject with `AppError`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, config, image storage, tokens)
//! - **Startup** (`startup`) - Tracing, database and image storage initialization
//! - **Router** (`router`) - Route table, auth layer and static uploads
//! - **Doc** (`doc`) - OpenAPI document served through Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; protected routes pass through `require_auth`
//! 2. **Controller** checks permissions with `AuthGuard`, converts DTOs to params
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database, returning entity models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
