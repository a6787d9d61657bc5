//! # Eshop Product Catalog API
//!
//! Versioned REST service over a product catalog: listing, lookup by id,
//! description updates, and (from API v2) paged listing with an
//! `X-Pagination` response header.
//!
//! ## Architecture
//!
//! - **domain**: Product entity, its invariants and the repository trait
//! - **application**: Catalog use cases and transfer objects
//! - **infrastructure**: SeaORM persistence, migrations, seed data, in-memory store
//! - **api**: REST API with Swagger documentation
//! - **support**: Errors, pagination primitives, shutdown signal
//! - **config** / **server**: Configuration loading and process lifecycle

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryProductRepository, InitialData,
    SeaOrmProductRepository,
};

// Re-export API router
pub use api::create_api_router;
