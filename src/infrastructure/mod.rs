//! Infrastructure layer
//!
//! Database access (SeaORM entities, migrations, repositories, seed data)
//! and the in-memory product store.

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, InitialData, SeaOrmProductRepository};
pub use storage::InMemoryProductRepository;
