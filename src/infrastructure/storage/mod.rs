//! Storage implementations that live outside the database

pub mod memory;

pub use memory::InMemoryProductRepository;
