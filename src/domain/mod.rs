pub mod product;

// Re-export commonly used types
pub use product::{Product, ProductRepository};

// Re-export DomainError from support for convenience
pub use crate::support::errors::{DomainError, DomainResult};
