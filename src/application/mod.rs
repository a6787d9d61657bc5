//! Application layer
//!
//! Use cases over the product catalog and the transfer objects they return.

pub mod dto;
pub mod services;

pub use dto::ProductDto;
pub use services::ProductService;
