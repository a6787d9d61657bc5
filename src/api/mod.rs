//! REST API module for the product catalog
//!
//! Versioned HTTP endpoints (`/api/v1`, `/api/v2`) over
//! [`ProductService`](crate::application::ProductService), with Swagger UI
//! at `/docs`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod validated_json;

pub use error::ApiError;
pub use router::{create_api_router, ApiDoc};
