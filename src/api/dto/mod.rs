//! Data Transfer Objects for REST API

pub mod common;
pub mod product;

pub use common::*;
pub use product::*;

pub use crate::application::dto::ProductDto;
