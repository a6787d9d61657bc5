//! Product aggregate
//!
//! Contains the Product entity, its field limits and the repository
//! interface.

pub mod model;
pub mod repository;

pub use model::{
    price_from_minor_units, Product, DESCRIPTION_MAX_LEN, NAME_MAX_LEN,
    PICTURE_URI_MAX_LEN,
};
pub use repository::ProductRepository;
