pub mod product;

pub use product::ProductDto;
