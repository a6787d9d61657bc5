//! Product repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Product;
use crate::domain::DomainResult;

/// Product persistence.
///
/// Every listing method returns products in the same stable order:
/// creation order, ties broken by id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Product>>;
    /// Skip `offset` products and take at most `limit`, returning the slice
    /// together with the size of the whole collection.
    async fn find_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<Product>, u64)>;
    /// Persist the description of an existing product.
    async fn update_description(&self, product: &Product) -> DomainResult<()>;
}
