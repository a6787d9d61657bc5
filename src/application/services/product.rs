//! Product service
//!
//! Read operations over the catalog, the paged listing, and the single
//! mutating operation (description update).

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::application::dto::ProductDto;
use crate::domain::{DomainError, DomainResult, Product, ProductRepository};
use crate::support::{PagedList, QueryStringParameters};

pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` when no product has this id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<ProductDto>> {
        Ok(self.repository.find_by_id(id).await?.map(ProductDto::from))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> DomainResult<Vec<ProductDto>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Fetch one page. A page past the end is empty, not an error.
    #[instrument(skip(self), fields(page = params.page_number(), size = params.page_size()))]
    pub async fn get_paginated(
        &self,
        params: QueryStringParameters,
    ) -> DomainResult<PagedList<ProductDto>> {
        let (products, total) = self
            .repository
            .find_page(params.offset(), u64::from(params.page_size()))
            .await?;

        Ok(PagedList::new(products, total, params.page_number(), params.page_size())
            .map(ProductDto::from))
    }

    #[instrument(skip(self, description))]
    pub async fn update_description(&self, id: Uuid, description: &str) -> DomainResult<ProductDto> {
        Product::validate_description(description)?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", "id", id))?;

        product.change_description(description)?;
        self.repository.update_description(&product).await?;

        info!("Product {} description changed", id);
        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::product::price_from_minor_units;
    use crate::infrastructure::InMemoryProductRepository;

    fn catalog(count: u32) -> Vec<Product> {
        (1..=count)
            .map(|n| Product {
                id: Uuid::new_v4(),
                name: format!("Product {}", n),
                description: format!("Description {}", n),
                price: price_from_minor_units(i64::from(n) * 1_000),
                picture_uri: format!("/img/{}.png", n),
            })
            .collect()
    }

    fn service_with(products: Vec<Product>) -> (ProductService, Arc<InMemoryProductRepository>) {
        let repo = Arc::new(InMemoryProductRepository::with_products(products));
        (ProductService::new(repo.clone()), repo)
    }

    struct BrokenRepository;

    #[async_trait]
    impl ProductRepository for BrokenRepository {
        async fn find_all(&self) -> DomainResult<Vec<Product>> {
            Err(DomainError::Unexpected("connection refused".into()))
        }
        async fn find_by_id(&self, _id: Uuid) -> DomainResult<Option<Product>> {
            Err(DomainError::Unexpected("connection refused".into()))
        }
        async fn find_page(&self, _offset: u64, _limit: u64) -> DomainResult<(Vec<Product>, u64)> {
            Err(DomainError::Unexpected("connection refused".into()))
        }
        async fn update_description(&self, _product: &Product) -> DomainResult<()> {
            Err(DomainError::Unexpected("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn first_page_of_twenty() {
        let (service, _) = service_with(catalog(20));
        let params = QueryStringParameters::try_new(1, 5).unwrap();

        let page = service.get_paginated(params).await.unwrap();

        assert_eq!(page.items().len(), 5);
        assert_eq!(page.items()[0].name, "Product 1");
        assert_eq!(page.total_count(), 20);
        assert_eq!(page.total_pages(), 4);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[tokio::test]
    async fn last_page_has_no_next() {
        let (service, _) = service_with(catalog(20));
        let page = service
            .get_paginated(QueryStringParameters::try_new(4, 5).unwrap())
            .await
            .unwrap();

        assert_eq!(page.items().len(), 5);
        assert_eq!(page.items()[4].name, "Product 20");
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let (service, _) = service_with(catalog(20));
        let page = service
            .get_paginated(QueryStringParameters::try_new(5, 5).unwrap())
            .await
            .unwrap();

        assert!(page.items().is_empty());
        assert_eq!(page.total_count(), 20);
        assert_eq!(page.total_pages(), 4);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn list_all_is_stable() {
        let (service, _) = service_with(catalog(6));
        let first = service.list_all().await.unwrap();
        let second = service.list_all().await.unwrap();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_none() {
        let (service, _) = service_with(catalog(3));
        assert!(service.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_description_changes_only_description() {
        let products = catalog(3);
        let target = products[1].clone();
        let (service, _) = service_with(products);

        let updated = service
            .update_description(target.id, "Brand new text")
            .await
            .unwrap();

        assert_eq!(updated.description, "Brand new text");
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.name, target.name);
        assert_eq!(updated.price, target.price);
        assert_eq!(updated.picture_uri, target.picture_uri);

        let reloaded = service.get_by_id(target.id).await.unwrap().unwrap();
        assert_eq!(reloaded, updated);
    }

    #[tokio::test]
    async fn update_description_of_unknown_product_is_not_found() {
        let products = catalog(3);
        let (service, repo) = service_with(products.clone());

        let err = service
            .update_description(Uuid::new_v4(), "Anything")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Product not found");
        assert_eq!(repo.find_all().await.unwrap(), products);
    }

    #[tokio::test]
    async fn empty_description_is_rejected() {
        let products = catalog(2);
        let target = products[0].id;
        let (service, repo) = service_with(products.clone());

        for blank in ["", "   "] {
            let err = service.update_description(target, blank).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert_eq!(repo.find_all().await.unwrap(), products);
    }

    #[tokio::test]
    async fn storage_failures_surface_as_unexpected() {
        let service = ProductService::new(Arc::new(BrokenRepository));
        assert!(matches!(
            service.list_all().await,
            Err(DomainError::Unexpected(_))
        ));
        assert!(matches!(
            service.get_paginated(QueryStringParameters::default()).await,
            Err(DomainError::Unexpected(_))
        ));
    }
}
