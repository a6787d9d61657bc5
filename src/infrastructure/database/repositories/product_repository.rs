//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use tracing::info;
use uuid::Uuid;

use crate::domain::product::price_from_minor_units;
use crate::domain::{DomainError, DomainResult, Product, ProductRepository};
use crate::infrastructure::database::entities::product;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(p: product::Model) -> Product {
    Product {
        id: p.id,
        name: p.name,
        description: p.description,
        price: price_from_minor_units(p.price_cents),
        picture_uri: p.picture_uri,
    }
}

fn ordered() -> Select<product::Entity> {
    product::Entity::find()
        .order_by_asc(product::Column::CreatedAt)
        .order_by_asc(product::Column::Id)
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let models = ordered().all(&self.db).await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<Product>, u64)> {
        let total = product::Entity::find().count(&self.db).await?;
        if offset >= total {
            return Ok((Vec::new(), total));
        }

        let models = ordered()
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(entity_to_domain).collect(), total))
    }

    async fn update_description(&self, p: &Product) -> DomainResult<()> {
        let result = product::Entity::update_many()
            .col_expr(
                product::Column::Description,
                Expr::value(p.description.clone()),
            )
            .filter(product::Column::Id.eq(p.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Product", "id", p.id));
        }

        info!("Product {} description updated", p.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{ActiveValue::Set, ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::migrator::Migrator;

    async fn setup(count: i64) -> (DatabaseConnection, Vec<Uuid>) {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let base = Utc::now();
        let mut ids = Vec::new();
        let rows: Vec<product::ActiveModel> = (0..count)
            .map(|i| {
                let id = Uuid::new_v4();
                ids.push(id);
                product::ActiveModel {
                    id: Set(id),
                    name: Set(format!("Product {}", i + 1)),
                    description: Set(format!("Description {}", i + 1)),
                    price_cents: Set(1000 + i * 100),
                    picture_uri: Set(format!("/img/{}.png", i + 1)),
                    created_at: Set(base + Duration::milliseconds(i)),
                }
            })
            .collect();
        if !rows.is_empty() {
            product::Entity::insert_many(rows).exec(&db).await.unwrap();
        }
        (db, ids)
    }

    #[tokio::test]
    async fn find_all_returns_creation_order() {
        let (db, ids) = setup(4).await;
        let repo = SeaOrmProductRepository::new(db);

        let first = repo.find_all().await.unwrap();
        let second = repo.find_all().await.unwrap();

        let found: Vec<Uuid> = first.iter().map(|p| p.id).collect();
        assert_eq!(found, ids);
        assert_eq!(first, second);
        assert_eq!(first[0].price.to_string(), "10.00");
    }

    #[tokio::test]
    async fn find_page_slices_and_counts() {
        let (db, ids) = setup(20).await;
        let repo = SeaOrmProductRepository::new(db);

        let (items, total) = repo.find_page(5, 5).await.unwrap();
        assert_eq!(total, 20);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].id, ids[5]);
        assert_eq!(items[4].id, ids[9]);
    }

    #[tokio::test]
    async fn find_page_past_end_is_empty() {
        let (db, _) = setup(20).await;
        let repo = SeaOrmProductRepository::new(db);

        let (items, total) = repo.find_page(20, 5).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 20);
    }

    #[tokio::test]
    async fn find_by_id_missing_is_none() {
        let (db, _) = setup(1).await;
        let repo = SeaOrmProductRepository::new(db);
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_description_persists_only_description() {
        let (db, ids) = setup(2).await;
        let repo = SeaOrmProductRepository::new(db);

        let mut product = repo.find_by_id(ids[1]).await.unwrap().unwrap();
        let before = product.clone();
        product.description = "Refreshed".into();
        repo.update_description(&product).await.unwrap();

        let stored = repo.find_by_id(ids[1]).await.unwrap().unwrap();
        assert_eq!(stored.description, "Refreshed");
        assert_eq!(stored.name, before.name);
        assert_eq!(stored.price, before.price);
        assert_eq!(stored.picture_uri, before.picture_uri);
    }

    #[tokio::test]
    async fn update_description_of_missing_product_is_not_found() {
        let (db, _) = setup(1).await;
        let repo = SeaOrmProductRepository::new(db);

        let ghost = Product {
            id: Uuid::new_v4(),
            name: "Ghost".into(),
            description: "Boo".into(),
            price: price_from_minor_units(100),
            picture_uri: "/img/ghost.png".into(),
        };
        let err = repo.update_description(&ghost).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
