//! Product entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product model - one row of the catalog
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Product name (max 100 chars)
    pub name: String,

    /// Free-text description (max 500 chars)
    pub description: String,

    /// Price in minor currency units (e.g. 299900 = 2999.00)
    pub price_cents: i64,

    /// Absolute or base-path-relative picture location (max 200 chars)
    pub picture_uri: String,

    /// Insertion time, used for stable listing order
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
