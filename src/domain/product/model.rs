//! Product domain entity

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const PICTURE_URI_MAX_LEN: usize = 200;

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Non-negative, two fractional digits
    pub price: Decimal,
    pub picture_uri: String,
}

impl Product {
    /// Check a new description against the catalog rules.
    pub fn validate_description(description: &str) -> DomainResult<()> {
        if description.trim().is_empty() {
            return Err(DomainError::Validation("Description is required".into()));
        }
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "Description must be at most {} characters.",
                DESCRIPTION_MAX_LEN
            )));
        }
        Ok(())
    }

    /// Replace the description. Every other field is left untouched.
    pub fn change_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        Self::validate_description(&description)?;
        self.description = description;
        Ok(())
    }
}

/// Convert a price stored in minor units (cents) into a decimal.
pub fn price_from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}
