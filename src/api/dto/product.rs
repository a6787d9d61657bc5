//! Product request DTOs

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::support::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// New description for a product
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDescriptionRequest {
    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters."))]
    #[schema(example = "Latest model with 8GB RAM and 256GB storage.")]
    pub description: String,
}

/// Raw paging query. Values are checked, not corrected, before use.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page_number")]
    #[param(default = 1, minimum = 1)]
    pub page_number: i64,
    /// Items per page (1–50)
    #[serde(default = "default_page_size")]
    #[param(default = 10, minimum = 1, maximum = 50)]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    i64::from(DEFAULT_PAGE_NUMBER)
}

fn default_page_size() -> i64 {
    i64::from(DEFAULT_PAGE_SIZE)
}
