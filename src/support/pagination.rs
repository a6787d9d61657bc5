//! Page-based pagination primitives
//!
//! [`QueryStringParameters`] holds the requested page, [`PagedList`] one page
//! of results together with its position in the full collection, and
//! [`PaginationMetadata`] the out-of-band description of that position sent
//! to clients in the `X-Pagination` header.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u32 = 50;
/// Page size used when none (or an illegal one) is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Requested page number and size.
///
/// Both fields always hold a legal value: the setters clamp a page number
/// below 1 to 1 and reset an out-of-range page size to
/// [`DEFAULT_PAGE_SIZE`]. Callers that must reject bad input instead of
/// correcting it use [`QueryStringParameters::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryStringParameters {
    page_number: u32,
    page_size: u32,
}

impl QueryStringParameters {
    /// Build from raw input, clamping illegal values.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        let mut params = Self::default();
        params.set_page_number(page_number);
        params.set_page_size(page_size);
        params
    }

    /// Build from raw input, failing with a user-facing message if either
    /// value is out of range.
    pub fn try_new(page_number: i64, page_size: i64) -> Result<Self, DomainError> {
        check(page_number, page_size).map_err(DomainError::Validation)?;
        Ok(Self::new(page_number, page_size))
    }

    pub fn set_page_number(&mut self, value: i64) {
        self.page_number = if value < 1 {
            DEFAULT_PAGE_NUMBER
        } else {
            u32::try_from(value).unwrap_or(u32::MAX)
        };
    }

    pub fn set_page_size(&mut self, value: i64) {
        self.page_size = if value < 1 || value > i64::from(MAX_PAGE_SIZE) {
            DEFAULT_PAGE_SIZE
        } else {
            value as u32
        };
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items preceding the requested page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }

    /// Re-check the stored values.
    pub fn is_valid(&self) -> Result<(), String> {
        check(i64::from(self.page_number), i64::from(self.page_size))
    }
}

impl Default for QueryStringParameters {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn check(page_number: i64, page_size: i64) -> Result<(), String> {
    if page_number < 1 {
        return Err("PageNumber must be greater than 0.".to_string());
    }
    if page_size < 1 || page_size > i64::from(MAX_PAGE_SIZE) {
        return Err(format!("PageSize must be between 1 and {}.", MAX_PAGE_SIZE));
    }
    Ok(())
}

/// One page of a larger ordered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    current_page: u32,
    page_size: u32,
    total_count: u64,
    total_pages: u32,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            u32::try_from(total_count.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
        };
        Self {
            items,
            current_page: page_number,
            page_size,
            total_count,
            total_pages,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn metadata(&self) -> PaginationMetadata {
        PaginationMetadata {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    /// Convert the items, keeping the page position.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }

    pub fn into_parts(self) -> (Vec<T>, PaginationMetadata) {
        let metadata = self.metadata();
        (self.items, metadata)
    }
}

/// Position of a page within the full collection.
///
/// Serialized as JSON with camelCase field names; these names are part of
/// the public API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationMetadata {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_below_one_clamps_to_one() {
        for raw in [-100, -1, 0] {
            assert_eq!(QueryStringParameters::new(raw, 5).page_number(), 1);
        }
        assert_eq!(QueryStringParameters::new(7, 5).page_number(), 7);
    }

    #[test]
    fn out_of_range_page_size_resets_to_default() {
        for raw in [-3, 0, 51, 1000] {
            assert_eq!(
                QueryStringParameters::new(1, raw).page_size(),
                DEFAULT_PAGE_SIZE
            );
        }
        assert_eq!(QueryStringParameters::new(1, 1).page_size(), 1);
        assert_eq!(QueryStringParameters::new(1, 50).page_size(), 50);
    }

    #[test]
    fn clamped_values_are_always_valid() {
        for number in [-5, 0, 1, 3] {
            for size in [-5, 0, 1, 25, 50, 51] {
                assert!(QueryStringParameters::new(number, size).is_valid().is_ok());
            }
        }
    }

    #[test]
    fn default_is_first_page_of_ten() {
        let params = QueryStringParameters::default();
        assert_eq!(params.page_number(), 1);
        assert_eq!(params.page_size(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn try_new_rejects_bad_page_number() {
        let err = QueryStringParameters::try_new(0, 10).unwrap_err();
        assert_eq!(err.to_string(), "PageNumber must be greater than 0.");
    }

    #[test]
    fn try_new_rejects_bad_page_size() {
        for size in [0, 51] {
            let err = QueryStringParameters::try_new(1, size).unwrap_err();
            assert_eq!(err.to_string(), "PageSize must be between 1 and 50.");
        }
    }

    #[test]
    fn try_new_accepts_legal_input() {
        let params = QueryStringParameters::try_new(3, 20).unwrap();
        assert_eq!(params.page_number(), 3);
        assert_eq!(params.page_size(), 20);
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn setters_clamp_after_construction() {
        let mut params = QueryStringParameters::try_new(2, 5).unwrap();
        params.set_page_number(-1);
        params.set_page_size(99);
        assert_eq!(params, QueryStringParameters::default());
    }

    #[test]
    fn totals_follow_count_and_size() {
        for total in [0u64, 1, 4, 5, 6, 20, 21] {
            for size in [1u32, 5, 10] {
                for page in [1u32, 2, 4, 5] {
                    let list: PagedList<()> = PagedList::new(vec![], total, page, size);
                    let expected = ((total as f64) / (size as f64)).ceil() as u32;
                    assert_eq!(list.total_pages(), expected);
                    assert_eq!(list.has_next(), page < expected);
                    assert_eq!(list.has_previous(), page > 1);
                }
            }
        }
    }

    #[test]
    fn first_page_of_twenty() {
        let list = PagedList::new((0..5).collect::<Vec<_>>(), 20, 1, 5);
        let meta = list.metadata();
        assert_eq!(list.items().len(), 5);
        assert_eq!(meta.total_count, 20);
        assert_eq!(meta.total_pages, 4);
        assert!(meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn map_keeps_position() {
        let list = PagedList::new(vec![1, 2], 12, 2, 2).map(|n| n * 10);
        assert_eq!(list.items(), &[10, 20]);
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.page_size(), 2);
        assert_eq!(list.total_count(), 12);
        assert_eq!(list.total_pages(), 6);
    }

    #[test]
    fn metadata_encodes_camel_case() {
        let (_, meta) = PagedList::new(vec!["a"], 20, 1, 5).into_parts();
        let json: serde_json::Value = serde_json::from_str(&meta.encode().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalCount": 20,
                "pageSize": 5,
                "currentPage": 1,
                "totalPages": 4,
                "hasNext": true,
                "hasPrevious": false
            })
        );
    }
}
