//! Generic page of domain models.

use crate::model::pagination::PageDto;

/// A page of domain models with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items for this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl<T> Page<T> {
    /// Total number of pages, zero when there are no items.
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// Converts the page to a DTO, mapping each item with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let total_pages = self.total_pages();

        PageDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of items to return per page.
    pub per_page: u64,
}
