use serde::Deserialize;

use crate::server::{
    error::validation::ValidationErrors,
    model::{page::PageParam, product::GetProductsParam},
};

const DEFAULT_ENTRIES: u64 = 10;
const MAX_ENTRIES: u64 = 100;
/// Largest row offset the database accepts.
const MAX_OFFSET: u64 = i64::MAX as u64;

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

/// Rejects pages whose row offset does not fit in the database's offset type.
fn check_page(page: u64, per_page: u64) -> Result<u64, ValidationErrors> {
    match page.checked_mul(per_page) {
        Some(offset) if offset <= MAX_OFFSET => Ok(page),
        _ => Err(ValidationErrors::single("page", "Page is out of range.")),
    }
}

/// `?page=&entries=` query parameters for list routes.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    /// Page size clamped to `1..=100`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }

    pub fn into_param(self) -> Result<PageParam, ValidationErrors> {
        let per_page = self.per_page();

        Ok(PageParam {
            page: check_page(self.page, per_page)?,
            per_page,
        })
    }
}

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub search: Option<String>,
}

impl ProductListParams {
    /// Converts to service parameters; a blank search term means no filter.
    pub fn into_param(self) -> Result<GetProductsParam, ValidationErrors> {
        let per_page = self.entries.clamp(1, MAX_ENTRIES);

        Ok(GetProductsParam {
            page: check_page(self.page, per_page)?,
            per_page,
            search: self
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}
