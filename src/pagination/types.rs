//! Paginated response data

use serde::{Deserialize, Serialize};

/// One page of a paginated result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedData<T> {
    /// The page items
    pub items: Vec<T>,
    /// The total number of items across all pages
    pub total: u64,
    /// The number of items per page
    pub limit: u64,
    /// The current page number, starting at 1
    pub page: u64,
}

impl<T> PaginatedData<T> {
    /// Number of pages the full result spans
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

/// Whether a page number addresses items within the total.
///
/// The first page is 1; the last page is the one whose first item index is
/// still below the total.
pub(crate) fn page_in_bounds(page: u64, limit: u64, total: u64) -> bool {
    page >= 1 && limit > 0 && (page - 1).saturating_mul(limit) < total
}
