use serde::{Deserialize, Serialize};

/// Uniform response envelope used by every endpoint, success or failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Builds a success envelope carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Builds a failure envelope with `data: null`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Builds a success envelope with no payload (delete endpoints).
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Pagination envelope for list endpoints. Pages are 1-based.
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Assembles a page from fetched items and the total row count.
    ///
    /// An empty result set reports `total_pages: 1`, not `0`; clients
    /// render "page 1 of 1" for empty listings and rely on it.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items > 0 {
            (total_items + page_size - 1) / page_size
        } else {
            1
        };

        Self {
            has_next: page < total_pages,
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

pub(crate) fn default_page() -> u64 {
    1
}

pub(crate) fn default_page_size() -> u64 {
    20
}

pub(crate) fn default_true() -> bool {
    true
}
