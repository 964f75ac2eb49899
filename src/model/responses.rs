/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Envelope around every single-object response: `{"data": ..., "context": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataResponse<T> {
    /// The payload
    pub data: T,
    /// Request path echoed by the API
    #[serde(default)]
    pub context: Option<String>,
}

/// Item list inside a list response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemsData<T> {
    /// The listed records
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Envelope around list responses: `{"data": {"items": [...]}, "pagination": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemsResponse<T> {
    /// The listed records
    pub data: ItemsData<T>,
    /// Request path echoed by the API
    #[serde(default)]
    pub context: Option<String>,
    /// Paging state, only present on paginated endpoints
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> ItemsResponse<T> {
    /// Number of items in the response
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.items.len()
    }

    /// Returns true if the response holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.items.is_empty()
    }

    /// Returns an iterator over the items
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.items.iter()
    }
}

/// Paging state of a list response
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Pagination {
    pub per_page: i64,
    /// Zero-based index of the current page
    pub page_offset: i64,
    pub item_offset: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub current_item_count: i64,
    pub previous_link: Option<String>,
    pub next_link: Option<String>,
    pub paging_link_template: Option<String>,
}

impl Pagination {
    /// Whether pages remain after the current one
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_offset + 1 < self.total_pages
    }
}

/// Envelope of a failed request: `{"error": {...}}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorResponse {
    /// The error itself
    pub error: ApiError,
}

/// Error reported by the API
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ApiError {
    /// Machine readable code, e.g. "not_found"
    pub code: Option<String>,
    /// Human readable message
    pub message: String,
    /// Field level details, mostly for validation failures
    pub errors: Vec<ApiErrorDetail>,
}

/// One validation failure inside an [`ApiError`]
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub domain: Option<String>,
    pub code: Option<String>,
    pub reason: Option<String>,
    pub message: String,
}
