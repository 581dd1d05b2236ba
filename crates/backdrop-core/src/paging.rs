//! Pagination over in-memory collections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 1-based page selection for a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1
    pub page: u32,
    /// Number of items per page
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PageRequest {
    /// Create a page request, clamping zero values up to the 1-based grid.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Derive a page request from parsed query parameters.
    ///
    /// Reads `page` (with `pageNumber` as a fallback alias) and
    /// `pageSize`. Absent or unparsable values fall back to the first
    /// page of ten.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let page = query
            .get("page")
            .or_else(|| query.get("pageNumber"))
            .and_then(|value| value.parse().ok())
            .unwrap_or(1);
        let page_size = query
            .get("pageSize")
            .and_then(|value| value.parse().ok())
            .unwrap_or(10);
        Self::new(page, page_size)
    }
}

/// One page of a collection plus its pagination metadata.
///
/// Serializes with camelCase keys, matching the wire form a JSON API
/// would produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    /// Items on the requested page
    pub items: Vec<T>,
    /// Requested page number
    pub page: u32,
    /// Requested page size
    pub page_size: u32,
    /// Size of the full collection
    pub total: usize,
    /// Number of pages the collection spans
    pub total_pages: u32,
    /// Whether a page precedes this one
    pub has_previous_page: bool,
    /// Whether a page follows this one
    pub has_next_page: bool,
}

/// Slice `items` down to the requested page.
///
/// An out-of-range page yields an empty `items` list rather than an
/// error. The previous/next flags are purely arithmetic: `page > 1`
/// claims a previous page even when the page itself is past the end.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> PageEnvelope<T> {
    let page = request.page.max(1);
    let page_size = request.page_size.max(1);
    let total = items.len();
    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let page_items: Vec<T> = items
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();
    let total_pages = total.div_ceil(page_size as usize) as u32;

    PageEnvelope {
        items: page_items,
        page,
        page_size,
        total,
        total_pages,
        has_previous_page: page > 1,
        has_next_page: page < total_pages,
    }
}
