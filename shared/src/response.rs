//! API response types
//!
//! Paged response envelope returned by the problem listing endpoint.

use serde::{Deserialize, Serialize};

use crate::models::Problem;

/// One page of problems
///
/// Ephemeral: reconstructed on every fetch, keyed by a zero-based page
/// index and a page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemPage {
    /// Problems on this page, newest first
    pub content: Vec<Problem>,
    /// Zero-based index of this page
    pub page_number: u32,
    /// Requested page size
    pub page_size: u32,
    /// Total matching problems across all pages
    pub total_elements: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Whether this is the final page
    pub is_last: bool,
}

impl ProblemPage {
    /// Number of problems on this page.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// True if this page carries no problems.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of pages needed for `total_elements` items at `page_size`
    /// items per page.
    pub fn page_count(total_elements: u64, page_size: u32) -> u32 {
        if page_size == 0 {
            0
        } else {
            ((total_elements as f64) / (page_size as f64)).ceil() as u32
        }
    }
}
