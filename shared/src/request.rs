//! Request types for the shared crate

/// Pagination query parameters
///
/// The backend pages are zero-based with a default size of 10.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct PageQuery {
    /// Page index (0-based, default: 0)
    #[serde(default)]
    pub page: u32,

    /// Items per page (default: 10)
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 0, size: default_size() }
    }
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}
