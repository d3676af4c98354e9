//! Pagination parameters bounded by the configured page sizes.

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Query parameters as sent by clients (`?page=2&page_size=50`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// A resolved page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub page: u32,
    pub size: u32,
    pub offset: u64,
}

impl PageParams {
    /// Apply `DEFAULT_PAGE_SIZE` and `MAX_PAGE_SIZE`.
    ///
    /// A missing or zero size falls back to the default; sizes are capped at
    /// the maximum, which also caps a default configured above it.
    pub fn resolve(&self, settings: &Settings) -> Page {
        let max = settings.max_page_size.max(1);
        let size = match self.page_size {
            None | Some(0) => settings.default_page_size,
            Some(n) => n,
        }
        .clamp(1, max);
        let page = self.page.unwrap_or(1).max(1);

        Page {
            page,
            size,
            offset: u64::from(page - 1) * u64::from(size),
        }
    }
}
