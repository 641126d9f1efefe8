//! Offset pagination primitives.

use serde::Serialize;

/// A normalized page request: zero-based page index and a positive size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Build a request from raw caller input.
    ///
    /// A missing or negative page becomes 0. A missing or non-positive size
    /// becomes `default_size`; sizes above `max_size` are clamped.
    pub fn normalized(
        page: Option<i64>,
        size: Option<i64>,
        default_size: usize,
        max_size: usize,
    ) -> Self {
        let page = page
            .and_then(|p| usize::try_from(p).ok())
            .unwrap_or(0);

        let size = size
            .and_then(|s| usize::try_from(s).ok())
            .filter(|s| *s > 0)
            .unwrap_or(default_size)
            .clamp(1, max_size.max(1));

        Self { page, size }
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of elements per page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of elements preceding this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

/// One page of results plus the metadata needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
}

impl<T> Page<T> {
    /// Wrap `content` fetched for `request` out of `total_elements` rows.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = request.size() as u64;
        let total_pages = total_elements.div_ceil(size);
        let last = (request.page() as u64).saturating_add(1) >= total_pages;

        Self {
            content,
            page_number: request.page(),
            page_size: request.size(),
            total_elements,
            total_pages,
            last,
        }
    }

    /// Convert the content while keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}
