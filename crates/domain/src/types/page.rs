//! Pagination types
//!
//! The server wraps every list in a `PagedModel` envelope. Callers work with
//! [`Page`], which flattens the envelope and answers "is there more?".

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;

/// Wire envelope: `{ "content": [...], "page": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedModel<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    pub page: PageMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub number: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// One page of results. `page_index` is zero-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Whether a page after this one exists.
    pub fn has_more(&self) -> bool {
        self.page_index.saturating_add(1) < self.total_pages
    }

    pub fn is_last(&self) -> bool {
        !self.has_more()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

impl<T> From<PagedModel<T>> for Page<T> {
    fn from(model: PagedModel<T>) -> Self {
        Self {
            items: model.content,
            page_index: model.page.number,
            page_size: model.page.size,
            total_items: model.page.total_elements,
            total_pages: model.page.total_pages,
        }
    }
}

/// Paging parameters sent with every list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    /// Spring-style sort expression, e.g. `rent,asc`.
    pub sort: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE, sort: None }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size, sort: None }
    }

    pub fn first(size: u32) -> Self {
        Self::new(0, size)
    }

    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Query pairs in wire order: `page`, `size`, then `sort` when set.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs =
            vec![("page".to_string(), self.page.to_string()), ("size".to_string(), self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        pairs
    }
}
