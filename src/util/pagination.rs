// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page arithmetic for the gallery.
//!
//! Pages are 1-indexed. Every function here is total: out-of-range input
//! is clamped or yields an empty slice, never a panic.

use std::ops::RangeInclusive;

/// Default number of records shown per page.
pub const PAGE_SIZE: usize = 10;

/// Pagination rules for a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `len` items, zero for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Items on the given page, clipped to the list length.
    pub fn page_slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        if page == 0 || page > self.total_pages(items.len()) {
            return &[];
        }
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Jump straight to `page`, clamped into `[1, total]`.
    pub fn go_to_page(&self, page: usize, total: usize) -> usize {
        page.clamp(1, total.max(1))
    }

    pub fn previous(&self, page: usize) -> usize {
        page.saturating_sub(1).max(1)
    }

    pub fn next(&self, page: usize, total: usize) -> usize {
        (page + 1).min(total).max(1)
    }

    /// Page numbers to offer as buttons. Empty when there are no pages.
    pub fn page_numbers(&self, total: usize) -> RangeInclusive<usize> {
        1..=total
    }
}
