//! Clamped, self-correcting pagination over an immutable dataset.

use serde::Serialize;
use std::ops::Range;
use std::sync::Arc;

use crate::window::{PageWindow, WindowStyle};
use rollcall_types::PageItem;

/// Number of pages needed for `item_count` items.
///
/// A page size of zero means no item fits on a page, which yields zero pages.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    item_count.div_ceil(per_page)
}

/// Clamp a requested (possibly negative) page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let upper = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // `upper` came from a usize, so the clamped value always fits back.
    page.clamp(1, upper) as usize
}

/// Index range of `page` (1-based) within a dataset of `total_items`, clipped to bounds.
pub fn page_bounds(total_items: usize, per_page: usize, page: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    start..end
}

/// Pagination state owned by a single view.
///
/// The dataset is shared as `Arc<[T]>` and never mutated; handing in a
/// different `Arc` is how an owner signals "new data", which sends the view
/// back to page 1. Every mutator re-settles the state so that
/// `1 <= current_page <= max(total_pages, 1)` holds between calls.
#[derive(Debug, Clone)]
pub struct Pagination<T> {
    data: Arc<[T]>,
    current_page: usize,
    items_per_page: usize,
    enabled: bool,
    window: WindowStyle,
}

impl<T> Pagination<T> {
    pub fn new(data: impl Into<Arc<[T]>>, items_per_page: usize) -> Self {
        Self {
            data: data.into(),
            current_page: 1,
            items_per_page,
            enabled: true,
            window: WindowStyle::default(),
        }
    }

    /// Turn pagination on or off at construction time.
    ///
    /// Disabled pagination presents the whole dataset as a single page.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self.current_page = 1;
        self
    }

    pub fn with_window(mut self, window: WindowStyle) -> Self {
        self.window = window;
        self
    }

    pub fn data(&self) -> &Arc<[T]> {
        &self.data
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Effective page size: the configured size, or the whole dataset when disabled.
    pub fn items_per_page(&self) -> usize {
        if self.enabled {
            self.items_per_page
        } else {
            self.data.len()
        }
    }

    /// Page size as last requested by the owner, regardless of `enabled`.
    pub fn requested_items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn window(&self) -> WindowStyle {
        self.window
    }

    pub fn total_items(&self) -> usize {
        self.data.len()
    }

    pub fn total_pages(&self) -> usize {
        if self.enabled {
            total_pages(self.data.len(), self.items_per_page)
        } else {
            1
        }
    }

    pub fn item_range(&self) -> Range<usize> {
        if self.enabled {
            page_bounds(self.data.len(), self.items_per_page, self.current_page)
        } else {
            0..self.data.len()
        }
    }

    /// Records visible on the current page.
    pub fn items(&self) -> &[T] {
        &self.data[self.item_range()]
    }

    pub fn has_next(&self) -> bool {
        self.enabled && self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.enabled && self.current_page > 1
    }

    pub fn page_numbers(&self) -> Vec<PageItem> {
        self.page_numbers_with(&self.window)
    }

    /// Page-number window computed with a caller-supplied strategy.
    pub fn page_numbers_with(&self, window: &dyn PageWindow) -> Vec<PageItem> {
        if !self.enabled {
            return vec![PageItem::Page(1)];
        }
        window.window(self.current_page, self.total_pages())
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> PageView<'_, T> {
        PageView {
            current_page: self.current_page,
            items_per_page: self.items_per_page(),
            total_items: self.total_items(),
            total_pages: self.total_pages(),
            items: self.items(),
            page_numbers: self.page_numbers(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    /// Jump to `page`, clamping out-of-range requests into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: i64) {
        if !self.enabled {
            return;
        }
        self.current_page = clamp_page(page, self.total_pages());
    }

    pub fn go_to_next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    pub fn go_to_previous(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn go_to_first(&mut self) {
        if self.enabled {
            self.current_page = 1;
        }
    }

    pub fn go_to_last(&mut self) {
        if self.enabled {
            self.current_page = self.total_pages().max(1);
        }
    }

    /// Change the page size. Always returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.current_page = 1;
    }

    pub fn set_window(&mut self, window: WindowStyle) {
        self.window = window;
    }

    /// Replace the dataset.
    ///
    /// A different `Arc` resets to page 1 even when the contents are equal;
    /// the same `Arc` keeps the current page, corrected into range.
    pub fn set_data(&mut self, data: Arc<[T]>) {
        if !Arc::ptr_eq(&self.data, &data) {
            self.current_page = 1;
        }
        self.data = data;
        self.settle();
    }

    /// Return to page 1 without touching data or page size.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    fn settle(&mut self) {
        let total = self.total_pages();
        if self.current_page > total {
            self.current_page = total.max(1);
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }
}

/// Derived, read-only pagination result handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a, T> {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub items: &'a [T],
    pub page_numbers: Vec<PageItem>,
    pub has_next: bool,
    pub has_previous: bool,
}
