//! Debounced filter over a record set, and its composition with pagination.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::debounce::Debouncer;
use rollcall_engine::{PageView, Pagination, Searchable, WindowStyle, filter_records, is_blank};

/// A record set plus the debounced text it is filtered by.
///
/// Mutators return `true` when the filtered set was rebuilt; owners react by
/// re-deriving whatever they page over. Every rebuild is a fresh `Arc`.
#[derive(Debug, Clone)]
pub struct DebouncedFilter<T> {
    dataset: Arc<[T]>,
    text: Debouncer<String>,
    filtered: Arc<[T]>,
}

impl<T: Searchable + Clone> DebouncedFilter<T> {
    pub fn new(dataset: impl Into<Arc<[T]>>, delay: Duration) -> Self {
        let dataset = dataset.into();
        let text = Debouncer::new(String::new(), delay);
        let filtered = build_filtered(&dataset, text.value());
        Self {
            dataset,
            text,
            filtered,
        }
    }

    pub fn dataset(&self) -> &Arc<[T]> {
        &self.dataset
    }

    pub fn filtered(&self) -> &Arc<[T]> {
        &self.filtered
    }

    /// Text as typed, including any value still waiting on the debounce.
    pub fn latest(&self) -> &str {
        self.text.latest()
    }

    /// Text the records are currently filtered by.
    pub fn committed(&self) -> &str {
        self.text.value()
    }

    pub fn delay(&self) -> Duration {
        self.text.delay()
    }

    pub fn is_pending(&self) -> bool {
        self.text.is_pending()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.text.deadline()
    }

    /// A non-blank filter matched nothing. An empty dataset with no filter is not "no results".
    pub fn has_no_results(&self) -> bool {
        self.filtered.is_empty() && !is_blank(self.text.value())
    }

    pub fn set_text(&mut self, text: impl Into<String>, now: Instant) -> bool {
        let changed = self.text.update(text.into(), now);
        if changed {
            self.rebuild();
        }
        changed
    }

    pub fn set_delay(&mut self, delay: Duration, now: Instant) -> bool {
        let changed = self.text.set_delay(delay, now);
        if changed {
            self.rebuild();
        }
        changed
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        let changed = self.text.poll(now);
        if changed {
            self.rebuild();
        }
        changed
    }

    /// Replace the records and re-apply the committed text.
    pub fn set_dataset(&mut self, dataset: impl Into<Arc<[T]>>) {
        self.dataset = dataset.into();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.filtered = build_filtered(&self.dataset, self.text.value());
        tracing::debug!(
            filter = %self.text.value(),
            matched = self.filtered.len(),
            total = self.dataset.len(),
            "filter applied"
        );
    }
}

/// Pagination over `dataset.filter(debounced text)`.
///
/// Every committed filter change and every `set_dataset` builds a fresh
/// filtered `Arc`, which sends the pagination back to page 1.
#[derive(Debug, Clone)]
pub struct FilteredPagination<T> {
    filter: DebouncedFilter<T>,
    pagination: Pagination<T>,
}

impl<T: Searchable + Clone> FilteredPagination<T> {
    pub fn new(dataset: impl Into<Arc<[T]>>, items_per_page: usize, filter_delay: Duration) -> Self {
        let filter = DebouncedFilter::new(dataset, filter_delay);
        let pagination = Pagination::new(filter.filtered().clone(), items_per_page);
        Self { filter, pagination }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.pagination.set_enabled(enabled);
        self
    }

    pub fn with_window(mut self, window: WindowStyle) -> Self {
        self.pagination.set_window(window);
        self
    }

    pub fn dataset(&self) -> &Arc<[T]> {
        self.filter.dataset()
    }

    pub fn filtered(&self) -> &Arc<[T]> {
        self.pagination.data()
    }

    pub fn pagination(&self) -> &Pagination<T> {
        &self.pagination
    }

    pub fn view(&self) -> PageView<'_, T> {
        self.pagination.view()
    }

    pub fn filter_text(&self) -> &str {
        self.filter.latest()
    }

    pub fn debounced_text(&self) -> &str {
        self.filter.committed()
    }

    pub fn filter_delay(&self) -> Duration {
        self.filter.delay()
    }

    pub fn is_filter_pending(&self) -> bool {
        self.filter.is_pending()
    }

    /// When the pending filter text commits, if any. Hosts sleep until then and call `tick`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.filter.deadline()
    }

    pub fn has_no_results(&self) -> bool {
        self.filter.has_no_results()
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>, now: Instant) {
        if self.filter.set_text(text, now) {
            self.repage();
        }
    }

    pub fn clear_filter(&mut self, now: Instant) {
        self.set_filter_text(String::new(), now);
    }

    pub fn set_filter_delay(&mut self, delay: Duration, now: Instant) {
        if self.filter.set_delay(delay, now) {
            self.repage();
        }
    }

    /// Advance the debounce clock. Returns `true` if the filter committed a new text.
    pub fn tick(&mut self, now: Instant) -> bool {
        let committed = self.filter.poll(now);
        if committed {
            self.repage();
        }
        committed
    }

    /// Replace the records. The filter text is kept and re-applied.
    pub fn set_dataset(&mut self, dataset: impl Into<Arc<[T]>>) {
        let dataset = dataset.into();
        if Arc::ptr_eq(&dataset, self.filter.dataset()) {
            return;
        }
        self.filter.set_dataset(dataset);
        self.repage();
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.pagination.go_to_page(page);
    }

    pub fn go_to_next(&mut self) {
        self.pagination.go_to_next();
    }

    pub fn go_to_previous(&mut self) {
        self.pagination.go_to_previous();
    }

    pub fn go_to_first(&mut self) {
        self.pagination.go_to_first();
    }

    pub fn go_to_last(&mut self) {
        self.pagination.go_to_last();
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.set_items_per_page(items_per_page);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.pagination.set_enabled(enabled);
    }

    pub fn set_window(&mut self, window: WindowStyle) {
        self.pagination.set_window(window);
    }

    pub fn reset(&mut self) {
        self.pagination.reset();
    }

    fn repage(&mut self) {
        self.pagination.set_data(self.filter.filtered().clone());
    }
}

fn build_filtered<T: Searchable + Clone>(dataset: &[T], text: &str) -> Arc<[T]> {
    Arc::from(filter_records(dataset, text))
}
