//! Member roster view: one filter, two independently paged lists.
//!
//! Members are filtered by name or full name, sorted by member name, then
//! split into approved and pending lists. Trust collections have no pending
//! queue, so everything lands in the approved list.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::Config;
use crate::filtered::DebouncedFilter;
use rollcall_engine::{PageView, Pagination, WindowStyle};
use rollcall_types::{CollectionDetails, Member};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberList {
    Approved,
    Pending,
}

impl MemberList {
    pub fn label(self) -> &'static str {
        match self {
            MemberList::Approved => "Approved",
            MemberList::Pending => "Pending",
        }
    }

    pub fn other(self) -> Self {
        match self {
            MemberList::Approved => MemberList::Pending,
            MemberList::Pending => MemberList::Approved,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemberPagination {
    filter: DebouncedFilter<Member>,
    details: CollectionDetails,
    page_size: usize,
    approved: Pagination<Member>,
    pending: Pagination<Member>,
}

impl MemberPagination {
    pub fn new(
        members: impl Into<Arc<[Member]>>,
        details: CollectionDetails,
        page_size: usize,
        filter_delay: Duration,
    ) -> Self {
        let mut state = Self {
            filter: DebouncedFilter::new(members, filter_delay),
            details,
            page_size,
            approved: Pagination::new(Vec::new(), page_size),
            pending: Pagination::new(Vec::new(), page_size),
        };
        state.rebuild();
        state
    }

    /// Build from the `[pagination]` and `[filter]` config sections.
    pub fn from_config(
        members: impl Into<Arc<[Member]>>,
        details: CollectionDetails,
        config: &Config,
    ) -> Self {
        Self::new(
            members,
            details,
            config.pagination.page_size,
            config.filter.delay(),
        )
        .with_enabled(config.pagination.enabled)
        .with_window(config.pagination.window)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_pagination_enabled(enabled);
        self
    }

    pub fn with_window(mut self, window: WindowStyle) -> Self {
        self.approved.set_window(window);
        self.pending.set_window(window);
        self
    }

    pub fn details(&self) -> CollectionDetails {
        self.details
    }

    pub fn total_members_count(&self) -> usize {
        self.filter.dataset().len()
    }

    pub fn filtered_members_count(&self) -> usize {
        self.filter.filtered().len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pagination_enabled(&self) -> bool {
        self.approved.is_enabled()
    }

    pub fn window(&self) -> WindowStyle {
        self.approved.window()
    }

    /// Text as typed, including any value still waiting on the debounce.
    pub fn filter_text(&self) -> &str {
        self.filter.latest()
    }

    /// Text the lists are currently filtered by.
    pub fn debounced_text(&self) -> &str {
        self.filter.committed()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.filter.deadline()
    }

    pub fn has_no_results(&self) -> bool {
        self.filter.has_no_results()
    }

    pub fn list(&self, list: MemberList) -> &Pagination<Member> {
        match list {
            MemberList::Approved => &self.approved,
            MemberList::Pending => &self.pending,
        }
    }

    pub fn list_mut(&mut self, list: MemberList) -> &mut Pagination<Member> {
        match list {
            MemberList::Approved => &mut self.approved,
            MemberList::Pending => &mut self.pending,
        }
    }

    pub fn approved(&self) -> &Pagination<Member> {
        &self.approved
    }

    pub fn pending(&self) -> &Pagination<Member> {
        &self.pending
    }

    pub fn view(&self, list: MemberList) -> PageView<'_, Member> {
        self.list(list).view()
    }

    /// Whether the list needs page controls at all.
    pub fn show_pagination(&self, list: MemberList) -> bool {
        let pagination = self.list(list);
        pagination.is_enabled() && pagination.total_pages() > 1
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>, now: Instant) {
        if self.filter.set_text(text, now) {
            self.rebuild();
        }
    }

    pub fn clear_filter(&mut self, now: Instant) {
        self.set_filter_text(String::new(), now);
    }

    pub fn set_filter_delay(&mut self, delay: Duration, now: Instant) {
        if self.filter.set_delay(delay, now) {
            self.rebuild();
        }
    }

    /// Returns `true` if a debounced filter text was committed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let committed = self.filter.poll(now);
        if committed {
            self.rebuild();
        }
        committed
    }

    /// Applies to both lists and returns both to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        tracing::debug!(page_size, "page size changed");
        self.page_size = page_size;
        self.approved.set_items_per_page(page_size);
        self.pending.set_items_per_page(page_size);
    }

    pub fn set_pagination_enabled(&mut self, enabled: bool) {
        self.approved.set_enabled(enabled);
        self.pending.set_enabled(enabled);
    }

    /// Replace the roster; both lists return to page 1.
    pub fn set_members(&mut self, members: impl Into<Arc<[Member]>>) {
        self.filter.set_dataset(members);
        self.rebuild();
    }

    pub fn set_details(&mut self, details: CollectionDetails) {
        if self.details != details {
            self.details = details;
            self.rebuild();
        }
    }

    pub fn go_to_page(&mut self, list: MemberList, page: i64) {
        self.list_mut(list).go_to_page(page);
    }

    pub fn go_to_next(&mut self, list: MemberList) {
        self.list_mut(list).go_to_next();
    }

    pub fn go_to_previous(&mut self, list: MemberList) {
        self.list_mut(list).go_to_previous();
    }

    pub fn go_to_first(&mut self, list: MemberList) {
        self.list_mut(list).go_to_first();
    }

    pub fn go_to_last(&mut self, list: MemberList) {
        self.list_mut(list).go_to_last();
    }

    fn rebuild(&mut self) {
        let mut filtered = self.filter.filtered().to_vec();
        filtered.sort_by(|a, b| a.member_name.cmp(&b.member_name));

        let (approved, pending): (Vec<Member>, Vec<Member>) = if self.details.trust {
            (filtered, Vec::new())
        } else {
            filtered.into_iter().partition(|member| member.approved)
        };

        tracing::debug!(
            filter = %self.filter.committed(),
            approved = approved.len(),
            pending = pending.len(),
            "member lists rebuilt"
        );

        self.approved.set_data(Arc::from(approved));
        self.pending.set_data(Arc::from(pending));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_testing::fixtures::sample_members;

    fn state() -> MemberPagination {
        MemberPagination::new(
            sample_members(),
            CollectionDetails::default(),
            30,
            Duration::ZERO,
        )
    }

    fn names(pagination: &Pagination<Member>) -> Vec<&str> {
        pagination
            .items()
            .iter()
            .map(|member| member.member_name.as_str())
            .collect()
    }

    #[test]
    fn test_initial_counts() {
        let state = state();

        assert!(state.pagination_enabled());
        assert_eq!(state.page_size(), 30);
        assert_eq!(state.total_members_count(), 6);
        assert_eq!(state.filtered_members_count(), 6);
        assert_eq!(state.approved().total_items(), 4);
        assert_eq!(state.pending().total_items(), 2);
    }

    #[test]
    fn test_sorted_by_member_name() {
        let state = state();

        assert_eq!(
            names(state.approved()),
            vec!["user.alice", "user.bob", "user.dave", "user.frank"]
        );
        assert_eq!(names(state.pending()), vec!["user.carol", "user.eve"]);
    }

    #[test]
    fn test_trust_collection_has_no_pending() {
        let state = MemberPagination::new(
            sample_members(),
            CollectionDetails::trusted(),
            30,
            Duration::ZERO,
        );

        assert_eq!(state.approved().total_items(), 6);
        assert_eq!(state.pending().total_items(), 0);
    }

    #[test]
    fn test_disabled_pagination() {
        let state = state().with_enabled(false);

        assert!(!state.pagination_enabled());
        assert_eq!(state.approved().items().len(), 4);
        assert_eq!(state.pending().items().len(), 2);
        assert!(!state.show_pagination(MemberList::Approved));
    }

    #[test]
    fn test_filter_by_name_and_full_name() {
        let mut state = state();
        let now = Instant::now();

        state.set_filter_text("alice", now);
        assert_eq!(state.filtered_members_count(), 1);
        assert_eq!(state.approved().total_items(), 1);
        assert_eq!(state.pending().total_items(), 0);

        state.set_filter_text("Adams", now);
        assert_eq!(state.filtered_members_count(), 1);
        assert_eq!(names(state.pending()), vec!["user.eve"]);

        state.set_filter_text("smith", now);
        assert_eq!(names(state.approved()), vec!["user.alice", "user.frank"]);
    }

    #[test]
    fn test_clear_filter() {
        let mut state = state();
        let now = Instant::now();

        state.set_filter_text("alice", now);
        assert_eq!(state.filtered_members_count(), 1);

        state.clear_filter(now);
        assert_eq!(state.filtered_members_count(), 6);
        assert_eq!(state.filter_text(), "");
    }

    #[test]
    fn test_no_results() {
        let mut state = state();
        state.set_filter_text("zzz", Instant::now());

        assert!(state.has_no_results());
        assert_eq!(state.approved().total_pages(), 0);
        assert!(!state.show_pagination(MemberList::Approved));
    }

    #[test]
    fn test_lists_navigate_independently() {
        let mut state = state();
        state.set_page_size(1);

        state.go_to_page(MemberList::Pending, 2);
        assert_eq!(state.pending().current_page(), 2);
        assert_eq!(state.approved().current_page(), 1);

        state.go_to_last(MemberList::Approved);
        assert_eq!(state.approved().current_page(), 4);
        assert_eq!(state.pending().current_page(), 2);
    }

    #[test]
    fn test_page_size_applies_to_both_lists_and_resets() {
        let mut state = state();
        state.set_page_size(2);
        state.go_to_next(MemberList::Approved);
        assert_eq!(state.approved().current_page(), 2);

        state.set_page_size(2);

        assert_eq!(state.page_size(), 2);
        assert_eq!(state.approved().total_pages(), 2);
        assert_eq!(state.pending().total_pages(), 1);
        assert_eq!(state.approved().current_page(), 1);
        assert_eq!(state.pending().current_page(), 1);
        assert!(state.show_pagination(MemberList::Approved));
        assert!(!state.show_pagination(MemberList::Pending));
    }

    #[test]
    fn test_set_members_resets_both_lists() {
        let mut state = state();
        state.set_page_size(1);
        state.go_to_page(MemberList::Approved, 2);
        state.go_to_page(MemberList::Pending, 2);

        let mut members = sample_members();
        members.push(Member::new("user.gina"));
        state.set_members(members);

        assert_eq!(state.approved().current_page(), 1);
        assert_eq!(state.pending().current_page(), 1);
        assert_eq!(state.total_members_count(), 7);
    }

    #[test]
    fn test_set_members_keeps_committed_filter() {
        let mut state = state();
        state.set_filter_text("smith", Instant::now());

        let mut members = sample_members();
        members.push(Member::new("user.gina").with_full_name("Gina Smith"));
        state.set_members(members);

        assert_eq!(state.debounced_text(), "smith");
        assert_eq!(state.filtered_members_count(), 3);
        assert_eq!(
            names(state.approved()),
            vec!["user.alice", "user.frank", "user.gina"]
        );
    }

    #[test]
    fn test_debounced_filter_waits_for_tick() {
        let mut state = MemberPagination::new(
            sample_members(),
            CollectionDetails::default(),
            30,
            Duration::from_millis(200),
        );
        let t0 = Instant::now();

        state.set_filter_text("bob", t0);
        assert_eq!(state.filter_text(), "bob");
        assert_eq!(state.filtered_members_count(), 6);

        assert!(state.tick(t0 + Duration::from_millis(200)));
        assert_eq!(state.filtered_members_count(), 1);
        assert_eq!(state.debounced_text(), "bob");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.pagination.page_size = 2;
        config.pagination.window = WindowStyle::ellipsis();

        let state = MemberPagination::from_config(sample_members(), CollectionDetails::default(), &config);

        assert_eq!(state.page_size(), 2);
        assert_eq!(state.window(), WindowStyle::ellipsis());
        assert_eq!(state.approved().total_pages(), 2);
    }
}
