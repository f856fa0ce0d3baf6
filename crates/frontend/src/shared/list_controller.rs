//! Generic list-view controller.
//!
//! Every list screen (calls, coupons, invoices, payments, packages,
//! subscriptions, credits, inbound numbers, users) instantiates
//! [`ListController`] with its filter record and row type instead of wiring
//! its own fetch/paginate/URL-sync plumbing.
//!
//! The pagination and ordering rules live in the plain [`ListCore`] struct so
//! they can be unit-tested natively; the controller wraps it in signals and
//! adds the async edges. Pages are 1-based in the UI and URL, zero-based on
//! the wire (`page_query`). Overlapping fetches are resolved by a sequence
//! number: only the most recently issued fetch may apply its result, stale
//! responses are discarded silently.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use contracts::shared::pagination::PageQuery;

use crate::layout::notify::{use_notify, NotifyService};
use crate::shared::api::ApiError;
use crate::shared::query;

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Bounds every screen filter record satisfies.
pub trait FilterState:
    Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> FilterState for T where
    T: Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// One page of backend results, normalized from the per-endpoint response
/// shapes by the api modules.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

#[derive(Debug, Clone)]
pub struct ListCore<F> {
    pub filter: F,
    page: usize,
    page_size: usize,
    total_count: usize,
    seq: u64,
}

impl<F: Clone> ListCore<F> {
    pub fn new(filter: F, page_size: usize) -> Self {
        Self::restore(filter, 1, page_size)
    }

    /// Restore from URL state. The upper page bound is unknown until the
    /// first response arrives; `apply_total` clamps a stale page then.
    pub fn restore(filter: F, page: usize, page_size: usize) -> Self {
        Self {
            filter,
            page: page.max(1),
            page_size,
            total_count: 0,
            seq: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Changing a filter always returns to the first page.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }

    /// Accepts only pages within `[1, max(total_pages, 1)]`; the upper bound
    /// is enforced once a total is known. Out-of-range requests are ignored.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 {
            return false;
        }
        if self.total_count > 0 && page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn total_pages(&self) -> usize {
        if self.total_count == 0 {
            1
        } else {
            (self.total_count + self.page_size - 1) / self.page_size
        }
    }

    /// Issue a new fetch sequence number. Any earlier in-flight fetch becomes
    /// stale from this point on.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Record the total for the current result set. Returns true when the
    /// current page fell past the end (stale URL) and was clamped, in which
    /// case the caller must re-fetch.
    pub fn apply_total(&mut self, total_count: usize) -> bool {
        self.total_count = total_count;
        if self.page > self.total_pages() {
            self.page = self.total_pages();
            true
        } else {
            false
        }
    }

    /// Paging parameters as the backend expects them: zero-based page offset.
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page - 1,
            limit: self.page_size,
        }
    }
}

type Fetcher<F, T> =
    Arc<dyn Fn(F, PageQuery) -> Pin<Box<dyn Future<Output = Result<ListPage<T>, ApiError>>>> + Send + Sync>;

pub struct ListController<F, T>
where
    F: FilterState,
    T: Send + Sync + 'static,
{
    core: RwSignal<ListCore<F>>,
    state: RwSignal<LoadState<T>>,
    fetcher: StoredValue<Fetcher<F, T>>,
    view_key: &'static str,
    notify: NotifyService,
}

impl<F: FilterState, T: Send + Sync + 'static> Clone for ListController<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FilterState, T: Send + Sync + 'static> Copy for ListController<F, T> {}

impl<F, T> ListController<F, T>
where
    F: FilterState,
    T: Clone + Send + Sync + 'static,
{
    /// Create a controller for the screen identified by `view_key`, restore
    /// filter and page from the URL, and request the first page.
    pub fn mount<Fut>(
        view_key: &'static str,
        fetch: impl Fn(F, PageQuery) -> Fut + Send + Sync + 'static,
    ) -> Self
    where
        Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
    {
        let filter: F = query::read_filter();
        let page = query::read_page();
        let fetcher: Fetcher<F, T> = Arc::new(move |f, pq| Box::pin(fetch(f, pq)));

        let controller = Self {
            core: RwSignal::new(ListCore::restore(filter, page, DEFAULT_PAGE_SIZE)),
            state: RwSignal::new(LoadState::Idle),
            fetcher: StoredValue::new(fetcher),
            view_key,
            notify: use_notify(),
        };
        controller.sync_url();
        controller.load();
        controller
    }

    pub fn set_filter(&self, filter: F) {
        self.core.update(|c| c.set_filter(filter));
        self.sync_url();
        self.load();
    }

    /// Clone-modify convenience over `set_filter`; keeps the page-reset rule.
    pub fn update_filter(&self, apply: impl FnOnce(&mut F)) {
        let mut filter = self.filter();
        apply(&mut filter);
        self.set_filter(filter);
    }

    pub fn set_page(&self, page: usize) {
        let accepted = self.core.try_update(|c| c.set_page(page)).unwrap_or(false);
        if accepted {
            self.sync_url();
            self.load();
        }
    }

    /// Re-issue the fetch for the current state without touching the URL.
    /// Called after a mutation succeeds.
    pub fn refresh(&self) {
        self.load();
    }

    pub fn filter(&self) -> F {
        self.core.with_untracked(|c| c.filter.clone())
    }

    pub fn filter_signal(&self) -> Signal<F> {
        let core = self.core;
        Signal::derive(move || core.with(|c| c.filter.clone()))
    }

    pub fn load_state(&self) -> RwSignal<LoadState<T>> {
        self.state
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || match state.get() {
            LoadState::Loaded(items) => items,
            _ => Vec::new(),
        })
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || match state.get() {
            LoadState::Failed(message) => Some(message),
            _ => None,
        })
    }

    pub fn page(&self) -> Signal<usize> {
        let core = self.core;
        Signal::derive(move || core.with(|c| c.page()))
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let core = self.core;
        Signal::derive(move || core.with(|c| c.total_pages()))
    }

    pub fn total_count(&self) -> Signal<usize> {
        let core = self.core;
        Signal::derive(move || core.with(|c| c.total_count()))
    }

    fn sync_url(&self) {
        let qs = self
            .core
            .with_untracked(|c| query::encode_state(&c.filter, c.page()));
        query::replace_url(self.view_key, &qs);
    }

    fn load(&self) {
        let seq = match self.core.try_update(|c| c.begin_fetch()) {
            Some(seq) => seq,
            None => return,
        };
        let (filter, page_query) = self
            .core
            .with_untracked(|c| (c.filter.clone(), c.page_query()));
        self.state.set(LoadState::Loading);

        let this = *self;
        spawn_local(async move {
            let Some(fut) = this
                .fetcher
                .try_with_value(|fetch| fetch(filter, page_query))
            else {
                return;
            };
            let result = fut.await;

            // The screen may have been torn down while the request was in
            // flight; try_* accessors turn a late response into a no-op.
            match result {
                Ok(page) => {
                    let applied = this.core.try_update(|c| {
                        if !c.is_current(seq) {
                            return None;
                        }
                        Some(c.apply_total(page.total_count))
                    });
                    match applied {
                        Some(Some(true)) => {
                            // Stale URL pointed past the end; the page was
                            // clamped, fetch the real last page.
                            this.sync_url();
                            this.load();
                        }
                        Some(Some(false)) => {
                            let _ = this
                                .state
                                .try_update(|s| *s = LoadState::Loaded(page.items));
                        }
                        _ => {}
                    }
                }
                Err(err) => {
                    let current = this
                        .core
                        .try_with_untracked(|c| c.is_current(seq))
                        .unwrap_or(false);
                    if !current {
                        return;
                    }
                    if err.should_display() {
                        let message = err.message();
                        this.notify.error(message.clone());
                        let _ = this.state.try_update(|s| *s = LoadState::Failed(message));
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_with_total(total: usize) -> ListCore<String> {
        let mut core = ListCore::new(String::new(), 50);
        let seq = core.begin_fetch();
        assert!(core.is_current(seq));
        core.apply_total(total);
        core
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut core = core_with_total(500);
        assert!(core.set_page(4));
        core.set_filter("active".to_string());
        assert_eq!(core.page(), 1);
        assert_eq!(core.filter, "active");
    }

    #[test]
    fn test_set_page_bounds() {
        let mut core = core_with_total(95);
        assert_eq!(core.total_pages(), 2);
        assert!(!core.set_page(0));
        assert!(!core.set_page(3));
        assert!(core.set_page(2));
        assert_eq!(core.page(), 2);
    }

    #[test]
    fn test_set_page_upper_bound_unknown_before_first_load() {
        let mut core = ListCore::new(String::new(), 50);
        assert!(core.set_page(7));
        assert_eq!(core.page(), 7);
    }

    #[test]
    fn test_total_pages_math() {
        assert_eq!(core_with_total(0).total_pages(), 1);
        assert_eq!(core_with_total(1).total_pages(), 1);
        assert_eq!(core_with_total(50).total_pages(), 1);
        assert_eq!(core_with_total(51).total_pages(), 2);
        assert_eq!(core_with_total(95).total_pages(), 2);
        assert_eq!(core_with_total(101).total_pages(), 3);
    }

    #[test]
    fn test_wire_page_is_zero_based() {
        let mut core = core_with_total(500);
        assert!(core.set_page(3));
        let pq = core.page_query();
        assert_eq!(pq.page, 2);
        assert_eq!(pq.limit, 50);
    }

    #[test]
    fn test_stale_url_page_is_clamped_after_first_load() {
        let mut core = ListCore::restore(String::new(), 9, 50);
        let _ = core.begin_fetch();
        let clamped = core.apply_total(120);
        assert!(clamped);
        assert_eq!(core.page(), 3);

        // page 9 of nothing collapses to page 1
        let mut empty = ListCore::restore(String::new(), 9, 50);
        let _ = empty.begin_fetch();
        assert!(empty.apply_total(0));
        assert_eq!(empty.page(), 1);
    }

    #[test]
    fn test_last_request_wins_in_order() {
        let mut core = ListCore::new(String::new(), 50);
        let seq1 = core.begin_fetch();
        let seq2 = core.begin_fetch();

        let mut applied: Option<&str> = None;
        for (seq, label) in [(seq1, "r1"), (seq2, "r2")] {
            if core.is_current(seq) {
                applied = Some(label);
            }
        }
        assert_eq!(applied, Some("r2"));
    }

    #[test]
    fn test_last_request_wins_reversed_arrival() {
        let mut core = ListCore::new(String::new(), 50);
        let seq1 = core.begin_fetch();
        let seq2 = core.begin_fetch();

        let mut applied: Option<&str> = None;
        for (seq, label) in [(seq2, "r2"), (seq1, "r1")] {
            if core.is_current(seq) {
                applied = Some(label);
            }
        }
        assert_eq!(applied, Some("r2"));
    }
}
