use crate::core::errors::{AdminLogError, FetchError, Result};
use crate::core::models::filter::{FilterDescriptor, QueryMode};
use crate::core::models::log_entry::LogEntry;
use crate::core::models::page::{Epoch, FetchRequest, Page};
use crate::core::services::log_store::LogStore;
use crate::core::traits::fetcher::PageFetcher;
use crate::core::traits::preferences::PageSizeStore;

/// Paging knobs that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingSettings {
    /// Sizes the view may switch between.
    pub page_size_options: Vec<usize>,
    /// Used when no valid stored preference exists.
    pub default_page_size: usize,
    /// `type` code kept from keyword search results.
    pub admin_category: i64,
}

impl Default for PagingSettings {
    fn default() -> Self {
        Self {
            page_size_options: vec![10, 20, 50, 100],
            default_page_size: 10,
            admin_category: 3,
        }
    }
}

impl PagingSettings {
    fn allows(&self, size: usize) -> bool {
        size > 0 && self.page_size_options.contains(&size)
    }

    fn allowed_list(&self) -> String {
        self.page_size_options
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Loading indicator exposed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading { page: usize },
    Error { message: String },
}

/// What happened when a fetch result was handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Merged into the store; `page` is now active.
    Merged { page: usize, entries: usize },
    /// Issued under an older epoch and dropped without touching state.
    Stale,
    /// Current-epoch failure; the store is unchanged.
    Failed(String),
}

/// Drives a `LogStore` from user intents and fetch results.
///
/// Every filter change, page-size change or refresh advances the epoch and
/// starts from an empty store. Fetch results carry the epoch they were
/// issued under; anything older than the current epoch is dropped, which is
/// the only cancellation mechanism. The controller itself never performs
/// I/O: intents return the `FetchRequest` to run, and `apply` takes the
/// outcome back in whatever order results arrive.
pub struct PaginationController<S: PageSizeStore> {
    settings: PagingSettings,
    preferences: S,
    filter: Option<FilterDescriptor>,
    page_size: usize,
    epoch: Epoch,
    store: LogStore,
    active_page: usize,
    state: LoadState,
}

impl<S: PageSizeStore> PaginationController<S> {
    /// Create an idle controller at epoch 0.
    ///
    /// The stored page size is read once here; an absent or disallowed
    /// value falls back to the configured default.
    pub fn new(settings: PagingSettings, preferences: S) -> Self {
        let page_size = preferences
            .load()
            .filter(|s| settings.allows(*s))
            .unwrap_or(settings.default_page_size);
        Self {
            settings,
            preferences,
            filter: None,
            page_size,
            epoch: Epoch::default(),
            store: LogStore::new(),
            active_page: 1,
            state: LoadState::Idle,
        }
    }

    /// Switch to `filter`, returning the first-page request if it differs
    /// from the current one.
    ///
    /// A keyword switches to full-text search; dropping the keyword re-runs
    /// the structured query from page 1.
    pub fn set_filter(&mut self, filter: FilterDescriptor) -> Option<FetchRequest> {
        if self.filter.as_ref() == Some(&filter) {
            return None;
        }
        self.filter = Some(filter);
        Some(self.restart())
    }

    /// Start the current query over even if nothing changed.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        self.filter.as_ref()?;
        Some(self.restart())
    }

    /// Change the page size, persisting the preference.
    ///
    /// Page boundaries do not carry over between sizes, so a change
    /// invalidates the cache exactly like a filter change.
    pub fn set_page_size(&mut self, size: usize) -> Result<Option<FetchRequest>> {
        if !self.settings.allows(size) {
            return Err(AdminLogError::InvalidPageSize {
                size,
                allowed: self.settings.allowed_list(),
            });
        }
        if size == self.page_size {
            return Ok(None);
        }
        if let Err(e) = self.preferences.save(size) {
            tracing::warn!(error = %e, "page size preference not saved");
        }
        self.page_size = size;
        if self.filter.is_none() {
            return Ok(None);
        }
        Ok(Some(self.restart()))
    }

    /// Make one-based page `page` active, returning a request if its
    /// entries are not cached yet.
    pub fn request_page(&mut self, page: usize) -> Result<Option<FetchRequest>> {
        if page == 0 {
            return Err(AdminLogError::InvalidPage { page, last: None });
        }
        if self.filter.is_none() {
            return Err(AdminLogError::InvalidArgument {
                detail: "no query has been set yet".into(),
            });
        }
        if self.store.is_page_complete(page, self.page_size) {
            self.active_page = page;
            return Ok(None);
        }
        if self.store.is_past_end(page, self.page_size) {
            return Err(AdminLogError::InvalidPage {
                page,
                last: Some(self.page_count().max(1)),
            });
        }
        if let LoadState::Loading { page: loading } = self.state {
            return Err(AdminLogError::RequestInFlight { page: loading });
        }

        // keyword search has no paging on the server: always fetch the whole set
        let index = if self.is_full_text() { 0 } else { page - 1 };
        self.state = LoadState::Loading { page: index + 1 };
        Ok(Some(self.request_for(index)))
    }

    /// Hand back the outcome of `request`.
    pub fn apply(
        &mut self,
        request: &FetchRequest,
        result: std::result::Result<Page, FetchError>,
    ) -> Applied {
        let tagged = match &result {
            Ok(page) => page.epoch,
            Err(_) => request.epoch,
        };
        if tagged != self.epoch {
            tracing::debug!(
                stale = %tagged,
                current = %self.epoch,
                page = request.page_number(),
                "discarding response from an older query"
            );
            return Applied::Stale;
        }

        match result {
            Ok(page) => {
                let page = if self.is_full_text() {
                    self.admin_only(page)
                } else {
                    page
                };
                let entries = page.len();
                tracing::debug!(
                    epoch = %self.epoch,
                    offset = page.offset,
                    entries,
                    short = page.is_short,
                    "merging page"
                );
                self.store.merge(page);
                self.active_page = request.page_number();
                self.state = LoadState::Idle;
                Applied::Merged {
                    page: self.active_page,
                    entries,
                }
            }
            Err(e) => {
                let message = e.message().to_string();
                tracing::warn!(
                    epoch = %self.epoch,
                    page = request.page_number(),
                    error = %e,
                    "fetch failed"
                );
                self.state = LoadState::Error {
                    message: message.clone(),
                };
                Applied::Failed(message)
            }
        }
    }

    /// Run `request` through `fetcher` and apply the result.
    pub async fn load<F: PageFetcher + ?Sized>(
        &mut self,
        fetcher: &F,
        request: FetchRequest,
    ) -> Applied {
        let result = fetcher.fetch(&request).await;
        self.apply(&request, result)
    }

    /// Entries on the active page.
    pub fn current_page(&self) -> Vec<&LogEntry> {
        self.store.slice_for_page(self.active_page, self.page_size)
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn query(&self) -> Option<QueryMode> {
        self.filter.as_ref().map(FilterDescriptor::query_mode)
    }

    pub fn estimated_total(&self) -> usize {
        self.store.estimated_total(self.page_size)
    }

    pub fn page_count(&self) -> usize {
        self.store.page_count(self.page_size)
    }

    /// Whether the view should offer a "next page" control.
    pub fn has_next_page(&self) -> bool {
        self.active_page < self.page_count()
    }

    fn is_full_text(&self) -> bool {
        self.filter.as_ref().is_some_and(|f| f.keyword.is_some())
    }

    fn restart(&mut self) -> FetchRequest {
        self.epoch = self.epoch.next();
        self.store = LogStore::new();
        self.active_page = 1;
        self.state = LoadState::Loading { page: 1 };
        tracing::debug!(
            epoch = %self.epoch,
            page_size = self.page_size,
            "query restarted"
        );
        self.request_for(0)
    }

    fn request_for(&self, page_index: usize) -> FetchRequest {
        FetchRequest {
            epoch: self.epoch,
            query: self
                .filter
                .as_ref()
                .map(FilterDescriptor::query_mode)
                .unwrap_or_else(|| QueryMode::Structured(FilterDescriptor::default())),
            page_index,
            page_size: self.page_size,
        }
    }

    /// Keyword search spans every log category; keep the admin ones and
    /// present them as one complete result set.
    fn admin_only(&self, page: Page) -> Page {
        let category = self.settings.admin_category;
        let entries: Vec<LogEntry> = page
            .entries
            .into_iter()
            .filter(|e| e.type_code == category)
            .collect();
        Page {
            epoch: page.epoch,
            offset: 0,
            entries,
            is_short: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::preferences::memory_store::MemoryPageSizeStore;
    use crate::core::models::filter::ActionFilter;
    use crate::core::models::log_entry::ActionType;
    use async_trait::async_trait;
    use std::cell::RefCell;

    fn entry(id: i64, user: &str, type_code: i64) -> LogEntry {
        LogEntry {
            id,
            created_at: 1_767_225_600 + id,
            username: user.to_string(),
            type_code,
            target_user: None,
            content: format!("op {id}"),
        }
    }

    fn entries(ids: std::ops::Range<i64>, user: &str) -> Vec<LogEntry> {
        ids.map(|i| entry(i, user, 1)).collect()
    }

    fn controller() -> PaginationController<MemoryPageSizeStore> {
        controller_with_size(20)
    }

    fn controller_with_size(size: usize) -> PaginationController<MemoryPageSizeStore> {
        PaginationController::new(PagingSettings::default(), MemoryPageSizeStore::with(size))
    }

    fn actor(name: &str) -> FilterDescriptor {
        FilterDescriptor::window(0, 2_000_000_000).with_actor(Some(name))
    }

    fn ok(request: &FetchRequest, rows: Vec<LogEntry>) -> std::result::Result<Page, FetchError> {
        Ok(Page::for_request(request, rows))
    }

    #[test]
    fn starts_idle_at_epoch_zero() {
        let ctl = controller();
        assert_eq!(ctl.epoch(), Epoch::new(0));
        assert_eq!(ctl.state(), &LoadState::Idle);
        assert_eq!(ctl.active_page(), 1);
        assert!(ctl.store().is_empty());
        assert!(ctl.query().is_none());
    }

    #[test]
    fn stored_page_size_is_used_when_allowed() {
        assert_eq!(controller_with_size(50).page_size(), 50);
        // 7 is not an option, fall back to the default
        assert_eq!(controller_with_size(7).page_size(), 10);
        let prefs = MemoryPageSizeStore::default();
        let fresh = PaginationController::new(PagingSettings::default(), prefs);
        assert_eq!(fresh.page_size(), 10);
    }

    #[test]
    fn full_page_then_short_page() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        assert_eq!(req.page_index, 0);
        assert_eq!(ctl.state(), &LoadState::Loading { page: 1 });

        ctl.apply(&req, ok(&req, entries(0..20, "root")));
        assert_eq!(ctl.estimated_total(), 40);
        assert!(ctl.has_next_page());

        let req = ctl.request_page(2).unwrap().unwrap();
        assert_eq!(req.page_index, 1);
        let applied = ctl.apply(&req, ok(&req, entries(20..25, "root")));
        assert_eq!(applied, Applied::Merged { page: 2, entries: 5 });
        assert!(ctl.store().known_end());
        assert_eq!(ctl.estimated_total(), 25);
        assert_eq!(ctl.current_page().len(), 5);
        assert!(!ctl.has_next_page());
    }

    #[test]
    fn same_filter_is_a_no_op() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        ctl.apply(&req, ok(&req, entries(0..20, "root")));

        assert!(ctl.set_filter(actor("root")).is_none());
        assert_eq!(ctl.epoch(), Epoch::new(1));
        assert_eq!(ctl.store().loaded(), 20);
    }

    #[test]
    fn response_for_replaced_filter_is_discarded() {
        let mut ctl = controller();
        let alice = ctl.set_filter(actor("alice")).unwrap();
        assert_eq!(alice.epoch, Epoch::new(1));

        let bob = ctl.set_filter(actor("bob")).unwrap();
        assert_eq!(bob.epoch, Epoch::new(2));
        assert!(ctl.store().is_empty());

        let applied = ctl.apply(&alice, ok(&alice, entries(0..20, "alice")));
        assert_eq!(applied, Applied::Stale);
        assert!(ctl.current_page().is_empty());
        assert_eq!(ctl.state(), &LoadState::Loading { page: 1 });

        ctl.apply(&bob, ok(&bob, entries(100..110, "bob")));
        assert!(ctl.current_page().iter().all(|e| e.username == "bob"));
        assert_eq!(ctl.current_page().len(), 10);
    }

    #[test]
    fn stale_response_leaves_everything_untouched() {
        let mut ctl = controller();
        let old = ctl.set_filter(actor("alice")).unwrap();
        let cur = ctl.set_filter(actor("bob")).unwrap();
        ctl.apply(&cur, ok(&cur, entries(0..20, "bob")));
        let next = ctl.request_page(2).unwrap().unwrap();
        ctl.apply(&next, ok(&next, entries(20..40, "bob")));

        let before_ids: Vec<i64> = ctl.current_page().iter().map(|e| e.id).collect();
        let snapshot = |ctl: &PaginationController<MemoryPageSizeStore>| {
            (
                ctl.active_page(),
                ctl.store().len(),
                ctl.store().known_end(),
                ctl.state().clone(),
            )
        };
        let before = snapshot(&ctl);

        // a short stale page would otherwise set known_end
        assert_eq!(ctl.apply(&old, ok(&old, entries(0..3, "alice"))), Applied::Stale);
        let stale_err = Err(FetchError::Network { reason: "timeout".into() });
        assert_eq!(ctl.apply(&old, stale_err), Applied::Stale);

        let after_ids: Vec<i64> = ctl.current_page().iter().map(|e| e.id).collect();
        let after = snapshot(&ctl);
        assert_eq!(before, after);
        assert_eq!(before_ids, after_ids);
    }

    #[test]
    fn cached_page_needs_no_fetch() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        ctl.apply(&req, ok(&req, entries(0..20, "root")));
        let req = ctl.request_page(2).unwrap().unwrap();
        ctl.apply(&req, ok(&req, entries(20..40, "root")));

        assert!(ctl.request_page(1).unwrap().is_none());
        assert_eq!(ctl.active_page(), 1);
        assert_eq!(ctl.current_page()[0].id, 0);
    }

    #[test]
    fn last_partial_page_is_not_refetched() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        ctl.apply(&req, ok(&req, entries(0..20, "root")));
        let req = ctl.request_page(2).unwrap().unwrap();
        ctl.apply(&req, ok(&req, entries(20..25, "root")));

        ctl.request_page(1).unwrap();
        assert!(ctl.request_page(2).unwrap().is_none());
        assert_eq!(ctl.current_page().len(), 5);
        assert!(matches!(
            ctl.request_page(3),
            Err(AdminLogError::InvalidPage { page: 3, .. })
        ));
    }

    #[test]
    fn page_zero_is_rejected() {
        let mut ctl = controller();
        ctl.set_filter(actor("root"));
        assert!(matches!(ctl.request_page(0), Err(AdminLogError::InvalidPage { .. })));
    }

    #[test]
    fn request_before_any_filter_is_rejected() {
        let mut ctl = controller();
        assert!(matches!(
            ctl.request_page(1),
            Err(AdminLogError::InvalidArgument { .. })
        ));
        assert!(ctl.refresh().is_none());
    }

    #[test]
    fn second_request_while_loading_is_refused() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        assert!(matches!(
            ctl.request_page(3),
            Err(AdminLogError::RequestInFlight { page: 1 })
        ));
        ctl.apply(&req, ok(&req, entries(0..20, "root")));
        assert!(ctl.request_page(3).unwrap().is_some());
    }

    #[test]
    fn filter_change_overrides_in_flight_request() {
        let mut ctl = controller();
        let first = ctl.set_filter(actor("alice")).unwrap();
        ctl.apply(&first, ok(&first, entries(0..20, "alice")));
        let pending = ctl.request_page(2).unwrap().unwrap();

        let restart = ctl.set_filter(actor("bob")).unwrap();
        assert_eq!(restart.page_index, 0);
        assert_eq!(ctl.apply(&pending, ok(&pending, entries(20..40, "alice"))), Applied::Stale);
        assert_eq!(ctl.state(), &LoadState::Loading { page: 1 });
    }

    #[test]
    fn failure_keeps_store_and_active_page() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        ctl.apply(&req, ok(&req, entries(0..20, "root")));

        let req = ctl.request_page(2).unwrap().unwrap();
        let applied = ctl.apply(
            &req,
            Err(FetchError::Rejected {
                message: "无权进行此操作".into(),
            }),
        );
        assert_eq!(applied, Applied::Failed("无权进行此操作".into()));
        assert_eq!(
            ctl.state(),
            &LoadState::Error {
                message: "无权进行此操作".into()
            }
        );
        assert_eq!(ctl.active_page(), 1);
        assert_eq!(ctl.store().loaded(), 20);

        // the user re-triggers; nothing retries on its own
        assert!(ctl.request_page(2).unwrap().is_some());
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        ctl.apply(&req, ok(&req, entries(0..20, "root")));
        let req = ctl.request_page(2).unwrap().unwrap();
        ctl.apply(&req, ok(&req, entries(20..40, "root")));
        assert_eq!(ctl.active_page(), 2);

        let req = ctl.set_page_size(50).unwrap().unwrap();
        assert_eq!(req.page_size, 50);
        assert_eq!(req.page_index, 0);
        assert_eq!(req.epoch, Epoch::new(2));
        assert_eq!(ctl.active_page(), 1);
        assert!(ctl.store().is_empty());
    }

    #[test]
    fn page_size_is_validated_and_persisted() {
        let mut ctl = controller();
        assert!(matches!(
            ctl.set_page_size(33),
            Err(AdminLogError::InvalidPageSize { size: 33, .. })
        ));
        assert!(ctl.set_page_size(20).unwrap().is_none());

        // no filter yet: nothing to fetch, but the size sticks
        assert!(ctl.set_page_size(100).unwrap().is_none());
        assert_eq!(ctl.page_size(), 100);
        assert_eq!(ctl.preferences.load(), Some(100));
    }

    #[test]
    fn refresh_bumps_epoch_with_same_filter() {
        let mut ctl = controller();
        let first = ctl.set_filter(actor("root")).unwrap();
        ctl.apply(&first, ok(&first, entries(0..20, "root")));

        let again = ctl.refresh().unwrap();
        assert_eq!(again.epoch, Epoch::new(2));
        assert_eq!(again.query, first.query);
        assert!(ctl.store().is_empty());
    }

    #[test]
    fn out_of_order_pages_in_one_epoch_both_land() {
        let mut ctl = controller();
        let p1 = ctl.set_filter(actor("root")).unwrap();
        // jump ahead before page 1 resolves is refused, so resolve then jump twice
        ctl.apply(&p1, ok(&p1, entries(0..20, "root")));
        let p3 = ctl.request_page(3).unwrap().unwrap();
        ctl.apply(&p3, ok(&p3, entries(40..60, "root")));
        assert!(!ctl.store().is_page_complete(2, 20));

        let p2 = ctl.request_page(2).unwrap().unwrap();
        assert_eq!(p2.page_index, 1);
        ctl.apply(&p2, ok(&p2, entries(20..40, "root")));
        assert!(ctl.store().is_page_complete(2, 20));
        assert_eq!(ctl.store().loaded(), 60);
    }

    #[test]
    fn keyword_search_keeps_admin_category_only() {
        let mut ctl = controller();
        let structured = ctl.set_filter(actor("root")).unwrap();
        let search = ctl
            .set_filter(actor("root").with_keyword(Some("delete")))
            .unwrap();
        assert_eq!(search.query, QueryMode::FullText("delete".into()));
        assert!(search.epoch > structured.epoch);

        let rows = vec![entry(1, "root", 2), entry(2, "root", 3), entry(3, "bob", 1)];
        let page = Page {
            epoch: search.epoch,
            offset: 0,
            entries: rows,
            is_short: true,
        };
        assert_eq!(ctl.apply(&structured, ok(&structured, entries(0..20, "root"))), Applied::Stale);
        let applied = ctl.apply(&search, Ok(page));
        assert_eq!(applied, Applied::Merged { page: 1, entries: 1 });
        assert_eq!(ctl.current_page().len(), 1);
        assert_eq!(ctl.current_page()[0].id, 2);
        assert!(ctl.store().known_end());
        assert_eq!(ctl.estimated_total(), 1);
    }

    #[test]
    fn clearing_keyword_reruns_structured_query() {
        let mut ctl = controller();
        let base = FilterDescriptor::window(0, 100)
            .with_action(ActionFilter::Only(ActionType::UserMgmt));
        ctl.set_filter(base.clone());
        let search = ctl.set_filter(base.clone().with_keyword(Some("x"))).unwrap();
        let empty = Page {
            epoch: search.epoch,
            offset: 0,
            entries: vec![],
            is_short: true,
        };
        ctl.apply(&search, Ok(empty));

        let back = ctl.set_filter(base.clone()).unwrap();
        assert_eq!(back.query, QueryMode::Structured(base));
        assert_eq!(back.page_index, 0);
        assert_eq!(back.epoch, Epoch::new(3));
    }

    #[test]
    fn empty_page_after_a_jump_leaves_skipped_page_reachable() {
        let mut ctl = controller();
        let req = ctl.set_filter(actor("root")).unwrap();
        ctl.apply(&req, ok(&req, entries(0..20, "root")));

        let jump = ctl.request_page(3).unwrap().unwrap();
        assert_eq!(jump.page_index, 2);
        ctl.apply(&jump, ok(&jump, Vec::new()));
        assert!(ctl.store().known_end());
        assert_eq!(ctl.estimated_total(), 40);
        assert_eq!(ctl.page_count(), 2);

        let back = ctl.request_page(2).unwrap().unwrap();
        assert_eq!(back.page_index, 1);
        ctl.apply(&back, ok(&back, entries(20..40, "root")));
        assert_eq!(ctl.active_page(), 2);
        assert_eq!(ctl.current_page().len(), 20);
        assert_eq!(ctl.estimated_total(), 40);
        assert!(matches!(
            ctl.request_page(4),
            Err(AdminLogError::InvalidPage {
                page: 4,
                last: Some(2)
            })
        ));
    }

    struct ScriptedFetcher {
        rows: Vec<LogEntry>,
        calls: RefCell<Vec<FetchRequest>>,
    }

    #[async_trait(?Send)]
    impl PageFetcher for ScriptedFetcher {
        async fn fetch(&self, request: &FetchRequest) -> std::result::Result<Page, FetchError> {
            self.calls.borrow_mut().push(request.clone());
            let start = request.offset().min(self.rows.len());
            let end = (start + request.page_size).min(self.rows.len());
            Ok(Page::for_request(request, self.rows[start..end].to_vec()))
        }
    }

    #[tokio::test]
    async fn load_drives_fetcher_until_end() {
        let fetcher = ScriptedFetcher {
            rows: entries(0..45, "root"),
            calls: RefCell::new(Vec::new()),
        };
        let mut ctl = controller();

        let req = ctl.set_filter(actor("root")).unwrap();
        ctl.load(&fetcher, req).await;
        let mut page = 1;
        while ctl.has_next_page() {
            page += 1;
            if let Some(req) = ctl.request_page(page).unwrap() {
                ctl.load(&fetcher, req).await;
            }
        }

        assert_eq!(page, 3);
        assert_eq!(ctl.estimated_total(), 45);
        assert_eq!(ctl.current_page().len(), 5);
        assert_eq!(fetcher.calls.borrow().len(), 3);

        // going back is served from the cache
        assert!(ctl.request_page(1).unwrap().is_none());
        assert_eq!(fetcher.calls.borrow().len(), 3);
    }

    #[tokio::test]
    async fn empty_result_shows_single_empty_page() {
        let fetcher = ScriptedFetcher {
            rows: Vec::new(),
            calls: RefCell::new(Vec::new()),
        };
        let mut ctl = controller();
        let req = ctl.set_filter(actor("nobody")).unwrap();
        ctl.load(&fetcher, req).await;

        assert!(ctl.current_page().is_empty());
        assert_eq!(ctl.estimated_total(), 0);
        assert!(!ctl.has_next_page());
        assert!(ctl.request_page(1).unwrap().is_none());
    }
}
