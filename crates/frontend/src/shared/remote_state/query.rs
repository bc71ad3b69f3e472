//! List query engine
//!
//! [`QueryCore`] is the bookkeeping: sequence numbers, the loading flag and
//! the page reconciliation echo. [`QueryDriver`] wires it to a coalesced
//! fetch, a [`ListSource`] and a [`QueryStore`]. [`QueryEngine`] is the
//! Leptos face of the driver: signals for the descriptor and the result, and
//! an effect that reacts to descriptor edits.

use std::cell::RefCell;
use std::convert::Infallible;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use contracts::domain::common::{ListedRecord, PagedFilter};
use contracts::shared::envelope::ListPage;
use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;

use super::binding::{BindValue, Binding, ControlKind};
use super::coalesce::{CoalesceOptions, Coalescer};
use super::field::{Field, RecordCell};
use super::mutation::ErrorSink;
use super::pagination;
use super::scheduler::{BrowserScheduler, Scheduler};
use crate::shared::api::{self, ApiError};

/// Quiet period before a burst of filter edits is sent
pub const FILTER_DEBOUNCE_MS: u32 = 300;

/// One issued fetch: its sequence number and the descriptor it carries
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<Q> {
    pub seq: u64,
    pub filter: Q,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryUpdate<T> {
    Applied {
        seq: u64,
        total: u64,
        /// Page the server actually served, when it differs from the request
        reconciled_page: Option<u32>,
        rows: Vec<T>,
    },
    Failed {
        seq: u64,
        error: ApiError,
    },
    /// A newer fetch was issued after this one
    Stale {
        seq: u64,
        latest: u64,
    },
}

pub struct QueryCore<Q> {
    issued: u64,
    settled: u64,
    /// Descriptor produced by page reconciliation; its own change
    /// notification must not start another fetch
    echo: Option<Q>,
}

impl<Q: PagedFilter> Default for QueryCore<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: PagedFilter> QueryCore<Q> {
    pub fn new() -> Self {
        Self {
            issued: 0,
            settled: 0,
            echo: None,
        }
    }

    /// The descriptor changed. `None` when the change is the echo of a
    /// reconciliation.
    pub fn on_filter_changed(&mut self, current: &Q) -> Option<FetchTicket<Q>> {
        if self.echo.take().as_ref() == Some(current) {
            return None;
        }
        Some(self.issue(current))
    }

    /// Fetch again regardless of what changed
    pub fn refresh(&mut self, current: &Q) -> FetchTicket<Q> {
        self.echo = None;
        self.issue(current)
    }

    fn issue(&mut self, current: &Q) -> FetchTicket<Q> {
        self.issued += 1;
        FetchTicket {
            seq: self.issued,
            filter: current.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.settled < self.issued
    }

    pub fn resolve<T>(
        &mut self,
        ticket: &FetchTicket<Q>,
        result: Result<ListPage<T>, ApiError>,
    ) -> QueryUpdate<T> {
        if ticket.seq != self.issued {
            return QueryUpdate::Stale {
                seq: ticket.seq,
                latest: self.issued,
            };
        }
        self.settled = ticket.seq;
        match result {
            Ok(page) => {
                let reconciled_page = (page.page != ticket.filter.page()).then_some(page.page);
                if let Some(served) = reconciled_page {
                    let mut echo = ticket.filter.clone();
                    echo.set_page(served);
                    self.echo = Some(echo);
                }
                QueryUpdate::Applied {
                    seq: ticket.seq,
                    total: page.total,
                    reconciled_page,
                    rows: page.rows,
                }
            }
            Err(error) => QueryUpdate::Failed {
                seq: ticket.seq,
                error,
            },
        }
    }
}

/// Where list pages come from
pub trait ListSource<Q, T>: 'static {
    fn fetch(&self, filter: &Q) -> LocalBoxFuture<'static, Result<ListPage<T>, ApiError>>;
}

/// `POST <collection>/show` on the admin API
pub struct RemoteList<T>(PhantomData<T>);

impl<T> Default for RemoteList<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<Q: PagedFilter, T: ListedRecord> ListSource<Q, T> for RemoteList<T> {
    fn fetch(&self, filter: &Q) -> LocalBoxFuture<'static, Result<ListPage<T>, ApiError>> {
        let filter = filter.clone();
        async move { api::fetch_page::<Q, T>(&filter).await }.boxed_local()
    }
}

/// Descriptor and result state the driver reads and writes
pub trait QueryStore<Q, T>: 'static {
    fn filter(&self) -> Q;
    fn set_page(&self, page: u32);
    fn set_result(&self, total: u64, rows: Vec<T>);
    fn set_loading(&self, loading: bool);
}

pub struct QueryDriver<Q, T, S> {
    core: Rc<RefCell<QueryCore<Q>>>,
    store: Rc<dyn QueryStore<Q, T>>,
    trigger: Coalescer<FetchTicket<Q>, (), Infallible, S>,
}

impl<Q: PagedFilter, T: 'static, S: Scheduler> QueryDriver<Q, T, S> {
    pub fn new(
        scheduler: S,
        wait_ms: u32,
        store: Rc<dyn QueryStore<Q, T>>,
        source: Rc<dyn ListSource<Q, T>>,
        sink: Rc<dyn ErrorSink>,
    ) -> Self {
        let core = Rc::new(RefCell::new(QueryCore::new()));
        let trigger = {
            let core = core.clone();
            let store = store.clone();
            Coalescer::latest(
                scheduler,
                wait_ms,
                CoalesceOptions { leading: true },
                move |ticket: FetchTicket<Q>| {
                    log::debug!("list fetch #{} sent: {:?}", ticket.seq, ticket.filter);
                    let response = source.fetch(&ticket.filter);
                    let core = core.clone();
                    let store = store.clone();
                    let sink = sink.clone();
                    async move {
                        let result = response.await;
                        let update = core.borrow_mut().resolve(&ticket, result);
                        apply_update(update, store.as_ref(), sink.as_ref());
                        Ok::<(), Infallible>(())
                    }
                },
            )
        };
        Self {
            core,
            store,
            trigger,
        }
    }

    /// React to a descriptor edit
    pub fn filter_changed(&self) {
        let current = self.store.filter();
        let ticket = self.core.borrow_mut().on_filter_changed(&current);
        match ticket {
            Some(ticket) => self.send(ticket),
            None => log::debug!("page reconciliation echo swallowed"),
        }
    }

    pub fn refresh(&self) {
        let current = self.store.filter();
        let ticket = self.core.borrow_mut().refresh(&current);
        self.send(ticket);
    }

    fn send(&self, ticket: FetchTicket<Q>) {
        self.store.set_loading(true);
        let _ = self.trigger.call(ticket);
    }
}

fn apply_update<Q: 'static, T: 'static>(update: QueryUpdate<T>, store: &dyn QueryStore<Q, T>, sink: &dyn ErrorSink) {
    match update {
        QueryUpdate::Applied {
            seq,
            total,
            reconciled_page,
            rows,
        } => {
            log::debug!("list fetch #{} applied: {} of {}", seq, rows.len(), total);
            store.set_result(total, rows);
            if let Some(page) = reconciled_page {
                log::debug!("server served page {}", page);
                store.set_page(page);
            }
            store.set_loading(false);
        }
        QueryUpdate::Failed { seq, error } => {
            log::warn!("list fetch #{} failed: {}", seq, error);
            sink.surface(&error);
            store.set_loading(false);
        }
        QueryUpdate::Stale { seq, latest } => {
            log::debug!("list fetch #{} discarded, #{} is newer", seq, latest);
        }
    }
}

/// Reactive list state of one screen
pub struct ListSignals<Q: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub filter: RwSignal<Q>,
    pub rows: RwSignal<Vec<T>>,
    pub total: RwSignal<u64>,
    pub loading: RwSignal<bool>,
}

impl<Q: Send + Sync + 'static, T: Send + Sync + 'static> Clone for ListSignals<Q, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Send + Sync + 'static, T: Send + Sync + 'static> Copy for ListSignals<Q, T> {}

impl<Q, T> QueryStore<Q, T> for ListSignals<Q, T>
where
    Q: PagedFilter + Send + Sync,
    T: Send + Sync + 'static,
{
    fn filter(&self) -> Q {
        self.filter.get_untracked()
    }

    fn set_page(&self, page: u32) {
        self.filter.update(|f| f.set_page(page));
    }

    fn set_result(&self, total: u64, rows: Vec<T>) {
        self.total.set(total);
        self.rows.set(rows);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

pub struct QueryEngine<Q, T, S = BrowserScheduler>
where
    Q: Send + Sync + 'static,
    T: Send + Sync + 'static,
    S: 'static,
{
    pub state: ListSignals<Q, T>,
    driver: StoredValue<QueryDriver<Q, T, S>, LocalStorage>,
}

impl<Q: Send + Sync + 'static, T: Send + Sync + 'static, S: 'static> Clone for QueryEngine<Q, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Send + Sync + 'static, T: Send + Sync + 'static, S: 'static> Copy for QueryEngine<Q, T, S> {}

impl<Q, T> QueryEngine<Q, T>
where
    Q: PagedFilter + Send + Sync,
    T: ListedRecord + Send + Sync,
{
    /// Start with the default descriptor; the first fetch goes out at once
    pub fn new(sink: impl ErrorSink) -> Self {
        Self::with_parts(
            BrowserScheduler,
            Rc::new(RemoteList::<T>::default()),
            Rc::new(sink),
        )
    }

    /// Cell of one displayed row, living as long as the screen
    pub fn row(&self, record: T) -> ListRow<T> {
        ListRow::new(self.state.rows, record)
    }
}

impl<Q, T, S> QueryEngine<Q, T, S>
where
    Q: PagedFilter + Send + Sync,
    T: Send + Sync + 'static,
    S: Scheduler,
{
    pub fn with_parts(scheduler: S, source: Rc<dyn ListSource<Q, T>>, sink: Rc<dyn ErrorSink>) -> Self {
        let state = ListSignals {
            filter: RwSignal::new(Q::default()),
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            loading: RwSignal::new(false),
        };
        let driver = QueryDriver::new(scheduler, FILTER_DEBOUNCE_MS, Rc::new(state), source, sink);
        let driver = StoredValue::new_local(driver);

        Effect::new(move |_| {
            state.filter.track();
            driver.with_value(|d| d.filter_changed());
        });

        Self { state, driver }
    }

    pub fn refresh(&self) {
        self.driver.with_value(|d| d.refresh());
    }

    pub fn go_to_page(&self, page: u32) {
        self.state.filter.update(|f| f.set_page(page.max(1)));
    }

    /// Change the page size, keeping the first visible row on screen
    pub fn resize(&self, per_page: u32) {
        self.state.filter.update(|f| {
            let page = pagination::page_after_resize(f.page(), f.per_page(), per_page);
            f.set_per_page(per_page);
            f.set_page(page);
        });
    }

    pub fn total_pages(&self) -> u32 {
        let per_page = self.state.filter.with(|f| f.per_page());
        pagination::total_pages(self.state.total.get(), per_page)
    }

    /// Binding of one descriptor key
    pub fn bind<V: BindValue>(&self, kind: ControlKind, field: Field<Q, V>) -> Binding {
        let filter = self.state.filter;
        Binding::new(
            kind,
            move || filter.with(|f| field.get(f)),
            move |value| filter.update(|f| field.set(f, value)),
        )
    }
}

/// One row of a screen's list, found by id
///
/// Writes land in the screen's `rows`, so an edit still settles into the list
/// after the card showing the row has unmounted. Once the row has left the
/// list, reads fall back to the record as mounted and writes are dropped.
pub struct ListRow<R: Send + Sync + 'static> {
    rows: RwSignal<Vec<R>>,
    id: i64,
    mounted: Arc<R>,
}

impl<R: Send + Sync + 'static> Clone for ListRow<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            id: self.id,
            mounted: self.mounted.clone(),
        }
    }
}

impl<R: ListedRecord + Send + Sync> ListRow<R> {
    pub fn new(rows: RwSignal<Vec<R>>, record: R) -> Self {
        Self {
            rows,
            id: record.record_id(),
            mounted: Arc::new(record),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// The record as it was when the card mounted
    pub fn mounted(&self) -> &R {
        &self.mounted
    }

    fn find(&self, rows: &[R]) -> Option<R> {
        rows.iter().find(|r| r.record_id() == self.id).cloned()
    }
}

impl<R: ListedRecord + Send + Sync> RecordCell<R> for ListRow<R> {
    fn read<U>(&self, f: impl FnOnce(&R) -> U) -> U {
        let current = self.rows.try_with_untracked(|rows| self.find(rows)).flatten();
        f(current.as_ref().unwrap_or(&self.mounted))
    }

    fn observe<U>(&self, f: impl FnOnce(&R) -> U) -> U {
        let current = self.rows.try_with(|rows| self.find(rows)).flatten();
        f(current.as_ref().unwrap_or(&self.mounted))
    }

    fn write(&self, f: impl FnOnce(&mut R)) {
        let id = self.id;
        self.rows.try_maybe_update(|rows| match rows.iter_mut().find(|r| r.record_id() == id) {
            Some(record) => {
                f(record);
                (true, ())
            }
            None => (false, ()),
        });
    }
}

#[cfg(test)]
mod tests {
    use any_spawner::Executor;
    use futures::channel::oneshot;
    use serde::{Deserialize, Serialize};

    use super::super::scheduler::testing::{ManualScheduler, TestRuntime};
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct TestFilter {
        page: u32,
        per_page: u32,
        name: String,
    }

    impl Default for TestFilter {
        fn default() -> Self {
            Self {
                page: 1,
                per_page: 20,
                name: String::new(),
            }
        }
    }

    impl PagedFilter for TestFilter {
        fn page(&self) -> u32 {
            self.page
        }
        fn set_page(&mut self, page: u32) {
            self.page = page;
        }
        fn per_page(&self) -> u32 {
            self.per_page
        }
        fn set_per_page(&mut self, per_page: u32) {
            self.per_page = per_page;
        }
    }

    type Reply = oneshot::Sender<Result<ListPage<&'static str>, ApiError>>;

    #[derive(Default)]
    struct TestStore {
        filter: RefCell<TestFilter>,
        rows: RefCell<Vec<&'static str>>,
        total: RefCell<u64>,
        loading: RefCell<bool>,
        page_writes: RefCell<u32>,
    }

    impl QueryStore<TestFilter, &'static str> for TestStore {
        fn filter(&self) -> TestFilter {
            self.filter.borrow().clone()
        }
        fn set_page(&self, page: u32) {
            self.filter.borrow_mut().page = page;
            *self.page_writes.borrow_mut() += 1;
        }
        fn set_result(&self, total: u64, rows: Vec<&'static str>) {
            *self.total.borrow_mut() = total;
            *self.rows.borrow_mut() = rows;
        }
        fn set_loading(&self, loading: bool) {
            *self.loading.borrow_mut() = loading;
        }
    }

    #[derive(Default)]
    struct TestSource {
        requests: RefCell<Vec<(TestFilter, Reply)>>,
    }

    impl ListSource<TestFilter, &'static str> for Rc<TestSource> {
        fn fetch(
            &self,
            filter: &TestFilter,
        ) -> LocalBoxFuture<'static, Result<ListPage<&'static str>, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.requests.borrow_mut().push((filter.clone(), tx));
            async move {
                rx.await
                    .unwrap_or_else(|_| Err(ApiError::Transport("dropped".into())))
            }
            .boxed_local()
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<ApiError>>>);

    impl ErrorSink for Recorder {
        fn surface(&self, error: &ApiError) {
            self.0.borrow_mut().push(error.clone());
        }
    }

    struct Harness {
        rt: TestRuntime,
        store: Rc<TestStore>,
        source: Rc<TestSource>,
        sink: Recorder,
        driver: QueryDriver<TestFilter, &'static str, ManualScheduler>,
    }

    impl Harness {
        fn new() -> Self {
            let rt = TestRuntime::new();
            let store = Rc::new(TestStore::default());
            let source = Rc::new(TestSource::default());
            let sink = Recorder::default();
            let driver = QueryDriver::new(
                rt.scheduler(),
                FILTER_DEBOUNCE_MS,
                store.clone(),
                Rc::new(source.clone()),
                Rc::new(sink.clone()),
            );
            Self {
                rt,
                store,
                source,
                sink,
                driver,
            }
        }

        /// Edit the descriptor the way a bound control would, then notify
        /// the driver the way the effect would
        fn edit(&mut self, f: impl FnOnce(&mut TestFilter)) {
            f(&mut self.store.filter.borrow_mut());
            self.driver.filter_changed();
            self.rt.run_until_stalled();
        }

        fn reply(&mut self, index: usize, result: Result<ListPage<&'static str>, ApiError>) {
            let (_, tx) = self.source.requests.borrow_mut().remove(index);
            tx.send(result).unwrap();
            self.rt.run_until_stalled();
        }

        fn request_count(&self) -> usize {
            self.source.requests.borrow().len()
        }
    }

    fn page(total: u64, page: u32, rows: Vec<&'static str>) -> ListPage<&'static str> {
        ListPage { total, page, rows }
    }

    #[test]
    fn test_out_of_range_page_reconciles_without_refetch() {
        let mut h = Harness::new();
        h.edit(|f| f.page = 99);
        assert_eq!(h.request_count(), 1);
        assert_eq!(h.source.requests.borrow()[0].0.page, 99);
        assert!(*h.store.loading.borrow());

        h.reply(0, Ok(page(57, 2, vec!["a", "b"])));
        assert_eq!(h.store.filter.borrow().page, 2);
        assert_eq!(*h.store.rows.borrow(), vec!["a", "b"]);
        assert_eq!(*h.store.total.borrow(), 57);
        assert!(!*h.store.loading.borrow());

        // the page write notifies the driver like any edit would
        h.driver.filter_changed();
        h.rt.advance(1000.0);
        assert_eq!(h.request_count(), 0);

        // a real edit afterwards fetches again
        h.edit(|f| f.page = 1);
        assert_eq!(h.request_count(), 1);
    }

    #[test]
    fn test_burst_of_edits_sends_final_descriptor() {
        let mut h = Harness::new();
        h.edit(|_| {});
        h.reply(0, Ok(page(0, 1, vec![])));

        h.edit(|f| f.name = "a".into());
        assert_eq!(h.request_count(), 0);
        h.rt.advance(100.0);
        h.edit(|f| f.name = "ab".into());
        h.rt.advance(100.0);
        h.edit(|f| f.name = "abc".into());
        h.rt.advance(299.0);
        assert_eq!(h.request_count(), 0);
        h.rt.advance(1.0);
        assert_eq!(h.request_count(), 1);
        assert_eq!(h.source.requests.borrow()[0].0.name, "abc");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut h = Harness::new();
        h.edit(|f| f.name = "old".into());
        h.edit(|f| f.name = "new".into());
        h.rt.advance(FILTER_DEBOUNCE_MS as f64);
        assert_eq!(h.request_count(), 2);

        // newer request settles first
        h.reply(1, Ok(page(1, 1, vec!["new"])));
        h.reply(0, Ok(page(1, 1, vec!["old"])));
        assert_eq!(*h.store.rows.borrow(), vec!["new"]);
        assert!(!*h.store.loading.borrow());
    }

    #[test]
    fn test_failures_keep_previous_rows() {
        let mut h = Harness::new();
        h.edit(|_| {});
        h.reply(0, Ok(page(2, 1, vec!["x", "y"])));

        h.driver.refresh();
        h.rt.advance(FILTER_DEBOUNCE_MS as f64);
        h.reply(0, Err(ApiError::Rejected("maintenance".into())));
        assert_eq!(*h.store.rows.borrow(), vec!["x", "y"]);
        assert_eq!(*h.store.total.borrow(), 2);
        assert!(!*h.store.loading.borrow());

        h.driver.refresh();
        h.rt.advance(FILTER_DEBOUNCE_MS as f64);
        h.reply(0, Err(ApiError::Transport("offline".into())));
        assert_eq!(*h.store.rows.borrow(), vec!["x", "y"]);
        assert_eq!(
            *h.sink.0.borrow(),
            vec![
                ApiError::Rejected("maintenance".into()),
                ApiError::Transport("offline".into())
            ]
        );
        assert_eq!(*h.store.page_writes.borrow(), 0);
    }

    #[test]
    fn test_core_echo_only_swallows_matching_descriptor() {
        let mut core = QueryCore::<TestFilter>::new();
        let requested = TestFilter {
            page: 9,
            ..Default::default()
        };
        let ticket = core.on_filter_changed(&requested).unwrap();
        let update = core.resolve(&ticket, Ok(page(3, 1, vec!["r"])));
        assert!(matches!(update, QueryUpdate::Applied { reconciled_page: Some(1), .. }));

        let other = TestFilter {
            name: "typed meanwhile".into(),
            ..Default::default()
        };
        assert!(core.on_filter_changed(&other).is_some());
        assert!(core.is_loading());
    }

    /// Runs pending effects, then the tasks they started
    fn settle(rt: &mut TestRuntime) {
        Executor::poll_local();
        rt.run_until_stalled();
    }

    #[test]
    fn test_engine_effect_follows_filter_signal() {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.with(|| {
            let mut rt = TestRuntime::new();
            let source = Rc::new(TestSource::default());
            let sink = Recorder::default();
            let engine: QueryEngine<TestFilter, &'static str, ManualScheduler> =
                QueryEngine::with_parts(rt.scheduler(), Rc::new(source.clone()), Rc::new(sink.clone()));

            // first load goes out without waiting
            settle(&mut rt);
            assert_eq!(source.requests.borrow().len(), 1);
            assert!(engine.state.loading.get_untracked());
            let (_, tx) = source.requests.borrow_mut().remove(0);
            tx.send(Ok(page(3, 1, vec!["a", "b", "c"]))).unwrap();
            rt.run_until_stalled();
            assert_eq!(engine.state.rows.get_untracked(), vec!["a", "b", "c"]);
            assert_eq!(engine.state.total.get_untracked(), 3);
            assert!(!engine.state.loading.get_untracked());

            // past the last page: the server serves page 1 and the write-back stays quiet
            engine.go_to_page(7);
            settle(&mut rt);
            rt.advance(FILTER_DEBOUNCE_MS as f64);
            assert_eq!(source.requests.borrow().len(), 1);
            assert_eq!(source.requests.borrow()[0].0.page, 7);
            let (_, tx) = source.requests.borrow_mut().remove(0);
            tx.send(Ok(page(3, 1, vec!["a", "b", "c"]))).unwrap();
            rt.run_until_stalled();
            settle(&mut rt);
            rt.advance(1000.0);
            assert_eq!(engine.state.filter.get_untracked().page, 1);
            assert_eq!(source.requests.borrow().len(), 0);

            engine.state.filter.update(|f| f.name = "x".into());
            settle(&mut rt);
            rt.advance(FILTER_DEBOUNCE_MS as f64);
            assert_eq!(source.requests.borrow().len(), 1);
            assert_eq!(source.requests.borrow()[0].0.name, "x");
            assert!(sink.0.borrow().is_empty());
        });
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    impl ListedRecord for Item {
        const COLLECTION: &'static str = "items";

        fn record_id(&self) -> i64 {
            self.id
        }
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_list_row_writes_into_screen_rows() {
        let owner = Owner::new();
        owner.with(|| {
            let rows = RwSignal::new(vec![item(1, "a"), item(2, "b")]);
            let row = ListRow::new(rows, item(2, "b"));
            let name = Field::new("name", |i: &Item| i.name.clone(), |i, v| i.name = v);

            name.write(&row, "edited".to_string());
            assert_eq!(rows.get_untracked()[1].name, "edited");
            assert_eq!(name.read(&row), "edited");

            // the row left the list
            rows.set(vec![item(1, "a")]);
            assert_eq!(name.read(&row), "b");
            name.write(&row, "lost".to_string());
            assert_eq!(rows.get_untracked(), vec![item(1, "a")]);
        });
    }
}
