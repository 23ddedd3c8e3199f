// crates/citygrid-core/src/view.rs

//! # View Controller
//!
//! Session state of one city table and the transitions that drive it.
//!
//! [`ViewState`] is a plain value: every change is an event passed through
//! [`ViewState::apply`], which makes the state machine testable without a UI.
//! [`ViewController`] wraps it with a data source, a generation tracker that
//! drops stale responses, and the search-input debouncer.

use crate::config::TableConfig;
use crate::debounce::Debouncer;
use crate::error::{CityError, Result};
use crate::generation::{Generation, GenerationTracker};
use crate::model::{CityColumn, CityRecord};
use crate::paginate::{paginate, Nav, Page, PageState};
use crate::query::QueryRequest;
use crate::sort::{sort, CompareMode, SortKey, SortSpec, SortState};
use crate::source::CitySource;
use serde::Serialize;

/// What the rendering layer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ViewStatus {
    /// A search is in flight.
    Pending,
    /// The last search failed.
    Error { message: String },
    /// The last search succeeded with no matches.
    Empty,
    Ready(PageView),
}

/// The visible page of a successful, non-empty search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub term: String,
    pub sort: Vec<SortKey<CityColumn>>,
    #[serde(flatten)]
    pub page: Page<CityRecord>,
}

/// Input to [`ViewState::apply`].
#[derive(Debug)]
pub enum ViewEvent {
    SearchIssued {
        generation: Generation,
        term: String,
    },
    SearchSettled {
        generation: Generation,
        outcome: Result<Vec<CityRecord>>,
    },
    ToggleSort(CityColumn),
    SetSort(SortSpec<CityColumn>),
    SetPageSize(usize),
    Navigate(Nav),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Pending,
    Failed(String),
    Loaded,
}

/// Session state of one table.
#[derive(Debug, Clone)]
pub struct ViewState {
    term: String,
    sort: SortSpec<CityColumn>,
    page: PageState,
    compare_mode: CompareMode,
    /// Match set in source order.
    matches: Vec<CityRecord>,
    /// `matches` ordered by `sort`.
    ordered: Vec<CityRecord>,
    phase: Phase,
    awaiting: Option<Generation>,
}

impl ViewState {
    pub fn new(config: &TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(ViewState {
            term: String::new(),
            sort: SortSpec::default(),
            page: PageState::new(config.default_page_size)?,
            compare_mode: config.compare_mode,
            matches: Vec::new(),
            ordered: Vec::new(),
            phase: Phase::Pending,
            awaiting: None,
        })
    }

    /// Pure transition: consumes the old state and returns the new one.
    pub fn apply(mut self, event: ViewEvent) -> Result<Self> {
        self.update(event)?;
        Ok(self)
    }

    /// In-place form of [`ViewState::apply`]. Leaves the state untouched on error.
    pub fn update(&mut self, event: ViewEvent) -> Result<()> {
        match event {
            ViewEvent::SearchIssued { generation, term } => self.issue(generation, term),
            ViewEvent::SearchSettled {
                generation,
                outcome,
            } => self.settle(generation, outcome),
            ViewEvent::ToggleSort(column) => self.toggle_sort(column),
            ViewEvent::SetSort(spec) => self.set_sort(spec),
            ViewEvent::SetPageSize(size) => self.page.set_page_size(size)?,
            ViewEvent::Navigate(nav) => self.navigate(nav),
        }
        Ok(())
    }

    fn issue(&mut self, generation: Generation, term: String) {
        self.term = term;
        self.awaiting = Some(generation);
        self.phase = Phase::Pending;
    }

    fn settle(&mut self, generation: Generation, outcome: Result<Vec<CityRecord>>) {
        if self.awaiting != Some(generation) {
            tracing::warn!(?generation, awaiting = ?self.awaiting, "discarding stale search result");
            return;
        }
        self.awaiting = None;
        match outcome {
            Ok(rows) => {
                tracing::info!(?generation, term = %self.term, matches = rows.len(), "search settled");
                self.matches = rows;
                self.resort();
                self.phase = Phase::Loaded;
            }
            Err(e) => {
                tracing::warn!(?generation, error = %e, "search failed");
                self.matches.clear();
                self.ordered.clear();
                self.phase = Phase::Failed(e.to_string());
            }
        }
        self.page.reset();
    }

    fn toggle_sort(&mut self, column: CityColumn) {
        self.sort.toggle(column);
        self.resort();
        self.page.reset();
    }

    fn set_sort(&mut self, spec: SortSpec<CityColumn>) {
        self.sort = spec;
        self.resort();
        self.page.reset();
    }

    fn navigate(&mut self, nav: Nav) {
        self.page.navigate(nav, self.ordered.len());
    }

    fn resort(&mut self) {
        self.ordered = sort(&self.matches, &self.sort, self.compare_mode);
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn sort_spec(&self) -> &SortSpec<CityColumn> {
        &self.sort
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Size of the full match set of the last settled search.
    pub fn match_count(&self) -> usize {
        self.ordered.len()
    }

    pub fn awaiting(&self) -> Option<Generation> {
        self.awaiting
    }

    /// Presentation status derived from the state.
    pub fn status(&self) -> ViewStatus {
        match &self.phase {
            Phase::Pending => ViewStatus::Pending,
            Phase::Failed(message) => ViewStatus::Error {
                message: message.clone(),
            },
            Phase::Loaded if self.ordered.is_empty() => ViewStatus::Empty,
            Phase::Loaded => match paginate(&self.ordered, self.page.page(), self.page.page_size()) {
                Ok(page) => ViewStatus::Ready(PageView {
                    term: self.term.clone(),
                    sort: self.sort.keys().to_vec(),
                    page,
                }),
                // PageState keeps page >= 1 and size > 0.
                Err(e) => ViewStatus::Error {
                    message: e.to_string(),
                },
            },
        }
    }
}

/// A search that has been issued but not yet settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTicket {
    pub generation: Generation,
    pub request: QueryRequest,
}

/// Drives one table session against a [`CitySource`].
///
/// Searches run in two steps so the fetch can happen anywhere in between:
/// [`begin_search`](Self::begin_search) issues a ticket and enters `Pending`,
/// [`settle`](Self::settle) applies the outcome if the ticket is still the
/// newest. [`search`](Self::search) does both synchronously.
pub struct ViewController<S> {
    source: S,
    config: TableConfig,
    state: ViewState,
    tracker: GenerationTracker,
    debouncer: Debouncer,
}

impl<S: CitySource> ViewController<S> {
    pub fn new(source: S, config: TableConfig) -> Result<Self> {
        let state = ViewState::new(&config)?;
        let debouncer = Debouncer::new(config.debounce_ms);
        Ok(ViewController {
            source,
            config,
            state,
            tracker: GenerationTracker::new(),
            debouncer,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> ViewStatus {
        self.state.status()
    }

    /// Issues a new search generation for `term` and enters `Pending`.
    ///
    /// The returned ticket carries the request for the full match set.
    pub fn begin_search(&mut self, term: impl Into<String>) -> SearchTicket {
        let term = term.into();
        let generation = self.tracker.issue();
        let request = QueryRequest::new(term.clone()).with_limit(self.config.query_limit);
        tracing::debug!(?generation, term = %term, "search issued");
        self.state.issue(generation, term);
        SearchTicket {
            generation,
            request,
        }
    }

    /// Runs the ticket's request against the source.
    pub fn fetch(&self, ticket: &SearchTicket) -> Result<Vec<CityRecord>> {
        self.source.fetch(&ticket.request)
    }

    /// Applies a search outcome. Returns `false` if it was stale and dropped.
    pub fn settle(&mut self, generation: Generation, outcome: Result<Vec<CityRecord>>) -> bool {
        if !self.tracker.try_settle(generation) {
            tracing::warn!(?generation, latest = ?self.tracker.latest(), "dropping stale search result");
            return false;
        }
        self.state.settle(generation, outcome);
        true
    }

    /// Marks the search as failed with a source error message.
    pub fn fail(&mut self, generation: Generation, message: impl std::fmt::Display) -> bool {
        self.settle(generation, Err(CityError::query_source(message)))
    }

    /// Issues, fetches and settles a search in one go.
    pub fn search(&mut self, term: impl Into<String>) -> ViewStatus {
        let ticket = self.begin_search(term);
        let outcome = self.fetch(&ticket);
        self.settle(ticket.generation, outcome);
        self.view()
    }

    /// Feeds a raw search-box value into the debouncer.
    pub fn input(&mut self, term: impl Into<String>, now_ms: u64) {
        self.debouncer.input(term, now_ms);
    }

    /// Advances the debounce clock; issues a search once the input settles.
    ///
    /// The caller fetches and settles the returned ticket.
    pub fn tick(&mut self, now_ms: u64) -> Option<SearchTicket> {
        let term = self.debouncer.poll(now_ms)?;
        Some(self.begin_search(term))
    }

    /// Next debounce deadline, if an input is waiting.
    pub fn next_deadline(&self) -> Option<u64> {
        self.debouncer.deadline()
    }

    pub fn toggle_sort(&mut self, column: CityColumn) -> SortState {
        self.state.toggle_sort(column);
        self.state.sort_spec().state_of(column)
    }

    pub fn set_sort(&mut self, spec: SortSpec<CityColumn>) {
        self.state.set_sort(spec);
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.state.update(ViewEvent::SetPageSize(page_size))
    }

    /// Moves between pages; `false` when already at the boundary.
    pub fn navigate(&mut self, nav: Nav) -> bool {
        let before = self.state.page_state().page();
        self.state.navigate(nav);
        self.state.page_state().page() != before
    }

    pub fn first(&mut self) -> bool {
        self.navigate(Nav::First)
    }

    pub fn previous(&mut self) -> bool {
        self.navigate(Nav::Previous)
    }

    pub fn next(&mut self) -> bool {
        self.navigate(Nav::Next)
    }

    pub fn last(&mut self) -> bool {
        self.navigate(Nav::Last)
    }

    /// Teardown: cancels the debounce timer and abandons the in-flight search.
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
        self.tracker.abandon();
        tracing::debug!("view controller disposed");
    }
}
