//! Session state of one visitor board.
//!
//! [`VisitorBoard`] owns the fetched list, the search and date filters, and
//! the detail selection. All mutation goes through its methods. Loading is
//! split out into [`load_into`] and [`spawn_load`], which hold only a weak
//! handle while the fetch is in flight so a board dropped mid-fetch is never
//! written to.

use std::sync::{Arc, Weak};

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::error::{FetchError, FetchErrorKind, InvalidInputError};
use crate::filter::FilterCriteria;
use crate::record::VisitorRecord;
use crate::selection::Selection;
use crate::traits::{PassPrinter, RecordSource};
use crate::types::RecordId;
use crate::view::{DetailView, RecordRow};

/// Date format accepted by [`VisitorBoard::set_filter_date_str`].
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Progress of the one-shot fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<VisitorRecord>),
    Failed(FetchErrorKind),
}

impl LoadState {
    /// Records to display. Empty unless loaded.
    pub fn records(&self) -> &[VisitorRecord] {
        match self {
            LoadState::Loaded(records) => records,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }
}

/// A board shared between the host and an in-flight load.
pub type SharedBoard = Arc<RwLock<VisitorBoard>>;

/// State container for one visitor board session.
#[derive(Debug, Clone)]
pub struct VisitorBoard {
    load: LoadState,
    search_term: String,
    filter_date: NaiveDate,
    filters_visible: bool,
    selection: Selection,
}

impl VisitorBoard {
    /// Create an empty board whose date filter starts at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            load: LoadState::Loading,
            search_term: String::new(),
            filter_date: today,
            filters_visible: false,
            selection: Selection::Closed,
        }
    }

    /// Wrap the board for use with [`spawn_load`].
    pub fn into_shared(self) -> SharedBoard {
        Arc::new(RwLock::new(self))
    }

    // ------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------

    /// Replace the record list with a fetch outcome.
    ///
    /// Failures are logged and leave the list empty. If the open record is
    /// not in the new list, the detail view is closed.
    pub fn apply_fetch(&mut self, outcome: std::result::Result<Vec<VisitorRecord>, FetchError>) {
        self.load = match outcome {
            Ok(records) => {
                info!(count = records.len(), "Visitor records loaded");
                LoadState::Loaded(records)
            }
            Err(err) => {
                warn!(error = %err, kind = %err.kind(), "Failed to load visitor records");
                LoadState::Failed(err.kind())
            }
        };

        let stale = self
            .selection
            .record()
            .is_some_and(|open| self.find(&open.id).is_none());
        if stale {
            debug!("Open visitor no longer present; closing detail");
            self.selection.close();
        }
    }

    /// All fetched records in server order.
    pub fn records(&self) -> &[VisitorRecord] {
        self.load.records()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    fn find(&self, id: &RecordId) -> Option<&VisitorRecord> {
        self.records().iter().find(|r| &r.id == id)
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_filter_date(&mut self, date: NaiveDate) {
        self.filter_date = date;
    }

    /// Set the date filter from a `YYYY-MM-DD` string.
    pub fn set_filter_date_str(&mut self, raw: &str) -> Result<()> {
        let date = NaiveDate::parse_from_str(raw.trim(), FILTER_DATE_FORMAT).map_err(|e| {
            InvalidInputError::Date {
                value: raw.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.filter_date = date;
        Ok(())
    }

    pub fn filter_date(&self) -> NaiveDate {
        self.filter_date
    }

    /// Show or hide the auxiliary filter panel. The date filter only applies
    /// while the panel is shown.
    pub fn toggle_filters(&mut self) {
        self.filters_visible = !self.filters_visible;
    }

    pub fn filters_visible(&self) -> bool {
        self.filters_visible
    }

    /// Criteria currently in force.
    pub fn criteria(&self) -> FilterCriteria<'_> {
        FilterCriteria {
            search_term: &self.search_term,
            date: self.filters_visible.then_some(self.filter_date),
        }
    }

    /// Records passing the current filters, in server order.
    pub fn visible_records(&self) -> Vec<&VisitorRecord> {
        self.criteria().apply(self.records())
    }

    /// Table rows for the visible records.
    pub fn rows(&self) -> Vec<RecordRow> {
        self.visible_records()
            .into_iter()
            .map(RecordRow::from)
            .collect()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Open the detail view for the record with `id`.
    pub fn view(&mut self, id: &RecordId) -> Result<&VisitorRecord> {
        let record = self
            .find(id)
            .cloned()
            .ok_or_else(|| InvalidInputError::UnknownRecord { id: id.to_string() })?;
        self.selection.view(record);
        self.selected()
            .ok_or_else(|| InvalidInputError::UnknownRecord { id: id.to_string() }.into())
    }

    /// Open the detail view for `record`, which must be on the board.
    pub fn select(&mut self, record: &VisitorRecord) -> Result<()> {
        self.view(&record.id).map(|_| ())
    }

    /// Close the detail view.
    pub fn close(&mut self) {
        self.selection.close();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<&VisitorRecord> {
        self.selection.record()
    }

    /// Detail view of the open record.
    pub fn detail(&self) -> Option<DetailView> {
        self.selected().map(DetailView::from)
    }

    // ------------------------------------------------------------------
    // Printing
    // ------------------------------------------------------------------

    /// Print a pass for a row, without touching the selection.
    pub fn print_row<P: PassPrinter>(&self, id: &RecordId, printer: &P) -> Result<()> {
        let record = self
            .find(id)
            .ok_or_else(|| InvalidInputError::UnknownRecord { id: id.to_string() })?;
        printer.print_pass(record)
    }

    /// Print a pass for the open record. `Ok(false)` if nothing is open.
    pub fn print_selected<P: PassPrinter>(&self, printer: &P) -> Result<bool> {
        self.selection.print(printer)
    }
}

/// Fetch once from `source` and apply the outcome to `board` if it still exists.
///
/// Returns `false` when the board was dropped before the fetch finished and
/// the outcome was discarded.
#[instrument(skip_all)]
pub async fn load_into<S>(source: &S, board: Weak<RwLock<VisitorBoard>>) -> bool
where
    S: RecordSource + ?Sized,
{
    let outcome = source.fetch_all().await;

    let Some(board) = board.upgrade() else {
        debug!("Board dropped before fetch completed; discarding result");
        return false;
    };

    board.write().await.apply_fetch(outcome);
    true
}

/// Start the one-shot load on the tokio runtime.
pub fn spawn_load<S>(source: Arc<S>, board: &SharedBoard) -> JoinHandle<bool>
where
    S: RecordSource + ?Sized + 'static,
{
    let board = Arc::downgrade(board);
    tokio::spawn(async move { load_into(source.as_ref(), board).await })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::traits::LoggingPassPrinter;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn alice_list() -> Vec<VisitorRecord> {
        serde_json::from_value(json!([{
            "id": 1, "name": "Alice", "purpose": "Delivery", "contactPerson": "Bob",
            "status": "active", "timeIn": "09:00", "timeOut": ""
        }]))
        .unwrap()
    }

    fn loaded(records: Vec<VisitorRecord>) -> VisitorBoard {
        let mut board = VisitorBoard::new(today());
        board.apply_fetch(Ok(records));
        board
    }

    struct StaticSource {
        records: Vec<VisitorRecord>,
        delay: Duration,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecordSource for StaticSource {
        async fn fetch_all(&self) -> std::result::Result<Vec<VisitorRecord>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(self.records.clone())
        }
    }

    #[test]
    fn starts_loading_and_empty() {
        let board = VisitorBoard::new(today());
        assert_eq!(board.load_state(), &LoadState::Loading);
        assert!(board.records().is_empty());
        assert!(board.rows().is_empty());
        assert_eq!(board.search_term(), "");
        assert!(!board.filters_visible());
        assert_eq!(board.filter_date(), today());
    }

    #[test]
    fn search_scenario() {
        let mut board = loaded(alice_list());

        board.set_search_term("ali");
        assert_eq!(board.rows().len(), 1);
        assert_eq!(board.rows()[0].name, "Alice");

        board.set_search_term("bob");
        assert_eq!(board.rows().len(), 1);

        board.set_search_term("zzz");
        assert!(board.rows().is_empty());
    }

    #[test]
    fn failed_fetch_degrades_to_empty() {
        let mut board = VisitorBoard::new(today());
        board.apply_fetch(Err(FetchError::Markup {
            snippet: "<!doctype html>".to_string(),
        }));
        assert_eq!(board.load_state(), &LoadState::Failed(FetchErrorKind::Markup));
        assert!(board.records().is_empty());
        assert!(board.visible_records().is_empty());
    }

    #[test]
    fn date_filter_is_inert_until_panel_shown() {
        let records: Vec<VisitorRecord> = serde_json::from_value(json!([
            {"id": "a", "name": "Ann", "timeIn": "2026-10-16T08:00:00Z"},
            {"id": "b", "name": "Ben", "timeIn": "2026-10-15T08:00:00Z"},
            {"id": "c", "name": "Cat", "timeIn": "08:00"}
        ]))
        .unwrap();
        let mut board = loaded(records);

        assert_eq!(board.visible_records().len(), 3);

        board.toggle_filters();
        let ids: Vec<&str> = board.visible_records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a"]);

        board.set_filter_date_str("2026-10-15").unwrap();
        let ids: Vec<&str> = board.visible_records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b"]);

        board.toggle_filters();
        assert_eq!(board.visible_records().len(), 3);
    }

    #[test]
    fn bad_filter_date_is_rejected_and_kept() {
        let mut board = VisitorBoard::new(today());
        let err = board.set_filter_date_str("16/10/2026").unwrap_err();
        assert!(err.to_string().contains("invalid date"));
        assert_eq!(board.filter_date(), today());
    }

    #[test]
    fn view_close_cycle() {
        let mut board = loaded(alice_list());
        let id = RecordId::from("1");

        let opened = board.view(&id).unwrap();
        assert_eq!(opened.name.as_deref(), Some("Alice"));
        assert!(board.detail().is_some());

        board.close();
        assert_eq!(board.selection(), &Selection::Closed);
        assert!(board.detail().is_none());
    }

    #[test]
    fn view_unknown_record_fails_and_keeps_state() {
        let mut board = loaded(alice_list());
        board.view(&RecordId::from("1")).unwrap();

        assert!(board.view(&RecordId::from("99")).is_err());
        assert!(board.selection().is_selected(&RecordId::from("1")));
    }

    #[test]
    fn view_switches_directly() {
        let records: Vec<VisitorRecord> =
            serde_json::from_value(json!([{"id": 1}, {"id": 2}])).unwrap();
        let mut board = loaded(records.clone());

        board.select(&records[0]).unwrap();
        board.select(&records[1]).unwrap();
        assert_eq!(board.selected(), Some(&records[1]));
    }

    #[test]
    fn detail_placeholder_for_missing_photo() {
        let mut board = loaded(alice_list());
        board.view(&RecordId::from("1")).unwrap();
        let detail = board.detail().unwrap();
        assert_eq!(detail.photo, crate::view::PhotoSlot::Placeholder);
    }

    #[test]
    fn refresh_clears_selection_of_vanished_record() {
        let mut board = loaded(alice_list());
        board.view(&RecordId::from("1")).unwrap();

        board.apply_fetch(Ok(alice_list()));
        assert!(board.selected().is_some());

        board.apply_fetch(Ok(Vec::new()));
        assert!(board.selected().is_none());
    }

    #[test]
    fn print_row_and_selected() {
        let mut board = loaded(alice_list());
        let id = RecordId::from("1");

        board.print_row(&id, &LoggingPassPrinter).unwrap();
        assert!(board.selected().is_none());
        assert!(board.print_row(&RecordId::from("2"), &LoggingPassPrinter).is_err());

        assert!(!board.print_selected(&LoggingPassPrinter).unwrap());
        board.view(&id).unwrap();
        assert!(board.print_selected(&LoggingPassPrinter).unwrap());
        assert!(board.selection().is_selected(&id));
    }

    #[derive(Default)]
    struct RecordingPrinter {
        printed: std::cell::RefCell<Vec<RecordId>>,
    }

    impl PassPrinter for RecordingPrinter {
        fn print_pass(&self, record: &VisitorRecord) -> Result<()> {
            self.printed.borrow_mut().push(record.id.clone());
            Ok(())
        }
    }

    #[test]
    fn printer_receives_exact_record() {
        let records: Vec<VisitorRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bea"}
        ]))
        .unwrap();
        let mut board = loaded(records);
        let first = RecordId::from("1");
        let second = RecordId::from("2");
        board.view(&first).unwrap();
        let before = board.selection().clone();

        let printer = RecordingPrinter::default();
        board.print_row(&second, &printer).unwrap();
        assert!(board.print_selected(&printer).unwrap());

        assert_eq!(*printer.printed.borrow(), vec![second, first]);
        assert_eq!(board.selection(), &before);
    }

    #[tokio::test]
    async fn spawn_load_applies_result_once() {
        let source = Arc::new(StaticSource {
            records: alice_list(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        });
        let board = VisitorBoard::new(today()).into_shared();

        assert!(spawn_load(source.clone(), &board).await.unwrap());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(board.read().await.records().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_board_discards_late_result() {
        let source = Arc::new(StaticSource {
            records: alice_list(),
            delay: Duration::from_secs(5),
            calls: AtomicUsize::new(0),
        });
        let board = VisitorBoard::new(today()).into_shared();

        let handle = spawn_load(source, &board);
        drop(board);

        assert!(!handle.await.unwrap());
    }
}
