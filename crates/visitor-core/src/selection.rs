//! Detail-view selection state machine.
//!
//! At most one record is open at a time. `view` opens (or switches to) a
//! record, `close` returns to [`Selection::Closed`], and printing never
//! changes the state.

use tracing::debug;

use crate::Result;
use crate::record::VisitorRecord;
use crate::traits::PassPrinter;
use crate::types::RecordId;

/// Which record, if any, is open in the detail view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Closed,
    Open(VisitorRecord),
}

impl Selection {
    /// Open `record`, replacing any record already open.
    pub fn view(&mut self, record: VisitorRecord) {
        debug!(id = %record.id, "Opening visitor detail");
        *self = Selection::Open(record);
    }

    /// Close the detail view.
    pub fn close(&mut self) {
        if let Selection::Open(record) = self {
            debug!(id = %record.id, "Closing visitor detail");
        }
        *self = Selection::Closed;
    }

    /// The open record.
    pub fn record(&self) -> Option<&VisitorRecord> {
        match self {
            Selection::Open(record) => Some(record),
            Selection::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// Whether the record with `id` is the one open.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.record().is_some_and(|r| &r.id == id)
    }

    /// Print a pass for the open record.
    ///
    /// Returns `Ok(false)` without calling the printer when nothing is open.
    pub fn print<P: PassPrinter>(&self, printer: &P) -> Result<bool> {
        match self.record() {
            Some(record) => {
                printer.print_pass(record)?;
                Ok(true)
            }
            None => {
                debug!("Print requested with no visitor open; ignoring");
                Ok(false)
            }
        }
    }
}
