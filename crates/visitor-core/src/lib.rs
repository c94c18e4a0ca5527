//! visitor-core - Visitor check-in records: model, filtering and selection.
//!
//! A [`VisitorBoard`] holds one session's worth of state: the list fetched
//! from a [`RecordSource`], the search and date filters, and the record open
//! in the detail view. Rendering and printing are left to the host, reached
//! through the derived views in [`view`] and the [`PassPrinter`] port.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use visitor_core::{RecordId, VisitorBoard, VisitorRecord};
//!
//! let mut board = VisitorBoard::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
//! let records: Vec<VisitorRecord> = serde_json::from_str(
//!     r#"[{"id": 1, "name": "Alice", "purpose": "Delivery", "contactPerson": "Bob"}]"#,
//! ).unwrap();
//! board.apply_fetch(Ok(records));
//!
//! board.set_search_term("bob");
//! assert_eq!(board.rows().len(), 1);
//!
//! board.view(&RecordId::from("1")).unwrap();
//! assert!(board.detail().is_some());
//! ```

pub mod board;
pub mod error;
pub mod filter;
pub mod record;
pub mod selection;
pub mod traits;
pub mod types;
pub mod view;

pub use board::{LoadState, SharedBoard, VisitorBoard, load_into, spawn_load};
pub use error::{Error, FetchError, FetchErrorKind, InvalidInputError, PrintError};
pub use filter::{FilterCriteria, filter_by_search, matches_search};
pub use record::VisitorRecord;
pub use selection::Selection;
pub use traits::{LoggingPassPrinter, PassPrinter, RecordSource};
pub use types::{EndpointUrl, RecordId, StatusTier, VisitorStatus};
pub use view::{DetailView, PhotoSlot, RecordRow};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
