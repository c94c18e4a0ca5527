//! Core visitor board types.
//!
//! These types enforce their invariants at construction time.

mod endpoint_url;
mod record_id;
mod status;

pub use endpoint_url::EndpointUrl;
pub use record_id::RecordId;
pub use status::{StatusTier, VisitorStatus};
