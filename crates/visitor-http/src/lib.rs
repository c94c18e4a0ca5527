//! visitor-http - HTTP-backed record source for the visitor board.

mod client;
mod source;
mod validate;

pub use client::transport_error;
pub use source::HttpRecordSource;
pub use validate::validate_payload;
