//! Error types for the visitor board.
//!
//! Fetch failures are split into the three ways a visitor listing can go wrong:
//! the transport failed, the payload had the wrong shape, or the endpoint
//! answered with a markup page instead of data. The board degrades all three
//! to an empty list; the variants exist so hosts can log and test them apart.

use std::fmt;
use thiserror::Error;

/// The unified error type for visitor board operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Retrieving the visitor list failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Input validation errors (endpoint URL, filter date).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The print-pass collaborator reported a failure.
    #[error("print error: {0}")]
    Print(#[from] PrintError),
}

/// Failures while retrieving the visitor list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, connection refused, or a non-success status.
    #[error("transport failure: {message}")]
    Transport {
        /// HTTP status, when the server answered at all.
        status: Option<u16>,
        message: String,
    },

    /// The response parsed but was not a JSON array.
    #[error("unexpected response shape: {message}")]
    Shape { message: String },

    /// The response looks like an HTML document, usually a misconfigured endpoint.
    #[error("received markup instead of JSON (check the endpoint): {snippet}")]
    Markup { snippet: String },
}

impl FetchError {
    /// Returns the category of this failure.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Shape { .. } => FetchErrorKind::Shape,
            FetchError::Markup { .. } => FetchErrorKind::Markup,
        }
    }
}

/// Category of a [`FetchError`], kept by the board after the error itself is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Transport,
    Shape,
    Markup,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchErrorKind::Transport => "transport",
            FetchErrorKind::Shape => "shape",
            FetchErrorKind::Markup => "markup",
        };
        f.write_str(name)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid visitor-listing endpoint URL.
    #[error("invalid endpoint URL '{value}': {reason}")]
    EndpointUrl { value: String, reason: String },

    /// Invalid filter date.
    #[error("invalid date '{value}': {reason}")]
    Date { value: String, reason: String },

    /// A record id that is not on the board.
    #[error("no visitor record with id '{id}'")]
    UnknownRecord { id: String },
}

/// Failure reported by a [`PassPrinter`](crate::PassPrinter).
#[derive(Debug)]
pub struct PrintError {
    /// Name of the visitor the pass was for, if known.
    pub visitor: Option<String>,
    pub message: String,
}

impl PrintError {
    /// Create a new print error.
    pub fn new(visitor: Option<String>, message: impl Into<String>) -> Self {
        Self {
            visitor,
            message: message.into(),
        }
    }
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visitor {
            Some(ref visitor) => write!(f, "pass for {}: {}", visitor, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for PrintError {}
