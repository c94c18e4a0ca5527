//! Board loading for CLI commands.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::debug;

use visitor_core::{EndpointUrl, SharedBoard, VisitorBoard, spawn_load};
use visitor_http::HttpRecordSource;

/// Create a board and run its one-shot fetch against `endpoint`.
///
/// Fetch failures do not fail the command; the board is simply empty.
pub async fn load_board(endpoint: &str) -> Result<SharedBoard> {
    let endpoint = EndpointUrl::new(endpoint).context("Invalid endpoint URL")?;
    let source = HttpRecordSource::new(endpoint).context("Failed to create HTTP client")?;

    debug!(endpoint = %source.endpoint(), "Loading visitor board");
    let board = VisitorBoard::new(Local::now().date_naive()).into_shared();
    // Failed fetches leave the board empty; only a panicked task errors here
    spawn_load(Arc::new(source), &board)
        .await
        .context("Visitor load task failed")?;

    Ok(board)
}
