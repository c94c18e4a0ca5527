//! Print command implementation.

use anyhow::{Context, Result};
use clap::Args;

use visitor_core::{LoggingPassPrinter, RecordId};

use crate::board::load_board;
use crate::output;

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Visitor record id
    pub id: String,
}

pub async fn run(endpoint: &str, args: PrintArgs) -> Result<()> {
    let board = load_board(endpoint).await?;
    let board = board.read().await;

    let id = RecordId::new(args.id);
    board
        .print_row(&id, &LoggingPassPrinter)
        .context("Failed to print pass")?;

    output::success(&format!("Pass sent to printer for visitor {}", id));
    Ok(())
}
