//! Show command implementation.

use anyhow::{Context, Result};
use clap::Args;

use visitor_core::{LoggingPassPrinter, RecordId};

use crate::board::load_board;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Visitor record id
    pub id: String,

    /// Print a pass for the visitor after showing it
    #[arg(long)]
    pub print: bool,

    /// Pretty-print the detail view as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(endpoint: &str, args: ShowArgs) -> Result<()> {
    let board = load_board(endpoint).await?;
    let mut board = board.write().await;

    let id = RecordId::new(args.id);
    board.view(&id).context("Visitor not found")?;

    let detail = board.detail().context("Visitor detail is not open")?;
    if args.json {
        output::json_pretty(&detail)?;
    } else {
        output::detail(&detail);
    }

    if args.print && board.print_selected(&LoggingPassPrinter)? {
        println!();
        output::success("Pass sent to printer");
    }

    board.close();
    Ok(())
}
