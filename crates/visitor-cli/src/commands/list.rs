//! List command implementation.

use anyhow::Result;
use clap::Args;

use crate::board::load_board;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, purpose and contact person
    #[arg(long, short)]
    pub search: Option<String>,

    /// Check-in date (YYYY-MM-DD) used when --filters is given
    #[arg(long)]
    pub date: Option<String>,

    /// Show the auxiliary filters, applying the date filter
    #[arg(long)]
    pub filters: bool,

    /// Output rows as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(endpoint: &str, args: ListArgs) -> Result<()> {
    let board = load_board(endpoint).await?;
    let mut board = board.write().await;

    if let Some(term) = args.search {
        board.set_search_term(term);
    }
    if let Some(date) = &args.date {
        board.set_filter_date_str(date)?;
    }
    if args.filters {
        board.toggle_filters();
    }

    let rows = board.rows();

    if rows.is_empty() {
        output::note("No visitors found.");
        return Ok(());
    }

    if args.json {
        for row in &rows {
            output::json(row)?;
        }
    } else {
        output::table(&rows);
    }

    Ok(())
}
