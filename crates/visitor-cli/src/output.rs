//! Output formatting helpers.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use visitor_core::{DetailView, PhotoSlot, RecordRow, StatusTier};

const COLUMNS: [&str; 7] = [
    "ID",
    "Name",
    "Time In",
    "Time Out",
    "Purpose",
    "Contact Person",
    "Status",
];

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a dimmed note on stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Color a status label by its tier.
pub fn status(label: &str, tier: StatusTier) -> ColoredString {
    match tier {
        StatusTier::Warning => label.yellow(),
        StatusTier::Primary => label.blue(),
        StatusTier::Success => label.green(),
        StatusTier::Neutral => label.normal(),
    }
}

/// Print the visitor table.
pub fn table(rows: &[RecordRow]) {
    let cells: Vec<[&str; 7]> = rows
        .iter()
        .map(|r| {
            [
                r.id.as_str(),
                r.name.as_str(),
                r.time_in.as_str(),
                r.time_out.as_str(),
                r.purpose.as_str(),
                r.contact_person.as_str(),
                r.status.as_str(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<w$}", c))
        .collect();
    println!("{}", header.join("  ").bold());

    for (row, cell) in rows.iter().zip(&cells) {
        let mut line: Vec<String> = cell[..6]
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:<w$}", c))
            .collect();
        line.push(status(cell[6], row.tier).to_string());
        println!("{}", line.join("  "));
    }
}

/// Print the detail overlay.
pub fn detail(view: &DetailView) {
    println!("{}", view.title.bold());
    println!();
    match &view.photo {
        PhotoSlot::Image(url) => field("Photo", url),
        PhotoSlot::Placeholder => field("Photo", &view.photo.label().italic().to_string()),
    }
    for (label, value) in &view.fields {
        if *label == "Status" {
            field(label, &status(value, view.tier).to_string());
        } else {
            field(label, value);
        }
    }
}
