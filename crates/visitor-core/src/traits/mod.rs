//! Ports to the collaborators around the board.

mod printer;
mod source;

pub use printer::{LoggingPassPrinter, PassPrinter};
pub use source::RecordSource;
