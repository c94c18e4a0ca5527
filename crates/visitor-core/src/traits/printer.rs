//! Print-pass port.

use tracing::info;

use crate::Result;
use crate::record::VisitorRecord;

/// Produces a visitor pass for one record.
///
/// The board only guarantees the printer is called with the right record;
/// rendering the pass is the implementor's business.
pub trait PassPrinter {
    /// Print a pass for `record`.
    fn print_pass(&self, record: &VisitorRecord) -> Result<()>;
}

impl<P: PassPrinter + ?Sized> PassPrinter for &P {
    fn print_pass(&self, record: &VisitorRecord) -> Result<()> {
        (**self).print_pass(record)
    }
}

/// Printer that only logs the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPassPrinter;

impl PassPrinter for LoggingPassPrinter {
    fn print_pass(&self, record: &VisitorRecord) -> Result<()> {
        info!(
            id = %record.id,
            name = record.name.as_deref().unwrap_or_default(),
            "Printing pass for: {}",
            record.name.as_deref().unwrap_or("<unnamed visitor>")
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_printer_never_fails() {
        let printer = LoggingPassPrinter;
        assert!(printer.print_pass(&VisitorRecord::new("1")).is_ok());

        let mut named = VisitorRecord::new("2");
        named.name = Some("Alice".to_string());
        assert!((&printer).print_pass(&named).is_ok());
    }
}
