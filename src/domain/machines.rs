//! Office devices, first behind one wide `Machine` interface and then behind
//! narrow `Printer`/`Scanner` interfaces that each device picks from.

use crate::domain::document::Document;
use crate::utils::error::{Result, SamplerError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Print,
    Scan,
    Fax,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Print => "print",
            Operation::Scan => "scan",
            Operation::Fax => "fax",
        };
        write!(f, "{}", name)
    }
}

impl Operation {
    pub fn past_tense(&self) -> &'static str {
        match self {
            Operation::Print => "printed",
            Operation::Scan => "scanned",
            Operation::Fax => "faxed",
        }
    }
}

/// Receipt for an operation a device actually performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub device: &'static str,
    pub operation: Operation,
    pub document: String,
}

impl Job {
    fn new(device: &'static str, operation: Operation, document: &Document) -> Self {
        tracing::debug!("{} -> {} '{}'", device, operation, document);
        Self {
            device,
            operation,
            document: document.to_string(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} '{}'",
            self.device,
            self.operation.past_tense(),
            self.document
        )
    }
}

fn unsupported(device: &str, operation: Operation) -> SamplerError {
    SamplerError::UnsupportedOperation {
        device: device.to_string(),
        operation: operation.to_string(),
    }
}

// ---------------------------------------------------------------------------
// One interface for every device
// ---------------------------------------------------------------------------

/// Everything an office machine might do. Every implementor has to answer
/// all three calls, so the signatures carry an error path that only devices
/// lacking a feature ever use.
pub trait Machine {
    fn name(&self) -> &'static str;
    fn print(&self, document: &Document) -> Result<Job>;
    fn fax(&self, document: &Document) -> Result<Job>;
    fn scan(&self, document: &Document) -> Result<Job>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn name(&self) -> &'static str {
        "multi-function printer"
    }

    fn print(&self, document: &Document) -> Result<Job> {
        Ok(Job::new(self.name(), Operation::Print, document))
    }

    fn fax(&self, document: &Document) -> Result<Job> {
        Ok(Job::new(self.name(), Operation::Fax, document))
    }

    fn scan(&self, document: &Document) -> Result<Job> {
        Ok(Job::new(self.name(), Operation::Scan, document))
    }
}

/// Can only print, yet `Machine` makes it answer fax and scan too.
#[derive(Debug, Default, Clone, Copy)]
pub struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn name(&self) -> &'static str {
        "old-fashioned printer"
    }

    fn print(&self, document: &Document) -> Result<Job> {
        Ok(Job::new(self.name(), Operation::Print, document))
    }

    fn fax(&self, _document: &Document) -> Result<Job> {
        Err(unsupported(self.name(), Operation::Fax))
    }

    fn scan(&self, _document: &Document) -> Result<Job> {
        Err(unsupported(self.name(), Operation::Scan))
    }
}

// ---------------------------------------------------------------------------
// Segregated interfaces
// ---------------------------------------------------------------------------

pub trait Printer {
    fn print(&self, document: &Document) -> Job;
}

pub trait Scanner {
    fn scan(&self, document: &Document) -> Job;
}

/// Anything that both prints and scans.
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePrinter;

impl Printer for SimplePrinter {
    fn print(&self, document: &Document) -> Job {
        Job::new("simple printer", Operation::Print, document)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleScanner;

impl Scanner for SimpleScanner {
    fn scan(&self, document: &Document) -> Job {
        Job::new("simple scanner", Operation::Scan, document)
    }
}

/// Implements exactly the two interfaces it needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhotoCopier;

impl Printer for PhotoCopier {
    fn print(&self, document: &Document) -> Job {
        Job::new("photocopier", Operation::Print, document)
    }
}

impl Scanner for PhotoCopier {
    fn scan(&self, document: &Document) -> Job {
        Job::new("photocopier", Operation::Scan, document)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MultiFunctionalDevice;

impl Printer for MultiFunctionalDevice {
    fn print(&self, document: &Document) -> Job {
        Job::new("multi-functional device", Operation::Print, document)
    }
}

impl Scanner for MultiFunctionalDevice {
    fn scan(&self, document: &Document) -> Job {
        Job::new("multi-functional device", Operation::Scan, document)
    }
}

/// Builds a multi-function device out of a separate printer and scanner,
/// forwarding each call to the part that handles it.
#[derive(Debug, Clone)]
pub struct MultiFunctionMachine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultiFunctionMachine<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }
}

impl<P: Printer, S: Scanner> Printer for MultiFunctionMachine<P, S> {
    fn print(&self, document: &Document) -> Job {
        self.printer.print(document)
    }
}

impl<P: Printer, S: Scanner> Scanner for MultiFunctionMachine<P, S> {
    fn scan(&self, document: &Document) -> Job {
        self.scanner.scan(document)
    }
}

/// Prints then scans through any multi-function device.
pub fn copy_through(device: &dyn MultiFunctionDevice, document: &Document) -> [Job; 2] {
    [device.print(document), device.scan(document)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new("report.pdf")
    }

    #[test]
    fn test_multi_function_printer_supports_everything() {
        let mfp = MultiFunctionPrinter;
        assert_eq!(mfp.print(&doc()).unwrap().operation, Operation::Print);
        assert_eq!(mfp.fax(&doc()).unwrap().operation, Operation::Fax);
        assert_eq!(mfp.scan(&doc()).unwrap().operation, Operation::Scan);
    }

    #[test]
    fn test_old_fashioned_printer_rejects_fax_and_scan() {
        let printer = OldFashionedPrinter;
        assert!(printer.print(&doc()).is_ok());

        match printer.fax(&doc()) {
            Err(SamplerError::UnsupportedOperation { device, operation }) => {
                assert_eq!(device, "old-fashioned printer");
                assert_eq!(operation, "fax");
            }
            other => panic!("expected unsupported fax, got {:?}", other),
        }
        assert!(matches!(
            printer.scan(&doc()),
            Err(SamplerError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_photocopier_is_a_multi_function_device() {
        let jobs = copy_through(&PhotoCopier, &doc());
        assert_eq!(jobs[0].device, "photocopier");
        assert_eq!(jobs[0].operation, Operation::Print);
        assert_eq!(jobs[1].operation, Operation::Scan);
    }

    #[test]
    fn test_decorator_delegates_to_parts() {
        let machine = MultiFunctionMachine::new(SimplePrinter, SimpleScanner);
        let jobs = copy_through(&machine, &doc());
        assert_eq!(jobs[0].device, "simple printer");
        assert_eq!(jobs[1].device, "simple scanner");
        assert_eq!(jobs[1].document, "report.pdf");
    }

    #[test]
    fn test_job_display() {
        let job = SimplePrinter.print(&Document::default());
        assert_eq!(job.to_string(), "simple printer printed '<untitled>'");
    }
}
