use crate::domain::document::Document;
use crate::domain::machines::{
    copy_through, Machine, MultiFunctionMachine, MultiFunctionPrinter, MultiFunctionalDevice,
    OldFashionedPrinter, PhotoCopier, Printer, SimplePrinter, SimpleScanner,
};
use crate::domain::model::{DemoReport, Principle};
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct InterfaceSegregationDemo {
    document: Document,
}

impl InterfaceSegregationDemo {
    pub fn new(document_title: &str) -> Self {
        Self {
            document: Document::new(document_title),
        }
    }

    fn run_machine(&self, machine: &dyn Machine, report: &mut DemoReport) {
        let attempts = [
            machine.print(&self.document),
            machine.fax(&self.document),
            machine.scan(&self.document),
        ];
        for attempt in attempts {
            match attempt {
                Ok(job) => report.line(job.to_string()),
                // Devices without the feature end up here.
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.line(format!("{} (error: {})", machine.name(), e));
                }
            }
        }
    }
}

#[async_trait]
impl Demonstration for InterfaceSegregationDemo {
    fn principle(&self) -> Principle {
        Principle::InterfaceSegregation
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.principle());

        report.line("One Machine interface for every device:");
        self.run_machine(&MultiFunctionPrinter, &mut report);
        self.run_machine(&OldFashionedPrinter, &mut report);

        report.line("Segregated Printer and Scanner interfaces:");
        report.line(SimplePrinter.print(&self.document).to_string());
        for job in copy_through(&PhotoCopier, &self.document) {
            report.line(job.to_string());
        }
        for job in copy_through(&MultiFunctionalDevice, &self.document) {
            report.line(job.to_string());
        }

        report.line("Decorated from a separate printer and scanner:");
        let machine = MultiFunctionMachine::new(SimplePrinter, SimpleScanner);
        for job in copy_through(&machine, &self.document) {
            report.line(job.to_string());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_report_lists_failures_and_delegation() {
        let demo = InterfaceSegregationDemo::new("memo.txt");
        let report = demo.run().await.unwrap();

        assert_eq!(report.principle, Principle::InterfaceSegregation);
        assert!(report
            .lines
            .contains(&"multi-function printer faxed 'memo.txt'".to_string()));
        assert!(report.lines.contains(
            &"old-fashioned printer (error: old-fashioned printer does not support fax)"
                .to_string()
        ));
        assert!(report
            .lines
            .contains(&"photocopier scanned 'memo.txt'".to_string()));

        let tail: Vec<&str> = report.lines.iter().rev().take(2).map(String::as_str).collect();
        assert_eq!(
            tail,
            vec!["simple scanner scanned 'memo.txt'", "simple printer printed 'memo.txt'"]
        );
    }
}
