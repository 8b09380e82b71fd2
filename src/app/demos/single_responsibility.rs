use crate::app::persistence::{Persistence, SaveOutcome};
use crate::config::toml_config::JournalConfig;
use crate::domain::journal::Journal;
use crate::domain::model::{DemoReport, Principle};
use crate::domain::ports::{Demonstration, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct SingleResponsibilityDemo<S: Storage> {
    persistence: Persistence<S>,
    config: JournalConfig,
}

impl<S: Storage> SingleResponsibilityDemo<S> {
    pub fn new(storage: S, config: JournalConfig) -> Self {
        Self {
            persistence: Persistence::new(storage),
            config,
        }
    }
}

#[async_trait]
impl<S: Storage> Demonstration for SingleResponsibilityDemo<S> {
    fn principle(&self) -> Principle {
        Principle::SingleResponsibility
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.principle());

        let mut journal = Journal::new();
        for entry in &self.config.entries {
            journal.add_entry(entry.as_str());
        }
        for line in journal.entries() {
            report.line(line.clone());
        }

        let outcome = self
            .persistence
            .save(&journal, &self.config.file_name, self.config.overwrite)
            .await?;

        match &outcome {
            SaveOutcome::Written { path, bytes } => {
                tracing::info!("💾 Journal saved to {} ({} bytes)", path, bytes);
                report.line(format!("Saved {} entries to {}", journal.len(), path));
            }
            SaveOutcome::Skipped { path } => {
                tracing::info!("⏭️ Journal not saved: {} does not exist", path);
                report.line(format!("Skipped saving: {} does not exist", path));
            }
        }

        Ok(report)
    }
}
