use crate::domain::journal::Journal;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SamplerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { path: String, bytes: usize },
    /// `overwrite` was off and no file existed yet.
    Skipped { path: String },
}

impl SaveOutcome {
    pub fn path(&self) -> &str {
        match self {
            SaveOutcome::Written { path, .. } | SaveOutcome::Skipped { path } => path,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, SaveOutcome::Written { .. })
    }
}

/// Writes journals to storage so `Journal` only has to manage entries.
pub struct Persistence<S: Storage> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes the journal followed by a newline when `overwrite` is set or
    /// the file already exists. Any existing content is replaced.
    pub async fn save(
        &self,
        journal: &Journal,
        file_name: &str,
        overwrite: bool,
    ) -> Result<SaveOutcome> {
        let path = self.storage.locate(file_name);

        if !overwrite && !self.storage.exists(file_name).await {
            tracing::debug!("Not saving journal: {} does not exist", path);
            return Ok(SaveOutcome::Skipped { path });
        }

        let content = format!("{}\n", journal);
        self.storage.write_file(file_name, content.as_bytes()).await?;
        tracing::debug!("Saved {} entries to {}", journal.len(), path);

        Ok(SaveOutcome::Written {
            path,
            bytes: content.len(),
        })
    }

    /// Reads a saved journal back, one entry per line. A lone newline is
    /// what an empty journal saves as.
    pub async fn load(&self, file_name: &str) -> Result<Journal> {
        let data = self.storage.read_file(file_name).await?;
        let text = String::from_utf8(data).map_err(|_| SamplerError::InvalidEncoding {
            path: self.storage.locate(file_name),
        })?;
        if text.is_empty() || text == "\n" {
            return Ok(Journal::new());
        }
        Ok(text.lines().collect())
    }
}
