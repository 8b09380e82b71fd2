use crate::utils::error::{Result, SamplerError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of text entries. Saving lives in `Persistence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns its index.
    pub fn add_entry(&mut self, text: impl Into<String>) -> usize {
        self.entries.push(text.into());
        self.entries.len() - 1
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(SamplerError::EntryOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Journal {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("\n"))
    }
}
