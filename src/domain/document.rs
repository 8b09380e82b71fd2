use serde::{Deserialize, Serialize};
use std::fmt;

/// A document handed to printers and scanners. It carries a title so job
/// receipts have something to show; devices never look inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "<untitled>")
        } else {
            write!(f, "{}", self.title)
        }
    }
}
