//! Question/answer catalog
//!
//! The catalog is loaded once at startup from a JSON file of
//! `{ "input": ..., "output": ... }` objects, followed by the built-in
//! greeting entries. It is never mutated afterwards.

pub mod builtin;
pub mod loader;

pub use builtin::builtin_entries;
pub use loader::load_catalog;
pub use loader::parse_entries;

use serde::Deserialize;
use serde::Serialize;

/// One known question and the answer returned for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered, read-only list of catalog entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<QaEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<QaEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QaEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    /// Question texts in catalog order
    pub fn questions(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.question.clone()).collect()
    }
}
