//! Catalog file loading

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::builtin_entries;
use super::Catalog;
use super::QaEntry;
use crate::errors::FaqBotError;
use crate::errors::Result;

/// On-disk entry shape
#[derive(Debug, Deserialize)]
struct RawEntry {
    input: String,
    output: String,
}

impl From<RawEntry> for QaEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            question: raw.input,
            answer: raw.output,
        }
    }
}

/// Load the catalog file and append the built-in entries.
///
/// A missing file yields only the built-ins. Any malformed entry fails the
/// whole load.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();

    let mut entries = match std::fs::read_to_string(path) {
        Ok(content) => {
            let entries = parse_entries(&content)?;
            info!(
                "📚 Loaded {} catalog entries from {}",
                entries.len(),
                path.display()
            );
            entries
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Catalog file {} not found, continuing with built-in entries only",
                path.display()
            );
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let builtins = builtin_entries();
    debug!("Appending {} built-in entries", builtins.len());
    entries.extend(builtins);

    Ok(Catalog::new(entries))
}

/// Parse catalog file content into entries, in file order.
///
/// The content must be a JSON array whose elements are objects with string
/// `input` and `output` fields. Extra fields are ignored.
pub fn parse_entries(content: &str) -> Result<Vec<QaEntry>> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let serde_json::Value::Array(items) = value else {
        return Err(FaqBotError::InvalidCatalog(
            "top-level value must be a JSON array".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<RawEntry>(item)
                .map(QaEntry::from)
                .map_err(|e| FaqBotError::MalformedEntry {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect()
}
