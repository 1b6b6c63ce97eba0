use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::query::char_len;
use crate::core::record::NameRecord;

/// Maximum number of records accepted from one corpus file
pub const MAX_RECORDS: usize = 2_000_000;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read directory: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse directory: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// One distinct canonical name and everything needed to match and expand it
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    canonical: String,
    folded: String,
    displays: Vec<String>,
}

impl DirectoryEntry {
    fn new(canonical: &str) -> Self {
        Self {
            canonical: canonical.to_string(),
            folded: canonical.to_lowercase(),
            displays: Vec::new(),
        }
    }

    /// Canonical key as it appears in the corpus
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Lower-cased canonical key, the form queries are compared against
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Display variants, shortest first
    pub fn displays(&self) -> &[String] {
        &self.displays
    }
}

/// Immutable point-in-time copy of the name directory.
///
/// Everything derived from the records is built in [`DirectorySnapshot::new`]
/// and never touched again; a refresh builds a whole new snapshot.
#[derive(Debug)]
pub struct DirectorySnapshot {
    /// Records in corpus order
    records: Vec<NameRecord>,

    /// Distinct canonical names in order of first appearance
    entries: Vec<DirectoryEntry>,

    /// Index: canonical -> index in entries vec
    canonical_to_entry: HashMap<String, usize>,

    loaded_at: DateTime<Utc>,

    /// Assigned when the snapshot is published; 0 until then
    version: u64,
}

impl DirectorySnapshot {
    /// Build a snapshot and its derived display map from records.
    ///
    /// Records are normalized first (see [`NameRecord::normalized`]); records
    /// that end up empty are dropped. Display variants of one canonical name
    /// are ordered by length with ties kept in corpus order, and a display
    /// name repeated under the same canonical name is kept once.
    pub fn new(records: impl IntoIterator<Item = NameRecord>) -> Self {
        let mut kept = Vec::new();
        let mut entries: Vec<DirectoryEntry> = Vec::new();
        let mut canonical_to_entry: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for record in records {
            let Some(record) = record.normalized() else {
                skipped += 1;
                continue;
            };

            let index = *canonical_to_entry
                .entry(record.canonical.clone())
                .or_insert_with(|| {
                    entries.push(DirectoryEntry::new(&record.canonical));
                    entries.len() - 1
                });

            let displays = &mut entries[index].displays;
            if !displays.contains(&record.display) {
                displays.push(record.display.clone());
            }
            kept.push(record);
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} directory records with empty names", skipped);
        }

        // Stable sort keeps corpus order among equal lengths
        for entry in &mut entries {
            entry.displays.sort_by_key(|d| char_len(d));
        }

        Self {
            records: kept,
            entries,
            canonical_to_entry,
            loaded_at: Utc::now(),
            version: 0,
        }
    }

    /// Create a snapshot with no records
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse a snapshot from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<NameRecord> = serde_json::from_str(json)?;
        if records.len() > MAX_RECORDS {
            return Err(DirectoryError::TooManyRecords(records.len()));
        }
        Ok(Self::new(records))
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Records in corpus order, after normalization
    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    /// Distinct canonical names with their display variants
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Look up an entry by its canonical key
    pub fn get(&self, canonical: &str) -> Option<&DirectoryEntry> {
        self.canonical_to_entry
            .get(canonical)
            .map(|&idx| &self.entries[idx])
    }

    /// Display variants of a canonical name, shortest first
    pub fn displays(&self, canonical: &str) -> Option<&[String]> {
        self.get(canonical).map(DirectoryEntry::displays)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the snapshot has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct canonical names
    pub fn canonical_count(&self) -> usize {
        self.entries.len()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}

impl Default for DirectorySnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
