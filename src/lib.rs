//! # name-resolver
//!
//! A library for resolving typed name fragments into known person names.
//!
//! Autocomplete over a directory of people has to cope with partial input
//! ("joh"), reordered words ("smith john"), and typos ("jon smth"), and a
//! single person is often known under several display names ("John Smith",
//! "J. Smith").
//!
//! `name-resolver` matches the query against each person's canonical name
//! through a cascade of increasingly loose tiers and expands every match into
//! its display variants.
//!
//! ## Features
//!
//! - **Tiered matching**: exact, prefix, whole-word, substring, word-score and fuzzy
//! - **Deterministic ranking**: fixed tier order with explicit tie-breaks
//! - **Display expansion**: shortest variants first, no duplicates across matches
//! - **Hot reload**: directory snapshots are swapped atomically, and a failed
//!   reload keeps the last good one
//!
//! ## Example
//!
//! ```rust
//! use name_resolver::{DirectoryHandle, DirectorySnapshot, NameRecord};
//!
//! let snapshot = DirectorySnapshot::new(vec![
//!     NameRecord::new("john smith", "John Smith"),
//!     NameRecord::new("john smith", "J. Smith"),
//! ]);
//! let directory = DirectoryHandle::with_snapshot(snapshot);
//!
//! let names = directory.search("smith john", 10, 40.0).unwrap();
//! assert_eq!(names, ["J. Smith", "John Smith"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Name records, tiers and query normalization
//! - [`directory`]: Directory snapshots, loading and refresh
//! - [`matching`]: Matching engine and scoring
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Autocomplete HTTP server

pub mod cli;
pub mod core;
pub mod directory;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::record::NameRecord;
pub use crate::core::types::{Candidate, Tier};
pub use directory::{DirectoryHandle, DirectorySnapshot};
pub use matching::engine::{MatchingConfig, MatchingEngine, SearchError};
