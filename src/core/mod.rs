//! Core data types for name resolution.
//!
//! - [`NameRecord`]: one (canonical, display) pair from the exported directory
//! - [`Tier`], [`Candidate`]: cascade stages and the transient per-query matches
//! - [`normalize_query`]: query folding applied before any matching
//!
//! ## Canonical vs. display names
//!
//! | Canonical      | Display                          |
//! |----------------|----------------------------------|
//! | `john smith`   | `John Smith`                     |
//! | `john smith`   | `J. Smith`                       |
//! | `ada lovelace` | `Ada Lovelace - Mathematician`   |
//!
//! Matching only ever looks at canonical names. Display names are what the
//! caller gets back, several per canonical name.

pub mod query;
pub mod record;
pub mod types;

pub use query::normalize_query;
pub use record::NameRecord;
pub use types::{Candidate, Tier};
