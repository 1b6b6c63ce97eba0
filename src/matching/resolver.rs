use std::collections::HashSet;

use crate::core::types::Candidate;
use crate::directory::snapshot::DirectorySnapshot;

/// Lazily expands ranked candidates into display names.
///
/// Each candidate contributes its display variants shortest first. A display
/// name already produced for an earlier candidate is skipped, so the output
/// never repeats a name even when two canonical keys share a variant. Callers
/// truncate with [`Iterator::take`]; nothing past the last name taken is
/// expanded.
pub struct DisplayNames<'a> {
    snapshot: &'a DirectorySnapshot,
    candidates: std::vec::IntoIter<Candidate<'a>>,
    current: std::slice::Iter<'a, String>,
    seen: HashSet<&'a str>,
}

impl<'a> DisplayNames<'a> {
    pub fn new(snapshot: &'a DirectorySnapshot, candidates: Vec<Candidate<'a>>) -> Self {
        Self {
            snapshot,
            candidates: candidates.into_iter(),
            current: Default::default(),
            seen: HashSet::new(),
        }
    }
}

impl<'a> Iterator for DisplayNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(display) = self.current.next() {
                if self.seen.insert(display.as_str()) {
                    return Some(display.as_str());
                }
                continue;
            }

            let candidate = self.candidates.next()?;
            let displays = self.snapshot.displays(candidate.canonical).unwrap_or_default();
            self.current = displays.iter();
        }
    }
}
