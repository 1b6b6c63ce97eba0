use serde::{Deserialize, Serialize};

/// Separator between a person's name and a qualifier in a display name,
/// e.g. `"Ada Lovelace - Mathematician"`.
pub const QUALIFIER_SEPARATOR: &str = " - ";

/// A single entry of the exported directory.
///
/// The serialized form uses the exporter's field names (`name_cleaned` and
/// `name`); `canonical` and `display` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Lookup key used for matching
    #[serde(rename = "name_cleaned", alias = "canonical", default)]
    pub canonical: String,

    /// Human-facing variant returned to callers
    #[serde(rename = "name", alias = "display")]
    pub display: String,
}

impl NameRecord {
    pub fn new(canonical: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            display: display.into(),
        }
    }

    /// Build a record whose canonical key is derived from the display name.
    pub fn from_display(display: impl Into<String>) -> Self {
        let display = display.into();
        let canonical = canonical_from_display(&display).to_string();
        Self { canonical, display }
    }

    /// Trim both fields and fill in a missing canonical key.
    ///
    /// Returns `None` when either field is empty afterwards.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let display = self.display.trim();
        if display.is_empty() {
            return None;
        }

        let canonical = match self.canonical.trim() {
            "" => canonical_from_display(display),
            trimmed => trimmed,
        };
        if canonical.is_empty() {
            return None;
        }

        Some(Self::new(canonical, display))
    }
}

/// Canonical key for a display name: the text before the first qualifier.
#[must_use]
pub fn canonical_from_display(display: &str) -> &str {
    display
        .split(QUALIFIER_SEPARATOR)
        .next()
        .unwrap_or(display)
        .trim()
}
