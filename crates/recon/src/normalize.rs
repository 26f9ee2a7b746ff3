/// A canonical category description, paired with the lower-cased key used
/// for comparison. The display text is what callers get back on a match;
/// the key is never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub display: String,
    pub key: String,
}

/// Strips an optional leading "CODE - " prefix (everything up to the first
/// `" - "`), then trims and lower-cases. No accent folding or punctuation
/// stripping — comparison stays that simple on purpose.
pub fn normalize_key(display: &str) -> String {
    let tail = match display.split_once(" - ") {
        Some((_, rest)) => rest,
        None => display,
    };
    tail.trim().to_lowercase()
}

/// The reference list for one matching pass, built once per batch in input
/// order and immutable thereafter. Absent or blank source cells are skipped.
#[derive(Debug, Clone, Default)]
pub struct ReferenceList {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceList {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let entries = raw
            .into_iter()
            .flatten()
            .filter(|s| !s.as_ref().trim().is_empty())
            .map(|s| ReferenceEntry {
                display: s.as_ref().to_string(),
                key: normalize_key(s.as_ref()),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
