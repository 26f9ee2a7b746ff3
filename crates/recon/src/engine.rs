use crate::normalize::{ReferenceEntry, ReferenceList};
use crate::score::{partial_ratio, token_sort_ratio};

/// Outcome of matching one raw description. `Matched` carries the winning
/// reference entry's original display text, code prefix and all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Matched(String),
    Unmatched,
}

impl MatchResult {
    pub fn as_matched(&self) -> Option<&str> {
        match self {
            MatchResult::Matched(text) => Some(text),
            MatchResult::Unmatched => None,
        }
    }
}

/// How candidates are compared. `Scored` is the normal fuzzy mode;
/// `ExactOnly` is the degraded fallback — case-insensitive equality against
/// each key, first hit wins, no scoring or threshold. Chosen once at
/// construction so callers stay agnostic to which is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Scored,
    ExactOnly,
}

pub struct ReconEngine {
    pub strategy: Strategy,
    /// Minimum score for descriptions shorter than `length_boundary`.
    pub simple_threshold: u8,
    /// Minimum score for descriptions at or past `length_boundary`.
    pub complex_threshold: u8,
    pub length_boundary: usize,
}

impl Default for ReconEngine {
    fn default() -> Self {
        Self {
            strategy: Strategy::Scored,
            simple_threshold: 85,
            complex_threshold: 75,
            length_boundary: 20,
        }
    }
}

impl ReconEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy, ..Self::default() }
    }

    /// Degraded fallback engine: exact, case-insensitive equality only.
    pub fn exact_only() -> Self {
        Self::new(Strategy::ExactOnly)
    }

    /// Matches one raw description against the reference list.
    ///
    /// Absent or blank descriptions are defined behavior, not errors: they
    /// yield `Unmatched` without any scoring. Purely functional — the same
    /// inputs always produce the same result.
    pub fn match_one(&self, raw: Option<&str>, refs: &ReferenceList) -> MatchResult {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return MatchResult::Unmatched;
        };

        let best = match self.strategy {
            Strategy::Scored => self.best_scored(raw, refs),
            Strategy::ExactOnly => self.first_exact(raw, refs),
        };

        match best {
            Some(entry) => MatchResult::Matched(entry.display.clone()),
            None => MatchResult::Unmatched,
        }
    }

    /// Matches a whole batch, index-aligned with the input. Each row is
    /// independent of every other row.
    pub fn match_batch<S: AsRef<str>>(
        &self,
        raws: &[Option<S>],
        refs: &ReferenceList,
    ) -> Vec<MatchResult> {
        raws.iter()
            .map(|raw| self.match_one(raw.as_ref().map(|s| s.as_ref()), refs))
            .collect()
    }

    fn best_scored<'a>(&self, raw: &str, refs: &'a ReferenceList) -> Option<&'a ReferenceEntry> {
        let length = raw.chars().count();

        // Two independent reads of the same length, on purpose: a 20-char
        // description is "simple" for algorithm choice yet gets the lenient
        // complex threshold.
        let complex = length > self.length_boundary || raw.contains(',');
        let threshold = if length < self.length_boundary {
            self.simple_threshold
        } else {
            self.complex_threshold
        };

        let mut best: Option<&ReferenceEntry> = None;
        let mut highest = 0u8;

        for entry in refs.entries() {
            let score = if complex {
                token_sort_ratio(raw, &entry.key)
            } else {
                partial_ratio(raw, &entry.key)
            };
            // Strictly greater: equal scores never displace an earlier
            // candidate, so reference order decides ties.
            if score > highest && score >= threshold {
                highest = score;
                best = Some(entry);
            }
        }

        best
    }

    fn first_exact<'a>(&self, raw: &str, refs: &'a ReferenceList) -> Option<&'a ReferenceEntry> {
        let needle = raw.to_lowercase();
        // Keys are already trimmed and lower-cased. A key→entry map would
        // make this O(rows + references), but lists here are small.
        refs.entries().iter().find(|entry| entry.key == needle)
    }
}
