#[cfg(test)]
#[path = "../../../tests/unit/algorithms/knn/histogram_test.rs"]
mod histogram_test;

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Counts label occurrences and resolves the plurality winner (the mode).
///
/// Ties on the highest count are broken by first occurrence: among tied labels, the one
/// whose first `bump` happened earliest wins. This makes resolution deterministic given
/// the order in which labels are recorded.
#[derive(Clone, Debug)]
pub struct Histogram<L> {
    counts: FxHashMap<L, LabelStats>,
    bumps: usize,
}

#[derive(Clone, Debug)]
struct LabelStats {
    count: usize,
    first_seen: usize,
}

impl<L> Default for Histogram<L> {
    fn default() -> Self {
        Self { counts: FxHashMap::default(), bumps: 0 }
    }
}

impl<L: Hash + Eq> Histogram<L> {
    /// Records one occurrence of the given label.
    pub fn bump(&mut self, label: L) {
        let first_seen = self.bumps;
        self.counts
            .entry(label)
            .and_modify(|stats| stats.count += 1)
            .or_insert(LabelStats { count: 1, first_seen });
        self.bumps += 1;
    }

    /// Returns amount of occurrences recorded for the given label.
    pub fn count(&self, label: &L) -> usize {
        self.counts.get(label).map_or(0, |stats| stats.count)
    }

    /// Returns the label with the highest occurrence count, or `None` if nothing was
    /// recorded. Ties are broken in favour of the label seen first.
    pub fn plurality_winner(&self) -> Option<&L> {
        self.counts
            .iter()
            .min_by_key(|(_, stats)| (std::cmp::Reverse(stats.count), stats.first_seen))
            .map(|(label, _)| label)
    }

    /// Checks whether the histogram has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
