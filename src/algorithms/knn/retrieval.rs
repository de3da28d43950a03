#[cfg(test)]
#[path = "../../../tests/unit/algorithms/knn/retrieval_test.rs"]
mod retrieval_test;

use super::*;
use crate::utils::{compare_floats, ClassifierError, ClassifierResult, Distance, Float};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// An ephemeral retrieval candidate: a distance to the query paired with the label of the
/// corpus entry which produced it. Ordered by distance only.
#[derive(Clone, Debug)]
pub(crate) struct Candidate<L> {
    pub distance: Float,
    pub label: L,
}

impl<L> PartialEq for Candidate<L> {
    fn eq(&self, other: &Self) -> bool {
        compare_floats(self.distance, other.distance) == Ordering::Equal
    }
}

impl<L> Eq for Candidate<L> {}

impl<L> PartialOrd for Candidate<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L> Ord for Candidate<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(self.distance, other.distance)
    }
}

/// A bounded max-oriented collection which keeps the `limit` smallest-distance candidates
/// seen so far: every insert past the limit evicts the current largest-distance candidate.
pub(crate) struct NearestSet<L> {
    limit: usize,
    heap: BinaryHeap<Candidate<L>>,
}

impl<L> NearestSet<L> {
    pub fn new(limit: usize) -> Self {
        Self { limit, heap: BinaryHeap::with_capacity(limit + 1) }
    }

    /// Inserts a candidate, evicting the largest-distance one if the limit is exceeded.
    /// When several candidates share the boundary distance, the evicted one is whichever
    /// the heap currently reports as largest.
    pub fn insert(&mut self, candidate: Candidate<L>) {
        self.heap.push(candidate);
        if self.heap.len() > self.limit {
            self.heap.pop();
        }
    }

    pub fn into_labels(self) -> impl Iterator<Item = L> {
        self.heap.into_iter().map(|candidate| candidate.label)
    }
}

/// Returns the plurality label among the `k` corpus entries closest to `query`.
///
/// Runs in O(n log k) over a corpus of size n. When `k` is not smaller than the corpus,
/// no eviction occurs and the result is the plurality label of the entire corpus. Vote
/// resolution, including tie-breaks, is delegated entirely to [`Histogram`].
pub fn retrieve_label<V, L>(
    query: &V,
    k: usize,
    corpus: &[Sample<V, L>],
    distance: &Distance<V>,
) -> ClassifierResult<L>
where
    L: Clone + Hash + Eq,
{
    if corpus.is_empty() {
        return Err(ClassifierError::EmptyCorpus);
    }

    let mut nearest = NearestSet::new(k);
    corpus.iter().for_each(|sample| {
        nearest.insert(Candidate { distance: distance(query, &sample.value), label: sample.label.clone() });
    });

    let mut histogram = Histogram::default();
    nearest.into_labels().for_each(|label| histogram.bump(label));

    histogram.plurality_winner().cloned().ok_or(ClassifierError::EmptyVote)
}
