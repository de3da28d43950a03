#[cfg(test)]
#[path = "../../tests/unit/classifiers/knn_test.rs"]
mod knn_test;

use super::*;
use crate::algorithms::knn::retrieve_label;
use crate::utils::{ClassifierError, Distance};
use std::hash::Hash;

/// A k-nearest-neighbour classifier which stores the full training set and re-runs
/// retrieval against it for every query.
pub struct KnnClassifier<V, L> {
    k: usize,
    distance: Distance<V>,
    data: Vec<Sample<V, L>>,
}

impl<V, L> KnnClassifier<V, L> {
    /// Creates a new instance of `KnnClassifier`. A zero neighbour count is rejected here
    /// rather than surfacing as an empty vote at classification time.
    pub fn new(k: usize, distance: Distance<V>) -> ClassifierResult<Self> {
        if k == 0 {
            return Err(ClassifierError::ZeroK);
        }

        Ok(Self { k, distance, data: Vec::default() })
    }
}

impl<V, L> Classifier<V, L> for KnnClassifier<V, L>
where
    V: Clone,
    L: Clone + Hash + Eq,
{
    fn train(&mut self, data: &[Sample<V, L>]) -> ClassifierResult<()> {
        self.data = data.to_vec();

        Ok(())
    }

    fn classify(&self, value: &V) -> ClassifierResult<L> {
        retrieve_label(value, self.k, self.data.as_slice(), &self.distance)
    }
}
