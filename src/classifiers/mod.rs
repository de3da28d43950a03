//! This module contains concrete classifier implementations behind a common capability.

use crate::algorithms::knn::Sample;
use crate::utils::ClassifierResult;

pub mod knn;
pub mod som_recognizer;

/// Represents a supervised classifier: anything which can be trained on labeled samples and
/// then asked to label previously unseen values. Callers program against this capability
/// only; concrete variants differ in how much work is paid at training vs classification
/// time.
pub trait Classifier<V, L> {
    /// Trains the classifier on the given data, replacing anything learned before.
    fn train(&mut self, data: &[Sample<V, L>]) -> ClassifierResult<()>;

    /// Returns a label for the given value.
    fn classify(&self, value: &V) -> ClassifierResult<L>;
}
