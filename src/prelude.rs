//! This module re-exports commonly used types.

pub use crate::algorithms::knn::{retrieve_label, Histogram, Sample};
pub use crate::algorithms::som::{
    Coordinate, DefaultFactory, SelfOrgMap, SomConfig, WeightedAverager,
};
pub use crate::classifiers::knn::KnnClassifier;
pub use crate::classifiers::som_recognizer::{SomRecognizer, LABELING_K};
pub use crate::classifiers::Classifier;
pub use crate::utils::{
    compare_floats, ClassifierError, ClassifierResult, DefaultRandom, Distance, Float, Random,
    RandomGen,
};
