//! Provides builders shared by unit tests.

#[macro_use]
pub mod macros;

use crate::algorithms::knn::Sample;
use crate::algorithms::som::{DefaultFactory, SomConfig, WeightedAverager};
use crate::classifiers::som_recognizer::SomRecognizer;
use crate::utils::{DefaultRandom, Distance, Float, Random};
use std::sync::Arc;

pub fn create_test_random() -> Arc<dyn Random + Send + Sync> {
    Arc::new(DefaultRandom::default())
}

/// Absolute difference distance over scalar values.
pub fn scalar_distance() -> Distance<Float> {
    Arc::new(|a: &Float, b: &Float| (a - b).abs())
}

/// Linear interpolation averager: weight 0 keeps the first argument, weight 1 returns the second.
pub fn scalar_averager() -> WeightedAverager<Float> {
    Arc::new(|a: &Float, b: &Float, weight: Float| a + (b - a) * weight)
}

pub fn constant_factory(value: Float) -> DefaultFactory<Float> {
    Arc::new(move || value)
}

/// Creates a labeled corpus from (value, label) pairs.
pub fn create_labeled(entries: &[(Float, &str)]) -> Vec<Sample<Float, String>> {
    entries.iter().map(|(value, label)| Sample::new(*value, label.to_string())).collect()
}

pub fn create_test_recognizer(map_side: usize, initial: Float) -> SomRecognizer<Float, String> {
    SomRecognizer::new(
        SomConfig::new_with_defaults(map_side),
        constant_factory(initial),
        scalar_distance(),
        scalar_averager(),
        create_test_random(),
    )
}
