#[cfg(test)]
#[path = "../../tests/unit/classifiers/som_recognizer_test.rs"]
mod som_recognizer_test;

use super::*;
use crate::algorithms::knn::retrieve_label;
use crate::algorithms::som::{Coordinate, DefaultFactory, SelfOrgMap, SomConfig, WeightedAverager};
use crate::utils::{ClassifierError, Distance, Random};
use rand::prelude::SliceRandom;
use std::hash::Hash;
use std::sync::Arc;

/// Amount of nearest neighbours consulted when assigning a label to a grid cell.
pub const LABELING_K: usize = 11;

/// A classifier which compresses training data into a self organizing map and then labels
/// every grid cell by k-nearest-neighbour voting among the original labeled samples, using
/// the cell's prototype as the query. Classification reduces to a best-matching-unit lookup
/// followed by a label-table read, so the expensive retrieval work is paid once per cell at
/// training time.
///
/// Topology learning is label-agnostic, so the same map can be relabeled cheaply when
/// labels change without retraining the grid.
pub struct SomRecognizer<V, L> {
    som: SelfOrgMap<V>,
    /// Cell labels in the map's scan order, empty until the first successful training.
    labels: Vec<L>,
    distance: Distance<V>,
    random: Arc<dyn Random + Send + Sync>,
}

impl<V, L> SomRecognizer<V, L> {
    /// Creates a new instance of `SomRecognizer`.
    pub fn new(
        config: SomConfig,
        make_default: DefaultFactory<V>,
        distance: Distance<V>,
        averager: WeightedAverager<V>,
        random: Arc<dyn Random + Send + Sync>,
    ) -> Self {
        let som = SelfOrgMap::new(config, make_default, distance.clone(), averager);

        Self { som, labels: Vec::default(), distance, random }
    }

    /// Returns the underlying map.
    pub fn som(&self) -> &SelfOrgMap<V> {
        &self.som
    }
}

impl<V, L> Classifier<V, L> for SomRecognizer<V, L>
where
    V: Clone,
    L: Clone + Hash + Eq,
{
    fn train(&mut self, data: &[Sample<V, L>]) -> ClassifierResult<()> {
        if data.is_empty() {
            return Err(ClassifierError::EmptyCorpus);
        }

        // topology learning: one full pass over the shuffled values, labels ignored
        let mut shuffled = data.to_vec();
        shuffled.shuffle(&mut self.random.get_rng());
        shuffled.iter().for_each(|sample| self.som.train(&sample.value));

        // label assignment: one retrieval per grid cell against the labeled samples
        let (width, height) = (self.som.get_map_width(), self.som.get_map_height());
        let mut labels = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                let prototype = self.som.get_node(x, y);
                labels.push(retrieve_label(prototype, LABELING_K, shuffled.as_slice(), &self.distance)?);
            }
        }
        self.labels = labels;

        Ok(())
    }

    fn classify(&self, value: &V) -> ClassifierResult<L> {
        if self.labels.is_empty() {
            return Err(ClassifierError::EmptyCorpus);
        }

        let Coordinate(x, y) = self.som.best_for(value);

        Ok(self.labels[x * self.som.get_map_width() + y].clone())
    }
}
