#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/map_test.rs"]
mod map_test;

use super::*;
use crate::utils::{compare_floats, Distance};
use std::cmp::Ordering;

/// Coordinate of a node in the grid.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Coordinate(pub usize, pub usize);

/// Self organizing map configuration.
pub struct SomConfig {
    /// A side length of the square grid.
    pub map_side: usize,
    /// Initial learning rate, decays exponentially as training proceeds.
    pub learning_rate: Float,
    /// Initial neighbourhood radius, decays exponentially down to a floor of 1.
    pub radius: Float,
    /// A time constant controlling how fast learning rate and radius decay.
    pub time_constant: Float,
}

impl SomConfig {
    /// Creates an instance of `SomConfig` using default parameters for the given grid side.
    pub fn new_with_defaults(map_side: usize) -> Self {
        Self {
            map_side,
            learning_rate: 0.1,
            radius: (map_side as Float / 2.).max(1.),
            time_constant: 100.,
        }
    }
}

/// A square grid of prototype values trained by competitive learning: each training call
/// pulls the best-matching prototype and a shrinking neighbourhood around it toward the
/// sample. Grid dimensions never change after construction and every cell always holds a
/// valid prototype.
pub struct SelfOrgMap<V> {
    side: usize,
    /// Prototypes in scan order: cell (x, y) lives at `x * side + y`.
    nodes: Vec<V>,
    distance: Distance<V>,
    averager: WeightedAverager<V>,
    learning_rate: Float,
    radius: Float,
    time_constant: Float,
    time: usize,
}

impl<V> SelfOrgMap<V> {
    /// Creates a new instance of `SelfOrgMap` with every cell populated from the factory.
    pub fn new(
        config: SomConfig,
        make_default: DefaultFactory<V>,
        distance: Distance<V>,
        averager: WeightedAverager<V>,
    ) -> Self {
        assert!(config.map_side > 0);
        assert!(config.learning_rate > 0. && config.radius > 0. && config.time_constant > 0.);

        let nodes = (0..config.map_side * config.map_side).map(|_| make_default()).collect();

        Self {
            side: config.map_side,
            nodes,
            distance,
            averager,
            learning_rate: config.learning_rate,
            radius: config.radius,
            time_constant: config.time_constant,
            time: 0,
        }
    }

    /// Trains the map on a single sample: locates the best matching node, then pulls it and
    /// its neighbourhood toward the sample. The pull strength attenuates with Chebyshev grid
    /// distance from the best matching node and decays with overall training progress, so
    /// repeated calls produce monotonically shrinking updates.
    pub fn train(&mut self, sample: &V) {
        let Coordinate(best_x, best_y) = self.best_for(sample);

        let progress = self.time as Float / self.time_constant;
        let rate = self.learning_rate * (-progress).exp();
        let radius = (self.radius * (-progress).exp()).max(1.);
        let reach = radius.floor() as usize;

        let x_range = best_x.saturating_sub(reach)..=(best_x + reach).min(self.side - 1);
        for x in x_range {
            let y_range = best_y.saturating_sub(reach)..=(best_y + reach).min(self.side - 1);
            for y in y_range {
                let grid_distance = best_x.abs_diff(x).max(best_y.abs_diff(y)) as Float;
                let weight = rate * (-(grid_distance * grid_distance) / (2. * radius * radius)).exp();

                let idx = x * self.side + y;
                let updated = (self.averager)(&self.nodes[idx], sample, weight);
                self.nodes[idx] = updated;
            }
        }

        self.time += 1;
    }

    /// Finds the best matching node for the given value: the cell whose prototype minimizes
    /// the distance to it. Ties resolve to the first minimum in scan order. Does not mutate
    /// any state.
    pub fn best_for(&self, value: &V) -> Coordinate {
        let mut best = Coordinate(0, 0);
        let mut best_distance = (self.distance)(value, &self.nodes[0]);

        for x in 0..self.side {
            for y in 0..self.side {
                if (x, y) == (0, 0) {
                    continue;
                }

                let distance = (self.distance)(value, &self.nodes[x * self.side + y]);
                if compare_floats(distance, best_distance) == Ordering::Less {
                    best = Coordinate(x, y);
                    best_distance = distance;
                }
            }
        }

        best
    }

    /// Returns the current prototype at the given grid position.
    pub fn get_node(&self, x: usize, y: usize) -> &V {
        &self.nodes[x * self.side + y]
    }

    /// Returns width of the grid.
    pub fn get_map_width(&self) -> usize {
        self.side
    }

    /// Returns height of the grid (equal to width, the grid is square).
    pub fn get_map_height(&self) -> usize {
        self.side
    }

    /// Returns amount of training calls seen so far.
    pub fn get_current_time(&self) -> usize {
        self.time
    }
}
