//! Provides a fixed-size Self Organizing Map trained by competitive learning.

use crate::utils::Float;
use std::sync::Arc;

mod map;
pub use self::map::*;

/// A weighted averager over values of `V`: returns a point interpolated between its two
/// arguments by the given weight. Weight 0 returns the first argument, weight 1 the second,
/// and averaging a value with itself returns that value at any weight. Used to pull a grid
/// prototype toward a training sample by a learning-rate-scaled amount.
pub type WeightedAverager<V> = Arc<dyn Fn(&V, &V, Float) -> V + Send + Sync>;

/// A factory producing the initial value for every grid cell before training begins.
pub type DefaultFactory<V> = Arc<dyn Fn() -> V + Send + Sync>;
