use std::sync::Arc;

/// A type alias for a used floating point type.
pub type Float = f64;

/// A pairwise distance function over values of `V`: pure, symmetric, total and non-negative
/// over the values it is asked about. Supplied by the caller at classifier construction.
pub type Distance<V> = Arc<dyn Fn(&V, &V) -> Float + Send + Sync>;
