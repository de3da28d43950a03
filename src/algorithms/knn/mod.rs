//! Provides bounded top-k nearest-neighbour retrieval with plurality voting.

mod histogram;
pub use self::histogram::*;

mod retrieval;
pub use self::retrieval::*;

/// A labeled training sample: a value paired with its label. Training data is an ordered
/// collection of samples with no uniqueness constraints on either part.
#[derive(Clone, Debug)]
pub struct Sample<V, L> {
    /// A value in the feature space.
    pub value: V,
    /// A label attached to the value.
    pub label: L,
}

impl<V, L> Sample<V, L> {
    /// Creates a new instance of `Sample`.
    pub fn new(value: V, label: L) -> Self {
        Self { value, label }
    }
}
