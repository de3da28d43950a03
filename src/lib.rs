//! This crate provides two supervised classifiers built on a shared k-nearest-neighbour
//! retrieval primitive: a plain k-NN classifier which stores its training set verbatim, and
//! a self-organizing-map based recognizer which compresses training data into a topological
//! grid of prototypes and labels each grid cell by k-NN voting among the original samples.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod classifiers;
pub mod prelude;
pub mod utils;
