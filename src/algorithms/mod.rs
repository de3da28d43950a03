//! This module contains implementations of the core algorithms.

pub mod knn;
pub mod som;
