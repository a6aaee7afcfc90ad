//! Classification — domain heuristic, sensitivity resolution, and the
//! category classifier.

pub mod classifier;
pub mod domain;
pub mod sensitivity;

pub use classifier::{CategorySet, Classifier};
pub use domain::DomainHeuristic;
pub use sensitivity::resolve_strictness;
