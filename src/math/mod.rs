//! Mathematical utilities: the logistic link used by the classifier.

pub mod logistic;

pub use logistic::*;
