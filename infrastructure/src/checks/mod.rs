//! Quality gate implementations

mod rubric;

pub use rubric::RubricGate;
