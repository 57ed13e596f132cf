//! Classify-and-route domain model

pub mod decision;
pub mod parsing;
