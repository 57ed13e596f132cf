//! Plan-and-dispatch domain model
//!
//! Types and parsers for decomposing an objective into typed tasks and
//! recording their outcomes.

pub mod entities;
pub mod plan_parser;
pub mod value_objects;
