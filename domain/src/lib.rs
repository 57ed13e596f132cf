//! Domain layer for agent-conductor
//!
//! This crate contains the core coordination entities, value objects, and
//! parsers. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! Three coordination patterns share one worker lifecycle:
//!
//! - **Plan-and-dispatch**: an objective is decomposed into a [`Plan`] of
//!   typed [`Task`]s, each executed by the worker matching its
//!   [`WorkerKind`]; outcomes accumulate in [`OrchestrationState`].
//! - **Classify-and-route**: a query is classified into one
//!   [`RouteDecision`] and handled by exactly one category worker.
//! - **Generate-evaluate-refine**: content is regenerated under a turn
//!   budget until a quality gate's [`QualityAssessment`] passes.

pub mod core;
pub mod dispatch;
pub mod prompt;
pub mod quality;
pub mod routing;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use dispatch::{
    entities::{OrchestrationState, Plan, Task},
    plan_parser::parse_plan,
    value_objects::{RunId, TaskId, TaskOutcome, WorkerKind},
};
pub use prompt::{DispatchPromptTemplate, RefinePromptTemplate, RoutePromptTemplate};
pub use quality::QualityAssessment;
pub use routing::{
    decision::{RouteCategory, RouteDecision},
    parsing::parse_route_decision,
};
