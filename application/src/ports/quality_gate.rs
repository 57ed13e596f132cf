//! Quality gate port for the refinement loop.
//!
//! A gate is a predicate over generated content. Each concrete
//! generate-evaluate-refine setup supplies its own implementation. The port
//! is async so gates that call out (an LLM judge, a linter) fit the same
//! seam as pure rule-based ones.

use async_trait::async_trait;
use conductor_domain::QualityAssessment;
use thiserror::Error;

/// A fault in the gate itself, as opposed to a failing assessment.
///
/// Fatal to the whole refinement loop: if the gate cannot judge, the loop
/// has no basis to continue or to stop successfully.
#[derive(Error, Debug)]
pub enum QualityGateError {
    #[error("Quality gate fault: {0}")]
    Fault(String),
}

/// Predicate judging whether generated content is acceptable.
#[async_trait]
pub trait QualityGate: Send + Sync {
    /// Evaluate content, returning a verdict with feedback lines for any
    /// shortcomings. `Err` means the gate itself faulted, not that the
    /// content failed.
    async fn evaluate(&self, content: &str) -> Result<QualityAssessment, QualityGateError>;
}
