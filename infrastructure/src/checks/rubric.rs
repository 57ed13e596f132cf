//! Deterministic rubric quality gate.
//!
//! A [`QualityGate`] implementation that judges content against a fixed
//! rubric: a minimum length and a set of required phrases. Each violation
//! becomes one feedback line, so the refinement loop can feed specific
//! shortcomings back into the regeneration prompt.

use async_trait::async_trait;
use conductor_application::ports::quality_gate::{QualityGate, QualityGateError};
use conductor_domain::QualityAssessment;

/// Rule-based quality gate.
#[derive(Debug, Clone)]
pub struct RubricGate {
    min_length: usize,
    required_phrases: Vec<String>,
}

impl RubricGate {
    pub fn new(min_length: usize, required_phrases: Vec<String>) -> Self {
        Self {
            min_length,
            required_phrases,
        }
    }
}

#[async_trait]
impl QualityGate for RubricGate {
    async fn evaluate(&self, content: &str) -> Result<QualityAssessment, QualityGateError> {
        let mut feedback = Vec::new();
        let trimmed = content.trim();

        if trimmed.is_empty() {
            feedback.push("content is empty".to_string());
        } else if trimmed.len() < self.min_length {
            feedback.push(format!(
                "content is too short: {} bytes, need at least {}",
                trimmed.len(),
                self.min_length
            ));
        }

        let lowered = content.to_lowercase();
        for phrase in &self.required_phrases {
            if !lowered.contains(&phrase.to_lowercase()) {
                feedback.push(format!("missing required phrase: \"{}\"", phrase));
            }
        }

        if feedback.is_empty() {
            Ok(QualityAssessment::pass())
        } else {
            Ok(QualityAssessment::fail(feedback))
        }
    }
}
