//! Generate-evaluate-refine use case.
//!
//! Bounded iterative controller alternating generation and quality-gate
//! evaluation:
//!
//! ```text
//! GENERATING -> EVALUATING -> DONE
//!                  |  ^
//!                  v  |
//!              REGENERATING
//! ```
//!
//! The loop exits on a passing assessment or on budget exhaustion — nothing
//! else. One candidate is in flight at a time, so gate feedback always
//! describes the actual most recent attempt.

use crate::config::RefineParams;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::GatewayError;
use crate::ports::quality_gate::{QualityGate, QualityGateError};
use crate::workers::Worker;
use conductor_domain::{QualityAssessment, RefinePromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a refinement run.
#[derive(Error, Debug)]
pub enum RefineError {
    /// The gate itself faulted — not a failed-quality result. Fatal.
    #[error("Quality gate error: {0}")]
    QualityGate(#[from] QualityGateError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result of a refinement run — always returned on normal exit, even when
/// the budget ran out, so the caller can decide whether a non-passing
/// result is usable. Inspect `quality.passes` to distinguish a genuine pass
/// from an exhausted-budget stop.
#[derive(Debug, Clone)]
pub struct RefineOutcome {
    pub content: String,
    pub quality: QualityAssessment,
    /// Regeneration attempts actually used (0 = first attempt passed)
    pub turns_used: usize,
}

/// Use case running the bounded refinement loop.
pub struct RefineUseCase {
    generator: Arc<Worker>,
    gate: Arc<dyn QualityGate>,
    params: RefineParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RefineUseCase {
    pub fn new(
        generator: Arc<Worker>,
        gate: Arc<dyn QualityGate>,
        params: RefineParams,
        conversation_logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        Self {
            generator,
            gate,
            params,
            conversation_logger,
        }
    }

    /// Run the loop: generate once, then regenerate under the turn budget
    /// until the gate passes.
    pub async fn execute(&self, input: &str) -> Result<RefineOutcome, RefineError> {
        let mut content = self
            .generator
            .run(&RefinePromptTemplate::generate(input))
            .await?;
        let mut quality = self.gate.evaluate(&content).await?;
        let mut turns_used = 0;

        self.log_turn(turns_used, &quality);

        while !quality.passes && turns_used < self.params.max_turns {
            turns_used += 1;
            debug!(
                turn = turns_used,
                max = self.params.max_turns,
                feedback_lines = quality.feedback.len(),
                "regenerating"
            );

            content = self
                .generator
                .run(&RefinePromptTemplate::regenerate(input, &content, &quality))
                .await?;
            quality = self.gate.evaluate(&content).await?;

            self.log_turn(turns_used, &quality);
        }

        info!(
            passes = quality.passes,
            turns_used,
            "refinement finished"
        );
        self.conversation_logger.log(ConversationEvent::new(
            "refine_complete",
            serde_json::json!({
                "passes": quality.passes,
                "turns_used": turns_used,
                "content_bytes": content.len(),
            }),
        ));

        Ok(RefineOutcome {
            content,
            quality,
            turns_used,
        })
    }

    fn log_turn(&self, turn: usize, quality: &QualityAssessment) {
        self.conversation_logger.log(ConversationEvent::new(
            "refine_turn",
            serde_json::json!({
                "turn": turn,
                "passes": quality.passes,
                "feedback": quality.feedback,
            }),
        ));
    }
}
