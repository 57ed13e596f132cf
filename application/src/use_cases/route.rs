//! Classify-and-route use case.
//!
//! A single schema-constrained classifier call picks exactly one category,
//! then exactly one specialized handler answers the raw query. Single-shot:
//! there is no re-classification if the handler's answer is unsatisfying —
//! that concern belongs to the refinement loop, composed on top if desired.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::GatewayError;
use crate::workers::{Worker, WorkerPool};
use conductor_domain::{
    DomainError, RouteCategory, RouteDecision, RoutePromptTemplate, parse_route_decision,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// User-visible response when classification produces nothing usable.
///
/// A routing failure is surfaced as a response, not a thrown fault; no
/// default category is silently assumed.
pub const ROUTING_FAILED_RESPONSE: &str =
    "Routing failed: we could not determine who should handle your request. \
     Please try rephrasing it.";

/// Errors that can occur during a routing run.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Routing failed: classifier produced no usable category")]
    ClassificationFailed,

    #[error("No handler registered for category '{0}' and no general fallback")]
    NoHandler(RouteCategory),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of a routing run: the handler's response paired with the chosen
/// category. `category` is `None` exactly when classification failed and
/// the routing-failed response was returned instead.
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub category: Option<RouteCategory>,
    pub response: String,
}

/// Use case composing the router with the category worker pool.
pub struct RouteUseCase {
    classifier: Arc<Worker>,
    pool: Arc<WorkerPool>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RouteUseCase {
    pub fn new(
        classifier: Arc<Worker>,
        pool: Arc<WorkerPool>,
        conversation_logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        Self {
            classifier,
            pool,
            conversation_logger,
        }
    }

    /// Classify a query into exactly one [`RouteDecision`].
    ///
    /// Unparseable or unenumerated classifier output is a
    /// [`RouteError::ClassificationFailed`], never coerced to a default.
    pub async fn classify(&self, query: &str) -> Result<RouteDecision, RouteError> {
        let response = self
            .classifier
            .run(&RoutePromptTemplate::classify(query))
            .await?;

        parse_route_decision(&response).ok_or(RouteError::ClassificationFailed)
    }

    /// Run the whole pattern: classify, then dispatch to one handler.
    pub async fn execute(&self, query: &str) -> Result<RouteOutcome, RouteError> {
        if query.trim().is_empty() {
            return Err(DomainError::EmptyQuery.into());
        }

        let decision = match self.classify(query).await {
            Ok(decision) => decision,
            Err(RouteError::ClassificationFailed) => {
                warn!("classification produced no usable category");
                self.conversation_logger.log(ConversationEvent::new(
                    "route_failed",
                    serde_json::json!({ "query_bytes": query.len() }),
                ));
                return Ok(RouteOutcome {
                    category: None,
                    response: ROUTING_FAILED_RESPONSE.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        info!(category = %decision.category, "query classified");
        self.conversation_logger.log(ConversationEvent::new(
            "route_decision",
            serde_json::json!({
                "category": decision.category.to_string(),
                "reasoning": decision.reasoning,
            }),
        ));

        let handler = self
            .pool
            .handler_for(decision.category)
            .ok_or(RouteError::NoHandler(decision.category))?;

        // The handler gets the raw query — no objective-style framing here
        let response = handler.run(query).await?;

        Ok(RouteOutcome {
            category: Some(decision.category),
            response,
        })
    }
}
