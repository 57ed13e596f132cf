//! Default worker instructions.
//!
//! Used when [`AgentConfig.instructions`] is absent; each worker kind and
//! route category has a type-specific default system prompt.

use crate::dispatch::value_objects::WorkerKind;
use crate::routing::decision::RouteCategory;

/// Default system prompt for a dispatch worker of the given kind.
pub fn default_instructions(kind: WorkerKind) -> &'static str {
    match kind {
        WorkerKind::Researcher => {
            "You are a research specialist. Gather the relevant facts for the task \
             you are given and present them as a concise, sourced summary."
        }
        WorkerKind::Coder => {
            "You are a software engineer. Produce working, idiomatic code for the \
             task you are given, with a short explanation of how to use it."
        }
        WorkerKind::Writer => {
            "You are a technical writer. Produce clear, well-structured prose for \
             the task you are given."
        }
    }
}

/// Default system prompt for a route category handler.
pub fn default_handler_instructions(category: RouteCategory) -> &'static str {
    match category {
        RouteCategory::Billing => {
            "You are a billing support specialist. Answer questions about charges, \
             invoices, and refunds accurately and empathetically."
        }
        RouteCategory::Technical => {
            "You are a technical support engineer. Diagnose the reported problem \
             and walk the user through a fix, step by step."
        }
        RouteCategory::Account => {
            "You are an account support specialist. Help with sign-in, profile, \
             and account lifecycle questions."
        }
        RouteCategory::General => {
            "You are a general support assistant. Answer the question helpfully, \
             or point the user to the right specialist."
        }
    }
}
