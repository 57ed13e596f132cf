//! Quality assessment of generated content.
//!
//! [`QualityAssessment`] is the verdict a quality gate returns for one
//! refinement turn. It is transient: recomputed every turn, never persisted.

use serde::{Deserialize, Serialize};

/// Verdict of one quality-gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Whether the content is acceptable as-is
    pub passes: bool,
    /// One line per shortcoming; fed back into the regeneration prompt
    pub feedback: Vec<String>,
}

impl QualityAssessment {
    /// A passing verdict with no feedback.
    pub fn pass() -> Self {
        Self {
            passes: true,
            feedback: Vec::new(),
        }
    }

    /// A failing verdict carrying the given feedback lines.
    pub fn fail(feedback: Vec<String>) -> Self {
        Self {
            passes: false,
            feedback,
        }
    }

    /// Feedback joined one line per entry, for embedding in a prompt.
    pub fn feedback_text(&self) -> String {
        self.feedback.join("\n")
    }
}
