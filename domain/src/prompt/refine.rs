//! Prompt templates for the generate-evaluate-refine flow

use crate::quality::QualityAssessment;

/// Templates for the generator and its regeneration turns
pub struct RefinePromptTemplate;

impl RefinePromptTemplate {
    /// User prompt for the initial generation, from the input alone
    pub fn generate(input: &str) -> String {
        input.to_string()
    }

    /// Composite prompt for a regeneration turn.
    ///
    /// Embeds the original input, the most recent attempt, and the failed
    /// assessment's feedback lines, and instructs improvement. The feedback
    /// always describes the attempt quoted here — candidates are never
    /// generated in parallel.
    pub fn regenerate(input: &str, latest: &str, assessment: &QualityAssessment) -> String {
        format!(
            r#"Your previous attempt at the request below did not meet the quality bar.

## Request

{input}

## Previous attempt

{latest}

## Reviewer feedback

{feedback}

Produce an improved version that addresses every feedback point. Respond with
the revised content only."#,
            feedback = assessment.feedback_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regenerate_embeds_all_parts() {
        let assessment =
            QualityAssessment::fail(vec!["too vague".to_string(), "no example".to_string()]);
        let prompt = RefinePromptTemplate::regenerate("Write a haiku", "roses are red", &assessment);
        assert!(prompt.contains("Write a haiku"));
        assert!(prompt.contains("roses are red"));
        assert!(prompt.contains("too vague\nno example"));
    }
}
