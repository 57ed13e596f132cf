//! Prompt templates for the classify-and-route flow

use crate::routing::decision::RouteCategory;

/// Templates for the classifier
pub struct RoutePromptTemplate;

impl RoutePromptTemplate {
    /// System prompt for the classifier agent
    pub fn classifier_system() -> String {
        let categories = RouteCategory::all()
            .iter()
            .map(|c| format!("`{}`", c))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"You classify user queries into exactly one category: {categories}.

Respond with a single JSON object and nothing else:

{{"category": "<one of the listed categories>", "reasoning": "<one sentence>"}}"#
        )
    }

    /// User prompt asking the classifier to categorize a query
    pub fn classify(query: &str) -> String {
        format!(
            r#"Classify this query:

{query}"#
        )
    }
}
