//! Route categories and the classifier's decision

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Statically enumerated routing categories.
///
/// The classifier must emit one of these; unrecognized output is a routing
/// failure for that request, never silently coerced. `General` is the
/// fallback *handler* for categories with no registered worker — not a
/// fallback for unparseable classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteCategory {
    Billing,
    Technical,
    Account,
    General,
}

impl RouteCategory {
    pub fn as_str(&self) -> &str {
        match self {
            RouteCategory::Billing => "billing",
            RouteCategory::Technical => "technical",
            RouteCategory::Account => "account",
            RouteCategory::General => "general",
        }
    }

    /// All categories, in a stable order.
    pub fn all() -> [RouteCategory; 4] {
        [
            RouteCategory::Billing,
            RouteCategory::Technical,
            RouteCategory::Account,
            RouteCategory::General,
        ]
    }
}

impl std::fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RouteCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "billing" => Ok(RouteCategory::Billing),
            "technical" => Ok(RouteCategory::Technical),
            "account" => Ok(RouteCategory::Account),
            "general" => Ok(RouteCategory::General),
            other => Err(DomainError::UnknownRouteCategory(other.to_string())),
        }
    }
}

/// The classifier's verdict for one query.
///
/// Produced once per request and not persisted beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecision {
    /// The chosen category
    pub category: RouteCategory,
    /// The classifier's stated reasoning, kept for logs
    pub reasoning: String,
}

impl RouteDecision {
    pub fn new(category: RouteCategory, reasoning: impl Into<String>) -> Self {
        Self {
            category,
            reasoning: reasoning.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "billing".parse::<RouteCategory>().unwrap(),
            RouteCategory::Billing
        );
        assert!("refunds".parse::<RouteCategory>().is_err());
        assert!("Billing".parse::<RouteCategory>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(RouteCategory::Technical.to_string(), "technical");
    }
}
