//! Refinement loop control parameters.

use serde::{Deserialize, Serialize};

/// Turn budget for the generate-evaluate-refine loop.
///
/// `max_turns` counts regeneration attempts after the initial generation;
/// a budget of 0 means generate once, evaluate once, and stop either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefineParams {
    /// Maximum regeneration attempts after the initial generation.
    pub max_turns: usize,
}

impl Default for RefineParams {
    fn default() -> Self {
        Self { max_turns: 3 }
    }
}

impl RefineParams {
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(RefineParams::default().max_turns, 3);
    }

    #[test]
    fn test_builder() {
        assert_eq!(RefineParams::default().with_max_turns(7).max_turns, 7);
    }
}
