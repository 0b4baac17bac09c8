//! Evaluator configuration.

use serde::Deserialize;

/// Configuration for the [`AccessEvaluator`](crate::AccessEvaluator).
///
/// Deserializable with defaults for every field, so hosts can embed it in
/// their own config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Emit a debug event on target `classroom_access::audit` for every
    /// denial.
    pub audit_denials: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            audit_denials: true,
        }
    }
}
