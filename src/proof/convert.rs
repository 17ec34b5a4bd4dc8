//! Wire layer between host-side step records and typed proof steps.
//!
//! Hosts store and transmit steps with the rule as a plain string. Rules
//! outside the fixed vocabulary must not abort deserialization of the
//! whole proof; they become `UNKNOWN_RULE` validation errors keyed by the
//! offending step's id, and the step is dropped from the typed list.

use super::error::{ErrorCode, ValidationError};
use super::ProofStep;
use crate::ast::Formula;
use serde::{Deserialize, Serialize};

/// A step as it arrives from the host: identical to [`ProofStep`] except
/// that the rule is an unvalidated wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProofStep {
    pub id: String,
    pub formula: Formula,
    pub rule: String,
    #[serde(default)]
    pub justifications: Vec<String>,
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub theorem_id: Option<String>,
}

/// Lower raw steps into typed steps, collecting an `UNKNOWN_RULE` error
/// for every rule name outside the vocabulary.
pub fn lower_steps(raw: Vec<RawProofStep>) -> (Vec<ProofStep>, Vec<ValidationError>) {
    let mut steps = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();
    for record in raw {
        match record.rule.parse() {
            Ok(rule) => steps.push(ProofStep {
                id: record.id,
                formula: record.formula,
                rule,
                justifications: record.justifications,
                depth: record.depth,
                theorem_id: record.theorem_id,
            }),
            Err(_) => errors.push(ValidationError::new(
                record.id,
                ErrorCode::UnknownRule,
                format!("Unknown inference rule '{}'", record.rule),
            )),
        }
    }
    (steps, errors)
}

/// Deserialize a JSON array of raw steps and lower it. Only malformed
/// JSON is a hard error; unknown rules are validation errors.
pub fn steps_from_json(json: &str) -> serde_json::Result<(Vec<ProofStep>, Vec<ValidationError>)> {
    let raw: Vec<RawProofStep> = serde_json::from_str(json)?;
    Ok(lower_steps(raw))
}
