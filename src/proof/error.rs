//! Validation errors accumulated by the proof checker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable wire identifiers for checker failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyProof,
    InsufficientJustifications,
    TooManyJustifications,
    JustificationNotFound,
    InaccessibleJustification,
    WrongPremiseType,
    WrongConclusionType,
    ConclusionMismatch,
    InvalidSubproof,
    SubproofMismatch,
    SubproofConclusionMismatch,
    InvalidJustification,
    MissingTheoremId,
    TheoremNotFound,
    TheoremMismatch,
    UnknownRule,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyProof => "EMPTY_PROOF",
            ErrorCode::InsufficientJustifications => "INSUFFICIENT_JUSTIFICATIONS",
            ErrorCode::TooManyJustifications => "TOO_MANY_JUSTIFICATIONS",
            ErrorCode::JustificationNotFound => "JUSTIFICATION_NOT_FOUND",
            ErrorCode::InaccessibleJustification => "INACCESSIBLE_JUSTIFICATION",
            ErrorCode::WrongPremiseType => "WRONG_PREMISE_TYPE",
            ErrorCode::WrongConclusionType => "WRONG_CONCLUSION_TYPE",
            ErrorCode::ConclusionMismatch => "CONCLUSION_MISMATCH",
            ErrorCode::InvalidSubproof => "INVALID_SUBPROOF",
            ErrorCode::SubproofMismatch => "SUBPROOF_MISMATCH",
            ErrorCode::SubproofConclusionMismatch => "SUBPROOF_CONCLUSION_MISMATCH",
            ErrorCode::InvalidJustification => "INVALID_JUSTIFICATION",
            ErrorCode::MissingTheoremId => "MISSING_THEOREM_ID",
            ErrorCode::TheoremNotFound => "THEOREM_NOT_FOUND",
            ErrorCode::TheoremMismatch => "THEOREM_MISMATCH",
            ErrorCode::UnknownRule => "UNKNOWN_RULE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed check. A step produces at most one of these per run; the
/// aggregated list preserves step order. `step_id` is `None` only for
/// proof-level failures such as `EMPTY_PROOF`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub step_id: Option<String>,
    pub code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(step_id: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            step_id: Some(step_id.into()),
            code,
            message: message.into(),
        }
    }

    pub fn proof_level(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            step_id: None,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.step_id {
            Some(id) => write!(f, "[{}] step {}: {}", self.code, id, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}
