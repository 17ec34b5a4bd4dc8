//! Truth-functional semantics: evaluation, truth tables, entailment.

mod eval;
mod truth_table;

pub use eval::{evaluate, Assignment};
pub use truth_table::{
    are_equivalent, classify, entails, find_counterexample, grade_rows, jointly_satisfiable,
    truth_table, Classification, SubmittedRow, TruthTable, TruthTableRow,
};

use std::fmt;

pub type SemanticsResult<T> = Result<T, SemanticsError>;

/// Errors from the enumerating entry points. Evaluation under an
/// incomplete assignment is not represented here: that is a caller
/// interface error and panics (see [`evaluate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticsError {
    /// The formula set mentions more variables than the engine will
    /// enumerate (2^n rows).
    TooManyVariables { count: usize, max: usize },

    /// A submitted variable order does not cover the formula.
    MissingVariable { name: String },
}

impl fmt::Display for SemanticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticsError::TooManyVariables { count, max } => {
                write!(f, "Too many variables: {} (max {})", count, max)
            }
            SemanticsError::MissingVariable { name } => {
                write!(f, "Variable '{}' is missing from the declared order", name)
            }
        }
    }
}

impl std::error::Error for SemanticsError {}
