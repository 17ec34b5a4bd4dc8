//! A propositional-logic reasoning engine.
//!
//! Four capabilities, each usable on its own:
//!
//! - **Parsing**: [`parse`] turns ASCII or UTF-8 formula text into a
//!   [`Formula`] tree, with positioned errors.
//! - **Printing**: [`format_formula`] renders a tree back to text with the
//!   minimum parentheses that survive reparsing, in either notation.
//! - **Semantics**: [`truth_table`], [`entails`], [`are_equivalent`] and
//!   friends enumerate assignments and decide truth-functional questions.
//! - **Proof checking**: [`check_proof`] validates Fitch-style natural
//!   deduction proofs with nested subproofs, reporting per-step errors
//!   under stable wire codes.
//!
//! The engine is purely functional: no interior state, no I/O, no locks.
//! Calls from concurrent threads with disjoint inputs are safe.
//!
//! ```
//! use turnstile::{check_proof, parse, Formula, ProofStep, Rule, TheoremLibrary};
//!
//! let p = parse("P").unwrap();
//! let p_implies_q = parse("P -> Q").unwrap();
//! let q = parse("Q").unwrap();
//!
//! let steps = [
//!     ProofStep::assumption("1", p.clone(), 0),
//!     ProofStep::assumption("2", p_implies_q.clone(), 0),
//!     ProofStep::derived("3", q.clone(), Rule::ImpliesElim, &["1", "2"], 0),
//! ];
//! let result = check_proof(&steps, &[p, p_implies_q], &q, &TheoremLibrary::new());
//! assert!(result.valid && result.complete);
//! ```

pub mod ast;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod proof;
pub mod semantics;
pub mod token;

pub use ast::{Formula, ProvenTheorem, Sequent, TheoremLibrary};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use formatter::{
    format_formula, format_sequent, AsciiNotation, LogicNotation, UnicodeNotation,
};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, Parser};
pub use proof::{
    check_proof, steps_from_json, ErrorCode, ProofCheckResult, ProofStep, RawProofStep, Rule,
    ValidationError,
};
pub use semantics::{
    are_equivalent, classify, entails, evaluate, find_counterexample, grade_rows,
    jointly_satisfiable, truth_table, Assignment, Classification, SemanticsError,
    SemanticsResult, SubmittedRow, TruthTable, TruthTableRow,
};

/// Ceiling on truth-table enumeration width. Work is `O(2^n)` in the
/// variable count; past this the enumerating entry points return
/// [`SemanticsError::TooManyVariables`] instead of grinding.
pub const MAX_TRUTH_TABLE_VARIABLES: usize = 16;

/// Ceiling on parser recursion (stacked negations and parentheses), so
/// pathological inputs fail with a parse error instead of exhausting the
/// stack.
pub const MAX_PARSE_DEPTH: usize = 256;
