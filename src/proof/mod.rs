//! Fitch-style natural deduction checking.
//!
//! A proof is a flat list of steps with a depth column; subproof structure
//! is inferred, never stored. The checker validates every step against the
//! premises, the goal conclusion, and an optional theorem library, and
//! reports one error per failing step without ever aborting the walk.

mod checker;
pub mod convert;
mod error;
mod scope;

pub use checker::check_proof;
pub use convert::{lower_steps, steps_from_json, RawProofStep};
pub use error::{ErrorCode, ValidationError};
pub use scope::{Scope, ScopeTable};

use crate::ast::Formula;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The inference rules of the system. Wire names are the serialized
/// spellings (`and_intro`, `raa`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Opens a subproof, or introduces a premise at depth 0.
    Assumption,
    /// Logic: A, B ⊢ A ∧ B
    AndIntro,
    /// Logic: A ∧ B ⊢ A
    AndElimL,
    /// Logic: A ∧ B ⊢ B
    AndElimR,
    /// Logic: A ⊢ A ∨ B
    OrIntroL,
    /// Logic: B ⊢ A ∨ B
    OrIntroR,
    /// Logic: A ∨ B, [A ... C], [B ... C] ⊢ C
    OrElim,
    /// Logic: [A ... B] ⊢ A → B
    ImpliesIntro,
    /// Logic: A → B, A ⊢ B (either argument order)
    ImpliesElim,
    /// Logic: [A ... ⊥] ⊢ ¬A
    NotIntro,
    /// Logic: ¬¬A ⊢ A
    NotElim,
    /// Logic: A → B, B → A ⊢ A ↔ B (either order)
    IffIntro,
    /// Logic: A ↔ B, A ⊢ B (and symmetrically, either order)
    IffElim,
    /// Logic: ⊥ ⊢ A
    BottomElim,
    /// Logic: [¬A ... ⊥] ⊢ A
    Raa,
    /// Cites a proven theorem from the library by id.
    Theorem,
}

impl Rule {
    /// How many justifications the rule takes. Subproof citations count.
    pub fn arity(&self) -> usize {
        match self {
            Rule::Assumption | Rule::Theorem => 0,
            Rule::AndElimL
            | Rule::AndElimR
            | Rule::OrIntroL
            | Rule::OrIntroR
            | Rule::ImpliesIntro
            | Rule::NotIntro
            | Rule::NotElim
            | Rule::BottomElim
            | Rule::Raa => 1,
            Rule::AndIntro | Rule::ImpliesElim | Rule::IffIntro | Rule::IffElim => 2,
            Rule::OrElim => 3,
        }
    }

    /// Zero-based positions of justifications that cite subproofs rather
    /// than single steps.
    pub(crate) fn subproof_positions(&self) -> &'static [usize] {
        match self {
            Rule::ImpliesIntro | Rule::NotIntro | Rule::Raa => &[0],
            Rule::OrElim => &[1, 2],
            _ => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Assumption => "assumption",
            Rule::AndIntro => "and_intro",
            Rule::AndElimL => "and_elim_l",
            Rule::AndElimR => "and_elim_r",
            Rule::OrIntroL => "or_intro_l",
            Rule::OrIntroR => "or_intro_r",
            Rule::OrElim => "or_elim",
            Rule::ImpliesIntro => "implies_intro",
            Rule::ImpliesElim => "implies_elim",
            Rule::NotIntro => "not_intro",
            Rule::NotElim => "not_elim",
            Rule::IffIntro => "iff_intro",
            Rule::IffElim => "iff_elim",
            Rule::BottomElim => "bottom_elim",
            Rule::Raa => "raa",
            Rule::Theorem => "theorem",
        }
    }

    pub const ALL: [Rule; 16] = [
        Rule::Assumption,
        Rule::AndIntro,
        Rule::AndElimL,
        Rule::AndElimR,
        Rule::OrIntroL,
        Rule::OrIntroR,
        Rule::OrElim,
        Rule::ImpliesIntro,
        Rule::ImpliesElim,
        Rule::NotIntro,
        Rule::NotElim,
        Rule::IffIntro,
        Rule::IffElim,
        Rule::BottomElim,
        Rule::Raa,
        Rule::Theorem,
    ];
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule name outside the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRuleError {
    pub name: String,
}

impl fmt::Display for UnknownRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown inference rule '{}'", self.name)
    }
}

impl std::error::Error for UnknownRuleError {}

impl FromStr for Rule {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRuleError {
                name: s.to_string(),
            })
    }
}

/// One line of a proof. `id` is an opaque caller-supplied key, unique
/// within the proof; the engine never invents or rewrites ids. `depth`
/// is the subproof nesting level, 0 for the outer proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofStep {
    pub id: String,
    pub formula: Formula,
    pub rule: Rule,
    #[serde(default)]
    pub justifications: Vec<String>,
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub theorem_id: Option<String>,
}

impl ProofStep {
    pub fn new(
        id: impl Into<String>,
        formula: Formula,
        rule: Rule,
        justifications: Vec<String>,
        depth: usize,
    ) -> Self {
        Self {
            id: id.into(),
            formula,
            rule,
            justifications,
            depth,
            theorem_id: None,
        }
    }

    /// An assumption step: a premise at depth 0, a subproof opener above.
    pub fn assumption(id: impl Into<String>, formula: Formula, depth: usize) -> Self {
        Self::new(id, formula, Rule::Assumption, Vec::new(), depth)
    }

    /// A derived step citing earlier steps by id.
    pub fn derived(
        id: impl Into<String>,
        formula: Formula,
        rule: Rule,
        justifications: &[&str],
        depth: usize,
    ) -> Self {
        Self::new(
            id,
            formula,
            rule,
            justifications.iter().map(|s| s.to_string()).collect(),
            depth,
        )
    }

    /// A depth-0 citation of a library theorem.
    pub fn theorem(id: impl Into<String>, formula: Formula, theorem_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            formula,
            rule: Rule::Theorem,
            justifications: Vec::new(),
            depth: 0,
            theorem_id: Some(theorem_id.into()),
        }
    }
}

/// Outcome of checking a proof. Validity (no step errored) and
/// completeness (the last step proves the goal at depth 0) are independent
/// axes; both are always reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofCheckResult {
    pub valid: bool,
    pub complete: bool,
    pub errors: Vec<ValidationError>,
}

impl ProofCheckResult {
    /// Valid and complete.
    pub fn is_proved(&self) -> bool {
        self.valid && self.complete
    }
}
