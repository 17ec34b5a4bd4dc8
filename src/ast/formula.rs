use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A propositional formula. Structural equality is `PartialEq`: variant
/// tags and all children must match, variable names compared
/// case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Var(String),
    Bottom,
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn var(name: impl Into<String>) -> Formula {
        Formula::Var(name.into())
    }

    pub fn not(operand: Formula) -> Formula {
        Formula::Not(Box::new(operand))
    }

    pub fn and(left: Formula, right: Formula) -> Formula {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Formula {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Formula {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Formula {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The negation of this formula.
    pub fn negate(&self) -> Formula {
        Formula::not(self.clone())
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Formula::Not(_))
    }

    /// The operand if this formula is a negation.
    pub fn negated_inner(&self) -> Option<&Formula> {
        match self {
            Formula::Not(inner) => Some(inner),
            _ => None,
        }
    }

    /// Variable names in ascending code-point order, deduplicated.
    pub fn variables(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        self.collect_variables(&mut set);
        set.into_iter().collect()
    }

    fn collect_variables(&self, set: &mut BTreeSet<String>) {
        match self {
            Formula::Var(name) => {
                set.insert(name.clone());
            }
            Formula::Bottom => {}
            Formula::Not(inner) => inner.collect_variables(set),
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right)
            | Formula::Iff(left, right) => {
                left.collect_variables(set);
                right.collect_variables(set);
            }
        }
    }

    /// Nesting depth: 0 for leaves, 1 + deepest child otherwise.
    pub fn depth(&self) -> usize {
        match self {
            Formula::Var(_) | Formula::Bottom => 0,
            Formula::Not(inner) => 1 + inner.depth(),
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right)
            | Formula::Iff(left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    /// Outermost operator, as its UTF-8 spelling. Leaves have none.
    pub fn main_connective(&self) -> Option<&'static str> {
        match self {
            Formula::Var(_) | Formula::Bottom => None,
            Formula::Not(_) => Some("¬"),
            Formula::And(_, _) => Some("∧"),
            Formula::Or(_, _) => Some("∨"),
            Formula::Implies(_, _) => Some("→"),
            Formula::Iff(_, _) => Some("↔"),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            crate::formatter::format_formula(self, &crate::formatter::UnicodeNotation)
        )
    }
}
