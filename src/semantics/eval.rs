use crate::ast::Formula;
use std::collections::BTreeMap;

/// A boolean valuation of variable names.
pub type Assignment = BTreeMap<String, bool>;

/// Evaluate a formula under an assignment, classically.
///
/// `Bottom` is false; `Implies(a, b)` is `¬a ∨ b`; `Iff(a, b)` is
/// `a == b`.
///
/// # Panics
///
/// Panics if the formula mentions a variable the assignment does not
/// cover. Completeness of the assignment is the caller's contract; every
/// assignment produced by the truth-table enumeration is total over its
/// formula.
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> bool {
    match formula {
        Formula::Var(name) => match assignment.get(name) {
            Some(value) => *value,
            None => panic!("no value assigned to variable '{}'", name),
        },
        Formula::Bottom => false,
        Formula::Not(operand) => !evaluate(operand, assignment),
        Formula::And(left, right) => evaluate(left, assignment) && evaluate(right, assignment),
        Formula::Or(left, right) => evaluate(left, assignment) || evaluate(right, assignment),
        Formula::Implies(left, right) => !evaluate(left, assignment) || evaluate(right, assignment),
        Formula::Iff(left, right) => evaluate(left, assignment) == evaluate(right, assignment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn assign(pairs: &[(&str, bool)]) -> Assignment {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn evaluates_connectives_classically() {
        let a = assign(&[("P", true), ("Q", false)]);
        assert!(evaluate(&parse("P").unwrap(), &a));
        assert!(!evaluate(&parse("Q").unwrap(), &a));
        assert!(!evaluate(&parse("⊥").unwrap(), &a));
        assert!(evaluate(&parse("~Q").unwrap(), &a));
        assert!(!evaluate(&parse("P /\\ Q").unwrap(), &a));
        assert!(evaluate(&parse("P \\/ Q").unwrap(), &a));
        assert!(!evaluate(&parse("P -> Q").unwrap(), &a));
        assert!(evaluate(&parse("Q -> P").unwrap(), &a));
        assert!(!evaluate(&parse("P <-> Q").unwrap(), &a));
        assert!(evaluate(&parse("P <-> P").unwrap(), &a));
    }

    #[test]
    fn implication_is_material() {
        // False antecedent makes the conditional true
        let a = assign(&[("P", false), ("Q", false)]);
        assert!(evaluate(&parse("P -> Q").unwrap(), &a));
    }

    #[test]
    fn iff_of_two_falses_is_true() {
        let a = assign(&[("P", false), ("Q", false)]);
        assert!(evaluate(&parse("P <-> Q").unwrap(), &a));
    }

    #[test]
    #[should_panic(expected = "no value assigned to variable 'Q'")]
    fn missing_variable_panics() {
        let a = assign(&[("P", true)]);
        evaluate(&parse("P /\\ Q").unwrap(), &a);
    }
}
