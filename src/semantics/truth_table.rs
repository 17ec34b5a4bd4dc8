//! Truth-table enumeration and the semantic judgments built on it.
//!
//! Assignments are enumerated so that the first row is all-true, the last
//! all-false, and variable `v_j` (in sorted order) flips every
//! `2^(n-1-j)` rows. Everything here is `O(2^n)` in the variable count,
//! capped by [`crate::MAX_TRUTH_TABLE_VARIABLES`].

use super::eval::{evaluate, Assignment};
use super::{SemanticsError, SemanticsResult};
use crate::ast::Formula;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthTableRow {
    pub inputs: Assignment,
    pub result: bool,
}

/// A fully enumerated truth table with its classification flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthTable {
    pub formula: Formula,
    /// Variables in ascending code-point order; row inputs follow it.
    pub variables: Vec<String>,
    pub rows: Vec<TruthTableRow>,
    pub is_tautology: bool,
    pub is_contradiction: bool,
    pub is_satisfiable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingent,
}

fn check_width(variables: &[String]) -> SemanticsResult<()> {
    if variables.len() > crate::MAX_TRUTH_TABLE_VARIABLES {
        return Err(SemanticsError::TooManyVariables {
            count: variables.len(),
            max: crate::MAX_TRUTH_TABLE_VARIABLES,
        });
    }
    Ok(())
}

/// Sorted union of the variables of several formulas.
fn union_variables<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> Vec<String> {
    let mut set = BTreeSet::new();
    for formula in formulas {
        set.extend(formula.variables());
    }
    set.into_iter().collect()
}

/// The assignment for row `index`: variable `v_j` is true exactly when
/// bit `n-1-j` of the index is zero.
fn assignment_for_row(variables: &[String], index: usize) -> Assignment {
    let n = variables.len();
    variables
        .iter()
        .enumerate()
        .map(|(j, name)| (name.clone(), index & (1 << (n - 1 - j)) == 0))
        .collect()
}

/// Every assignment over `variables`, in table order.
fn assignments(variables: &[String]) -> impl Iterator<Item = Assignment> + '_ {
    (0..1usize << variables.len()).map(|index| assignment_for_row(variables, index))
}

/// Build the full truth table for a formula. A formula with no variables
/// yields exactly one row.
pub fn truth_table(formula: &Formula) -> SemanticsResult<TruthTable> {
    let variables = formula.variables();
    check_width(&variables)?;
    debug!(
        "enumerating {} assignments over {} variable(s)",
        1usize << variables.len(),
        variables.len()
    );

    let mut rows = Vec::with_capacity(1 << variables.len());
    let mut any_true = false;
    let mut any_false = false;
    for inputs in assignments(&variables) {
        let result = evaluate(formula, &inputs);
        any_true |= result;
        any_false |= !result;
        rows.push(TruthTableRow { inputs, result });
    }

    Ok(TruthTable {
        formula: formula.clone(),
        variables,
        rows,
        is_tautology: !any_false,
        is_contradiction: !any_true,
        is_satisfiable: any_true,
    })
}

/// Tautology, contradiction, or contingent.
pub fn classify(formula: &Formula) -> SemanticsResult<Classification> {
    let table = truth_table(formula)?;
    Ok(if table.is_tautology {
        Classification::Tautology
    } else if table.is_contradiction {
        Classification::Contradiction
    } else {
        Classification::Contingent
    })
}

/// Two formulas are equivalent when they agree under every assignment
/// over the union of their variables.
pub fn are_equivalent(left: &Formula, right: &Formula) -> SemanticsResult<bool> {
    let variables = union_variables([left, right]);
    check_width(&variables)?;
    let result = assignments(&variables).all(|a| evaluate(left, &a) == evaluate(right, &a));
    Ok(result)
}

/// Whether some assignment makes every formula in the list true. The
/// empty list is satisfiable.
pub fn jointly_satisfiable(formulas: &[Formula]) -> SemanticsResult<bool> {
    let variables = union_variables(formulas);
    check_width(&variables)?;
    let result = assignments(&variables).any(|a| formulas.iter().all(|f| evaluate(f, &a)));
    Ok(result)
}

/// First assignment, in table order, that makes every premise true and
/// the conclusion false.
pub fn find_counterexample(
    premises: &[Formula],
    conclusion: &Formula,
) -> SemanticsResult<Option<Assignment>> {
    let variables = union_variables(premises.iter().chain([conclusion]));
    check_width(&variables)?;
    let result = assignments(&variables)
        .find(|a| premises.iter().all(|p| evaluate(p, a)) && !evaluate(conclusion, a));
    Ok(result)
}

/// Semantic entailment: no assignment makes every premise true while the
/// conclusion is false.
pub fn entails(premises: &[Formula], conclusion: &Formula) -> SemanticsResult<bool> {
    Ok(find_counterexample(premises, conclusion)?.is_none())
}

/// One row of a student-submitted truth table: input values in the
/// submission's declared variable order, plus the claimed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRow {
    pub inputs: Vec<bool>,
    pub result: bool,
}

/// Grade a submitted row list against the engine's evaluation. Returns
/// the indices of mismatching rows in submitted order; a row whose width
/// does not match the declared variable order counts as a mismatch. The
/// declared order must cover every variable of the formula.
pub fn grade_rows(
    formula: &Formula,
    variables: &[String],
    rows: &[SubmittedRow],
) -> SemanticsResult<Vec<usize>> {
    check_width(variables)?;
    for name in formula.variables() {
        if !variables.contains(&name) {
            return Err(SemanticsError::MissingVariable { name });
        }
    }

    let mut mismatched = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if row.inputs.len() != variables.len() {
            mismatched.push(index);
            continue;
        }
        let assignment: Assignment = variables
            .iter()
            .cloned()
            .zip(row.inputs.iter().copied())
            .collect();
        if evaluate(formula, &assignment) != row.result {
            mismatched.push(index);
        }
    }
    Ok(mismatched)
}
