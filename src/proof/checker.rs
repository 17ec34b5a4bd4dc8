//! Per-step validation of natural deduction proofs.
//!
//! The checker is total: every failure is a collected value, never a
//! panic, and a failing step does not stop the walk. Each step yields at
//! most one error per run; the first failing check wins and the rest are
//! skipped for that step. Later steps may still cite a failed step; the
//! reference itself does not re-fail.

use super::error::{ErrorCode, ValidationError};
use super::scope::ScopeTable;
use super::{ProofCheckResult, ProofStep, Rule};
use crate::ast::{Formula, TheoremLibrary};
use log::debug;
use std::collections::HashMap;

/// Check a proof against its premises, goal conclusion, and theorem
/// library. Premises enter the proof as depth-0 `assumption` steps whose
/// formulas match the premise list.
pub fn check_proof(
    steps: &[ProofStep],
    premises: &[Formula],
    conclusion: &Formula,
    library: &TheoremLibrary,
) -> ProofCheckResult {
    ProofChecker::new(steps, premises, conclusion, library).check()
}

struct ProofChecker<'a> {
    steps: &'a [ProofStep],
    premises: &'a [Formula],
    conclusion: &'a Formula,
    library: &'a TheoremLibrary,
    scopes: ScopeTable,
    index_of: HashMap<&'a str, usize>,
}

impl<'a> ProofChecker<'a> {
    fn new(
        steps: &'a [ProofStep],
        premises: &'a [Formula],
        conclusion: &'a Formula,
        library: &'a TheoremLibrary,
    ) -> Self {
        let mut index_of = HashMap::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            // Ids are unique by contract; keep the first on violation.
            index_of.entry(step.id.as_str()).or_insert(i);
        }
        Self {
            steps,
            premises,
            conclusion,
            library,
            scopes: ScopeTable::build(steps),
            index_of,
        }
    }

    fn check(&self) -> ProofCheckResult {
        if self.steps.is_empty() {
            return ProofCheckResult {
                valid: false,
                complete: false,
                errors: vec![ValidationError::proof_level(
                    ErrorCode::EmptyProof,
                    "The proof contains no steps",
                )],
            };
        }

        debug!(
            "checking {} step(s) against {} premise(s)",
            self.steps.len(),
            self.premises.len()
        );

        let mut errors = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            if let Err(error) = self.check_step(index, step) {
                errors.push(error);
            }
        }

        let last = self.steps.last().unwrap();
        let complete = last.depth == 0 && last.formula == *self.conclusion;

        ProofCheckResult {
            valid: errors.is_empty(),
            complete,
            errors,
        }
    }

    fn check_step(&self, index: usize, step: &ProofStep) -> Result<(), ValidationError> {
        // Premises are depth-0 assumptions matching the premise list;
        // nothing else to verify for them.
        if step.rule == Rule::Assumption
            && step.depth == 0
            && self.premises.contains(&step.formula)
        {
            return Ok(());
        }

        if step.rule == Rule::Theorem {
            self.check_theorem(step)?;
        }

        self.check_arity(step)?;

        if matches!(step.rule, Rule::Assumption | Rule::Theorem) {
            return Ok(());
        }

        let justifications = self.resolve_justifications(index, step)?;
        self.check_schema(step, &justifications)
    }

    fn check_theorem(&self, step: &ProofStep) -> Result<(), ValidationError> {
        let theorem_id = match step.theorem_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(ValidationError::new(
                    &step.id,
                    ErrorCode::MissingTheoremId,
                    "A theorem step must name the theorem it cites",
                ));
            }
        };
        let theorem = self.library.get(theorem_id).ok_or_else(|| {
            ValidationError::new(
                &step.id,
                ErrorCode::TheoremNotFound,
                format!("No theorem '{}' in the library", theorem_id),
            )
        })?;
        if step.formula != theorem.conclusion {
            return Err(ValidationError::new(
                &step.id,
                ErrorCode::TheoremMismatch,
                format!(
                    "Theorem '{}' concludes {}, not {}",
                    theorem_id, theorem.conclusion, step.formula
                ),
            ));
        }
        Ok(())
    }

    fn check_arity(&self, step: &ProofStep) -> Result<(), ValidationError> {
        let required = step.rule.arity();
        let found = step.justifications.len();
        if found < required {
            return Err(ValidationError::new(
                &step.id,
                ErrorCode::InsufficientJustifications,
                format!(
                    "{} requires {} justification(s), found {}",
                    step.rule, required, found
                ),
            ));
        }
        if found > required {
            return Err(ValidationError::new(
                &step.id,
                ErrorCode::TooManyJustifications,
                format!(
                    "{} requires {} justification(s), found {}",
                    step.rule, required, found
                ),
            ));
        }
        Ok(())
    }

    /// Resolve justification ids to step indices, enforcing that each
    /// points strictly backwards and is accessible from here. Subproof
    /// positions use subproof accessibility; whether the target actually
    /// opens a subproof is the schema check's business.
    fn resolve_justifications(
        &self,
        index: usize,
        step: &ProofStep,
    ) -> Result<Vec<usize>, ValidationError> {
        let subproof_positions = step.rule.subproof_positions();
        let mut resolved = Vec::with_capacity(step.justifications.len());
        for (position, id) in step.justifications.iter().enumerate() {
            let target = match self.index_of.get(id.as_str()) {
                Some(&target) if target < index => target,
                _ => {
                    return Err(ValidationError::new(
                        &step.id,
                        ErrorCode::JustificationNotFound,
                        format!("Justification '{}' does not refer to an earlier step", id),
                    ));
                }
            };
            let accessible = if subproof_positions.contains(&position) {
                match self.scopes.opened_at(target) {
                    Some(scope) => self.scopes.is_subproof_accessible(scope, index),
                    None => true,
                }
            } else {
                self.scopes.is_accessible(target, index)
            };
            if !accessible {
                return Err(ValidationError::new(
                    &step.id,
                    ErrorCode::InaccessibleJustification,
                    format!("Justification '{}' is inside a closed subproof", id),
                ));
            }
            resolved.push(target);
        }
        Ok(resolved)
    }

    fn formula_of(&self, index: usize) -> &Formula {
        &self.steps[index].formula
    }

    /// The assumption and last-line formulas of the subproof opened at
    /// `index`, if that step opens one.
    fn subproof_of(&self, index: usize) -> Option<(&Formula, &Formula)> {
        let scope = self.scopes.opened_at(index)?;
        Some((
            &self.steps[scope.start].formula,
            &self.steps[scope.end].formula,
        ))
    }

    fn check_schema(
        &self,
        step: &ProofStep,
        justifications: &[usize],
    ) -> Result<(), ValidationError> {
        let target = &step.formula;
        match step.rule {
            // Handled before the schema stage.
            Rule::Assumption | Rule::Theorem => Ok(()),

            Rule::AndIntro => {
                let left = self.formula_of(justifications[0]);
                let right = self.formula_of(justifications[1]);
                let expected = Formula::and(left.clone(), right.clone());
                if *target != expected {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::ConclusionMismatch,
                        format!("and_intro on {} and {} yields {}, not {}", left, right, expected, target),
                    ));
                }
                Ok(())
            }

            Rule::AndElimL => match self.formula_of(justifications[0]) {
                Formula::And(left, _) => {
                    if target != left.as_ref() {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::ConclusionMismatch,
                            format!("{} is not the left conjunct of the justification", target),
                        ));
                    }
                    Ok(())
                }
                other => Err(self.mismatch(
                    step,
                    ErrorCode::WrongPremiseType,
                    format!("and_elim_l expects a conjunction, found {}", other),
                )),
            },

            Rule::AndElimR => match self.formula_of(justifications[0]) {
                Formula::And(_, right) => {
                    if target != right.as_ref() {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::ConclusionMismatch,
                            format!("{} is not the right conjunct of the justification", target),
                        ));
                    }
                    Ok(())
                }
                other => Err(self.mismatch(
                    step,
                    ErrorCode::WrongPremiseType,
                    format!("and_elim_r expects a conjunction, found {}", other),
                )),
            },

            Rule::OrIntroL => match target {
                Formula::Or(left, _) => {
                    let cited = self.formula_of(justifications[0]);
                    if left.as_ref() != cited {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::ConclusionMismatch,
                            format!("Left disjunct of {} is not the cited {}", target, cited),
                        ));
                    }
                    Ok(())
                }
                _ => Err(self.mismatch(
                    step,
                    ErrorCode::WrongConclusionType,
                    format!("or_intro_l must conclude a disjunction, found {}", target),
                )),
            },

            Rule::OrIntroR => match target {
                Formula::Or(_, right) => {
                    let cited = self.formula_of(justifications[0]);
                    if right.as_ref() != cited {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::ConclusionMismatch,
                            format!("Right disjunct of {} is not the cited {}", target, cited),
                        ));
                    }
                    Ok(())
                }
                _ => Err(self.mismatch(
                    step,
                    ErrorCode::WrongConclusionType,
                    format!("or_intro_r must conclude a disjunction, found {}", target),
                )),
            },

            Rule::OrElim => {
                let disjunction = self.formula_of(justifications[0]);
                let (left, right) = match disjunction {
                    Formula::Or(left, right) => (left.as_ref(), right.as_ref()),
                    other => {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::WrongPremiseType,
                            format!("or_elim expects a disjunction, found {}", other),
                        ));
                    }
                };
                for (handle, case) in [(justifications[1], left), (justifications[2], right)] {
                    let (assumed, last) = self.subproof_of(handle).ok_or_else(|| {
                        self.invalid_subproof(step, handle)
                    })?;
                    if assumed != case {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::SubproofMismatch,
                            format!("Subproof assumes {}, expected {}", assumed, case),
                        ));
                    }
                    if last != target {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::SubproofConclusionMismatch,
                            format!("Subproof ends with {}, expected {}", last, target),
                        ));
                    }
                }
                Ok(())
            }

            Rule::ImpliesIntro => {
                let (antecedent, consequent) = match target {
                    Formula::Implies(a, b) => (a.as_ref(), b.as_ref()),
                    _ => {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::WrongConclusionType,
                            format!("implies_intro must conclude a conditional, found {}", target),
                        ));
                    }
                };
                let (assumed, last) = self
                    .subproof_of(justifications[0])
                    .ok_or_else(|| self.invalid_subproof(step, justifications[0]))?;
                if assumed != antecedent {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::SubproofMismatch,
                        format!("Subproof assumes {}, expected {}", assumed, antecedent),
                    ));
                }
                if last != consequent {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::SubproofConclusionMismatch,
                        format!("Subproof ends with {}, expected {}", last, consequent),
                    ));
                }
                Ok(())
            }

            Rule::ImpliesElim => {
                let first = self.formula_of(justifications[0]);
                let second = self.formula_of(justifications[1]);
                let applies = |conditional: &Formula, antecedent: &Formula| {
                    matches!(conditional, Formula::Implies(a, b)
                        if a.as_ref() == antecedent && b.as_ref() == target)
                };
                if applies(first, second) || applies(second, first) {
                    Ok(())
                } else {
                    Err(self.mismatch(
                        step,
                        ErrorCode::InvalidJustification,
                        format!(
                            "Cannot derive {} from {} and {} by implies_elim",
                            target, first, second
                        ),
                    ))
                }
            }

            Rule::NotIntro => {
                let negated = match target {
                    Formula::Not(inner) => inner.as_ref(),
                    _ => {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::WrongConclusionType,
                            format!("not_intro must conclude a negation, found {}", target),
                        ));
                    }
                };
                let (assumed, last) = self
                    .subproof_of(justifications[0])
                    .ok_or_else(|| self.invalid_subproof(step, justifications[0]))?;
                if assumed != negated {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::SubproofMismatch,
                        format!("Subproof assumes {}, expected {}", assumed, negated),
                    ));
                }
                if *last != Formula::Bottom {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::SubproofConclusionMismatch,
                        format!("Subproof ends with {}, expected ⊥", last),
                    ));
                }
                Ok(())
            }

            Rule::NotElim => match self.formula_of(justifications[0]) {
                Formula::Not(inner) => match inner.as_ref() {
                    Formula::Not(core) => {
                        if core.as_ref() != target {
                            return Err(self.mismatch(
                                step,
                                ErrorCode::ConclusionMismatch,
                                format!(
                                    "not_elim on ¬¬{} cannot conclude {}",
                                    core, target
                                ),
                            ));
                        }
                        Ok(())
                    }
                    _ => Err(self.mismatch(
                        step,
                        ErrorCode::WrongPremiseType,
                        format!(
                            "not_elim expects a double negation, found {}",
                            self.formula_of(justifications[0])
                        ),
                    )),
                },
                other => Err(self.mismatch(
                    step,
                    ErrorCode::WrongPremiseType,
                    format!("not_elim expects a double negation, found {}", other),
                )),
            },

            Rule::IffIntro => {
                let (left, right) = match target {
                    Formula::Iff(a, b) => (a.as_ref(), b.as_ref()),
                    _ => {
                        return Err(self.mismatch(
                            step,
                            ErrorCode::WrongConclusionType,
                            format!("iff_intro must conclude a biconditional, found {}", target),
                        ));
                    }
                };
                let forward = Formula::implies(left.clone(), right.clone());
                let backward = Formula::implies(right.clone(), left.clone());
                let first = self.formula_of(justifications[0]);
                let second = self.formula_of(justifications[1]);
                if (*first == forward && *second == backward)
                    || (*first == backward && *second == forward)
                {
                    Ok(())
                } else {
                    Err(self.mismatch(
                        step,
                        ErrorCode::InvalidJustification,
                        format!(
                            "iff_intro for {} needs {} and {}",
                            target, forward, backward
                        ),
                    ))
                }
            }

            Rule::IffElim => {
                let first = self.formula_of(justifications[0]);
                let second = self.formula_of(justifications[1]);
                let applies = |biconditional: &Formula, side: &Formula| {
                    matches!(biconditional, Formula::Iff(a, b)
                        if (side == a.as_ref() && target == b.as_ref())
                            || (side == b.as_ref() && target == a.as_ref()))
                };
                if applies(first, second) || applies(second, first) {
                    Ok(())
                } else {
                    Err(self.mismatch(
                        step,
                        ErrorCode::InvalidJustification,
                        format!(
                            "Cannot derive {} from {} and {} by iff_elim",
                            target, first, second
                        ),
                    ))
                }
            }

            Rule::BottomElim => {
                let cited = self.formula_of(justifications[0]);
                if *cited != Formula::Bottom {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::WrongPremiseType,
                        format!("bottom_elim expects ⊥, found {}", cited),
                    ));
                }
                Ok(())
            }

            Rule::Raa => {
                let expected_assumption = target.negate();
                let (assumed, last) = self
                    .subproof_of(justifications[0])
                    .ok_or_else(|| self.invalid_subproof(step, justifications[0]))?;
                if *assumed != expected_assumption {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::SubproofMismatch,
                        format!(
                            "Subproof assumes {}, expected {}",
                            assumed, expected_assumption
                        ),
                    ));
                }
                if *last != Formula::Bottom {
                    return Err(self.mismatch(
                        step,
                        ErrorCode::SubproofConclusionMismatch,
                        format!("Subproof ends with {}, expected ⊥", last),
                    ));
                }
                Ok(())
            }
        }
    }

    fn mismatch(
        &self,
        step: &ProofStep,
        code: ErrorCode,
        message: String,
    ) -> ValidationError {
        ValidationError::new(&step.id, code, message)
    }

    fn invalid_subproof(&self, step: &ProofStep, target: usize) -> ValidationError {
        ValidationError::new(
            &step.id,
            ErrorCode::InvalidSubproof,
            format!(
                "Justification '{}' does not open a subproof",
                self.steps[target].id
            ),
        )
    }
}
