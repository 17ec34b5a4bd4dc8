//! Subproof inference from the depth column, and accessibility.
//!
//! Proofs arrive as a flat step list; there are no explicit end-of-subproof
//! markers. A stack of open scopes is maintained while walking the steps,
//! closing on depth drops, sibling re-opens, and end of proof, the same way
//! an indentation lexer closes blocks on dedent.

use super::{ProofStep, Rule};

/// One inferred subproof: the closed interval of step indices it covers,
/// beginning at its opening assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub start: usize,
    pub end: usize,
    pub depth: usize,
}

impl Scope {
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Every subproof of a proof, in order of their opening assumptions.
#[derive(Debug, Clone, Default)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl ScopeTable {
    pub fn build(steps: &[ProofStep]) -> Self {
        let mut closed: Vec<Scope> = Vec::new();
        // (start index, depth) of scopes not yet closed
        let mut open: Vec<(usize, usize)> = Vec::new();
        let mut prev_depth = 0usize;

        for (i, step) in steps.iter().enumerate() {
            let d = step.depth;

            // Scopes deeper than this step end on the previous line.
            while open.last().is_some_and(|&(_, depth)| depth > d) {
                let (start, depth) = open.pop().unwrap();
                closed.push(Scope { start, end: i - 1, depth });
            }

            // A same-depth assumption starts a sibling subproof, closing
            // the one before it.
            let sibling = step.rule == Rule::Assumption && d > 0 && d == prev_depth;
            if sibling {
                if let Some(&(start, depth)) = open.last() {
                    if depth == d {
                        open.pop();
                        closed.push(Scope { start, end: i - 1, depth });
                    }
                }
            }

            if step.rule == Rule::Assumption && (d > prev_depth || sibling) {
                open.push((i, d));
            }

            prev_depth = d;
        }

        // Dangling scopes close at the last step.
        if let Some(last) = steps.len().checked_sub(1) {
            while let Some((start, depth)) = open.pop() {
                closed.push(Scope { start, end: last, depth });
            }
        }

        closed.sort_by_key(|scope| scope.start);
        ScopeTable { scopes: closed }
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// The scope whose opening assumption is the step at `index`.
    pub fn opened_at(&self, index: usize) -> Option<&Scope> {
        self.scopes.iter().find(|scope| scope.start == index)
    }

    /// A step is accessible from a later position exactly when every
    /// subproof containing it also contains that position. Steps at depth
    /// 0 sit in no subproof and are always accessible.
    pub fn is_accessible(&self, target: usize, from: usize) -> bool {
        self.scopes
            .iter()
            .filter(|scope| scope.contains(target))
            .all(|scope| scope.contains(from))
    }

    /// Accessibility for citing a whole subproof: every scope properly
    /// enclosing it must contain the citing position. The subproof's own
    /// interval is exempt, which is what lets an intro rule cite the
    /// subproof it just closed.
    pub fn is_subproof_accessible(&self, subproof: &Scope, from: usize) -> bool {
        self.scopes
            .iter()
            .filter(|scope| scope.start != subproof.start && scope.contains(subproof.start))
            .all(|scope| scope.contains(from))
    }
}
