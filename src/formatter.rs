//! Printing formulas and sequents with minimal parentheses.
//!
//! The printer carries the surrounding context's binding strength down the
//! recursion and wraps a child exactly when the child binds strictly less
//! tightly. Ranks are doubled so the re-associating side of a binary
//! operator can be biased by a half-step while staying in integers: the
//! right child of a left-associative operator (and the left child of the
//! right-associative conditional) sees its parent's rank plus one, which
//! forces parentheses on equal-rank repetitions that would otherwise
//! reparse differently.

use crate::ast::Formula;

/// Operator spellings for one output notation.
pub trait LogicNotation {
    fn not(&self) -> &'static str;
    fn and(&self) -> &'static str;
    fn or(&self) -> &'static str;
    fn implies(&self) -> &'static str;
    fn iff(&self) -> &'static str;
    fn bottom(&self) -> &'static str;
    fn turnstile(&self) -> &'static str;
}

/// UTF-8 logical symbols.
pub struct UnicodeNotation;

impl LogicNotation for UnicodeNotation {
    fn not(&self) -> &'static str {
        "¬"
    }
    fn and(&self) -> &'static str {
        "∧"
    }
    fn or(&self) -> &'static str {
        "∨"
    }
    fn implies(&self) -> &'static str {
        "→"
    }
    fn iff(&self) -> &'static str {
        "↔"
    }
    fn bottom(&self) -> &'static str {
        "⊥"
    }
    fn turnstile(&self) -> &'static str {
        "⊢"
    }
}

/// Plain-keyboard spellings, reparseable by the same grammar.
pub struct AsciiNotation;

impl LogicNotation for AsciiNotation {
    fn not(&self) -> &'static str {
        "~"
    }
    fn and(&self) -> &'static str {
        "/\\"
    }
    fn or(&self) -> &'static str {
        "\\/"
    }
    fn implies(&self) -> &'static str {
        "->"
    }
    fn iff(&self) -> &'static str {
        "<->"
    }
    fn bottom(&self) -> &'static str {
        "_|_"
    }
    fn turnstile(&self) -> &'static str {
        "|-"
    }
}

// Doubled precedence ranks, higher binds tighter.
const IFF: u8 = 2;
const IMPLIES: u8 = 4;
const OR: u8 = 6;
const AND: u8 = 8;
const NOT: u8 = 10;
const ATOM: u8 = 12;

fn rank(formula: &Formula) -> u8 {
    match formula {
        Formula::Var(_) | Formula::Bottom => ATOM,
        Formula::Not(_) => NOT,
        Formula::And(_, _) => AND,
        Formula::Or(_, _) => OR,
        Formula::Implies(_, _) => IMPLIES,
        Formula::Iff(_, _) => IFF,
    }
}

/// Render a formula with the fewest parentheses that still reparse to the
/// same tree.
pub fn format_formula(formula: &Formula, notation: &dyn LogicNotation) -> String {
    let mut out = String::new();
    write_formula(&mut out, formula, notation, 0);
    out
}

fn write_formula(out: &mut String, formula: &Formula, n: &dyn LogicNotation, context: u8) {
    let wrap = rank(formula) < context;
    if wrap {
        out.push('(');
    }
    match formula {
        Formula::Var(name) => out.push_str(name),
        Formula::Bottom => out.push_str(n.bottom()),
        Formula::Not(operand) => {
            out.push_str(n.not());
            write_formula(out, operand, n, NOT);
        }
        Formula::And(left, right) => {
            write_binary(out, left, right, n.and(), n, AND, AND + 1);
        }
        Formula::Or(left, right) => {
            write_binary(out, left, right, n.or(), n, OR, OR + 1);
        }
        Formula::Iff(left, right) => {
            write_binary(out, left, right, n.iff(), n, IFF, IFF + 1);
        }
        // Right-associative: the bias lands on the left child instead.
        Formula::Implies(left, right) => {
            write_binary(out, left, right, n.implies(), n, IMPLIES + 1, IMPLIES);
        }
    }
    if wrap {
        out.push(')');
    }
}

fn write_binary(
    out: &mut String,
    left: &Formula,
    right: &Formula,
    op: &str,
    n: &dyn LogicNotation,
    left_context: u8,
    right_context: u8,
) {
    write_formula(out, left, n, left_context);
    out.push(' ');
    out.push_str(op);
    out.push(' ');
    write_formula(out, right, n, right_context);
}

/// Render a sequent: premises joined by ", ", the turnstile, the
/// conclusion. With no premises the turnstile keeps its leading space.
pub fn format_sequent(
    premises: &[Formula],
    conclusion: &Formula,
    notation: &dyn LogicNotation,
) -> String {
    let joined = premises
        .iter()
        .map(|p| format_formula(p, notation))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {} {}",
        joined,
        notation.turnstile(),
        format_formula(conclusion, notation)
    )
}
