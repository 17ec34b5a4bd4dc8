//! Sequents and the theorem library cited by the `theorem` rule.

use super::Formula;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A pair of premises and conclusion, printed `Γ ⊢ φ`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequent {
    pub premises: Vec<Formula>,
    pub conclusion: Formula,
}

impl Sequent {
    pub fn new(premises: Vec<Formula>, conclusion: Formula) -> Self {
        Self {
            premises,
            conclusion,
        }
    }

    pub fn to_notation(&self, notation: &dyn crate::formatter::LogicNotation) -> String {
        crate::formatter::format_sequent(&self.premises, &self.conclusion, notation)
    }
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.to_notation(&crate::formatter::UnicodeNotation)
        )
    }
}

/// A previously proven sequent that later proofs may cite by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenTheorem {
    pub id: String,
    pub premises: Vec<Formula>,
    pub conclusion: Formula,
}

impl ProvenTheorem {
    pub fn new(id: impl Into<String>, premises: Vec<Formula>, conclusion: Formula) -> Self {
        Self {
            id: id.into(),
            premises,
            conclusion,
        }
    }
}

/// Theorems available to the `theorem` rule, keyed by id. An empty library
/// is perfectly valid; citations then fail with THEOREM_NOT_FOUND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TheoremLibrary {
    theorems: HashMap<String, ProvenTheorem>,
}

impl TheoremLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theorem. A theorem with the same id is replaced.
    pub fn insert(&mut self, theorem: ProvenTheorem) {
        self.theorems.insert(theorem.id.clone(), theorem);
    }

    pub fn get(&self, id: &str) -> Option<&ProvenTheorem> {
        self.theorems.get(id)
    }

    pub fn len(&self) -> usize {
        self.theorems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theorems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProvenTheorem> {
        self.theorems.values()
    }

    /// Load a library from a JSON array of theorem records, as bundled by
    /// the host application.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let theorems: Vec<ProvenTheorem> = serde_json::from_str(json)?;
        let mut library = Self::new();
        for theorem in theorems {
            library.insert(theorem);
        }
        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequent_prints_with_turnstile() {
        let sequent = Sequent::new(
            vec![Formula::var("P"), Formula::implies(Formula::var("P"), Formula::var("Q"))],
            Formula::var("Q"),
        );
        assert_eq!(sequent.to_string(), "P, P → Q ⊢ Q");
        assert_eq!(
            sequent.to_notation(&crate::formatter::AsciiNotation),
            "P, P -> Q |- Q"
        );
    }

    #[test]
    fn premiseless_sequent_keeps_leading_space() {
        let sequent = Sequent::new(vec![], Formula::implies(Formula::var("P"), Formula::var("P")));
        assert_eq!(sequent.to_string(), " ⊢ P → P");
    }

    #[test]
    fn library_lookup() {
        let mut library = TheoremLibrary::new();
        assert!(library.is_empty());
        library.insert(ProvenTheorem::new(
            "lem",
            vec![],
            Formula::or(Formula::var("P"), Formula::not(Formula::var("P"))),
        ));
        assert_eq!(library.len(), 1);
        assert!(library.get("lem").is_some());
        assert!(library.get("dne").is_none());
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut library = TheoremLibrary::new();
        library.insert(ProvenTheorem::new("t", vec![], Formula::var("P")));
        library.insert(ProvenTheorem::new("t", vec![], Formula::var("Q")));
        assert_eq!(library.len(), 1);
        assert_eq!(library.get("t").unwrap().conclusion, Formula::var("Q"));
    }

    #[test]
    fn from_json_round_trip() {
        let json = r#"[
            {
                "id": "identity",
                "premises": [],
                "conclusion": { "Implies": [{ "Var": "P" }, { "Var": "P" }] }
            }
        ]"#;
        let library = TheoremLibrary::from_json(json).unwrap();
        assert_eq!(library.len(), 1);
        let theorem = library.get("identity").unwrap();
        assert_eq!(
            theorem.conclusion,
            Formula::implies(Formula::var("P"), Formula::var("P"))
        );
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(TheoremLibrary::from_json("{not json").is_err());
    }
}
