// =============================================================================
// PROOF CHECKER SUITE
// =============================================================================
// Whole proofs through the public entry point: the classic derivations,
// the failure codes, and the semantic soundness of accepted proofs.

use turnstile::{
    check_proof, entails, parse, ErrorCode, Formula, ProofCheckResult, ProofStep, ProvenTheorem,
    Rule, TheoremLibrary,
};

fn f(input: &str) -> Formula {
    parse(input).unwrap()
}

fn check(steps: &[ProofStep], premises: &[Formula], conclusion: &Formula) -> ProofCheckResult {
    check_proof(steps, premises, conclusion, &TheoremLibrary::new())
}

fn assert_proved(
    steps: &[ProofStep],
    premises: &[Formula],
    conclusion: &Formula,
) -> ProofCheckResult {
    let result = check(steps, premises, conclusion);
    assert!(
        result.valid && result.complete,
        "expected a proved sequent, got errors {:?}",
        result.errors
    );
    // Soundness: anything the checker accepts must be semantically valid
    assert!(
        entails(premises, conclusion).unwrap(),
        "checker accepted a sequent the semantics reject"
    );
    result
}

// ── The end-to-end derivations ───────────────────────────────────────────────

#[test]
fn modus_ponens_proof() {
    let premises = [f("P"), f("P -> Q")];
    let steps = [
        ProofStep::assumption("1", f("P"), 0),
        ProofStep::assumption("2", f("P -> Q"), 0),
        ProofStep::derived("3", f("Q"), Rule::ImpliesElim, &["1", "2"], 0),
    ];
    assert_proved(&steps, &premises, &f("Q"));

    // The same proof with the justification order flipped
    let steps = [
        ProofStep::assumption("1", f("P"), 0),
        ProofStep::assumption("2", f("P -> Q"), 0),
        ProofStep::derived("3", f("Q"), Rule::ImpliesElim, &["2", "1"], 0),
    ];
    assert_proved(&steps, &premises, &f("Q"));
}

#[test]
fn conditional_introduction_proves_identity() {
    let steps = [
        ProofStep::assumption("1", f("P"), 1),
        ProofStep::derived("2", f("P -> P"), Rule::ImpliesIntro, &["1"], 0),
    ];
    assert_proved(&steps, &[], &f("P -> P"));
}

#[test]
fn disjunction_elimination() {
    let premises = [f("P \\/ Q"), f("P -> R"), f("Q -> R")];
    let steps = [
        ProofStep::assumption("disj", f("P \\/ Q"), 0),
        ProofStep::assumption("pr", f("P -> R"), 0),
        ProofStep::assumption("qr", f("Q -> R"), 0),
        ProofStep::assumption("sub1", f("P"), 1),
        ProofStep::derived("sub1r", f("R"), Rule::ImpliesElim, &["sub1", "pr"], 1),
        ProofStep::assumption("sub2", f("Q"), 1),
        ProofStep::derived("sub2r", f("R"), Rule::ImpliesElim, &["sub2", "qr"], 1),
        ProofStep::derived("goal", f("R"), Rule::OrElim, &["disj", "sub1", "sub2"], 0),
    ];
    assert_proved(&steps, &premises, &f("R"));
}

#[test]
fn negation_introduction() {
    // P -> ⊥ ⊢ ~P
    let steps = [
        ProofStep::assumption("1", f("P -> ⊥"), 0),
        ProofStep::assumption("2", f("P"), 1),
        ProofStep::derived("3", f("⊥"), Rule::ImpliesElim, &["2", "1"], 1),
        ProofStep::derived("4", f("~P"), Rule::NotIntro, &["2"], 0),
    ];
    assert_proved(&steps, &[f("P -> ⊥")], &f("~P"));

    // A subproof that ends on something other than ⊥ is rejected
    let steps = [
        ProofStep::assumption("1", f("P -> Q"), 0),
        ProofStep::assumption("2", f("P"), 1),
        ProofStep::derived("3", f("Q"), Rule::ImpliesElim, &["2", "1"], 1),
        ProofStep::derived("4", f("~P"), Rule::NotIntro, &["2"], 0),
    ];
    let result = check(&steps, &[f("P -> Q")], &f("~P"));
    assert!(!result.valid);
    assert_eq!(
        result.errors[0].code,
        ErrorCode::SubproofConclusionMismatch
    );
}

#[test]
fn reductio_ad_absurdum() {
    // ~P -> ⊥ ⊢ P by assuming ~P and deriving ⊥
    let premises = [f("~P -> ⊥")];
    let steps = [
        ProofStep::assumption("1", f("~P -> ⊥"), 0),
        ProofStep::assumption("2", f("~P"), 1),
        ProofStep::derived("3", f("⊥"), Rule::ImpliesElim, &["2", "1"], 1),
        ProofStep::derived("4", f("P"), Rule::Raa, &["2"], 0),
    ];
    assert_proved(&steps, &premises, &f("P"));
}

#[test]
fn biconditional_round_trip_proof() {
    // P -> Q, Q -> P ⊢ P <-> Q, then use it to move from Q to P
    let premises = [f("P -> Q"), f("Q -> P"), f("Q")];
    let steps = [
        ProofStep::assumption("1", f("P -> Q"), 0),
        ProofStep::assumption("2", f("Q -> P"), 0),
        ProofStep::assumption("3", f("Q"), 0),
        ProofStep::derived("4", f("P <-> Q"), Rule::IffIntro, &["1", "2"], 0),
        ProofStep::derived("5", f("P"), Rule::IffElim, &["4", "3"], 0),
    ];
    assert_proved(&steps, &premises, &f("P"));
}

#[test]
fn explosion_spreads_bottom_anywhere() {
    let premises = [f("⊥")];
    let steps = [
        ProofStep::assumption("1", f("⊥"), 0),
        ProofStep::derived("2", f("Q /\\ R"), Rule::BottomElim, &["1"], 0),
    ];
    assert_proved(&steps, &premises, &f("Q /\\ R"));
}

#[test]
fn conjunction_shuffle() {
    // P /\ Q ⊢ Q /\ P
    let premises = [f("P /\\ Q")];
    let steps = [
        ProofStep::assumption("1", f("P /\\ Q"), 0),
        ProofStep::derived("2", f("P"), Rule::AndElimL, &["1"], 0),
        ProofStep::derived("3", f("Q"), Rule::AndElimR, &["1"], 0),
        ProofStep::derived("4", f("Q /\\ P"), Rule::AndIntro, &["3", "2"], 0),
    ];
    assert_proved(&steps, &premises, &f("Q /\\ P"));
}

#[test]
fn nested_subproofs_two_deep() {
    // ⊢ P -> (Q -> P)
    let steps = [
        ProofStep::assumption("1", f("P"), 1),
        ProofStep::assumption("2", f("Q"), 2),
        ProofStep::derived("3", f("P \\/ P"), Rule::OrIntroL, &["1"], 2),
        ProofStep::derived("4", f("P"), Rule::AndElimL, &["1"], 2),
        ProofStep::derived("5", f("Q -> P"), Rule::ImpliesIntro, &["2"], 1),
        ProofStep::derived("6", f("P -> (Q -> P)"), Rule::ImpliesIntro, &["1"], 0),
    ];
    // Step 4 is a bad and_elim_l on a bare variable; replace it so the
    // inner subproof legitimately ends with P.
    let result = check(&steps, &[], &f("P -> (Q -> P)"));
    assert!(!result.valid, "the and_elim_l filler must fail");

    let steps = [
        ProofStep::assumption("1", f("P"), 1),
        ProofStep::assumption("2", f("Q"), 2),
        ProofStep::derived("3", f("P /\\ Q"), Rule::AndIntro, &["1", "2"], 2),
        ProofStep::derived("4", f("P"), Rule::AndElimL, &["3"], 2),
        ProofStep::derived("5", f("Q -> P"), Rule::ImpliesIntro, &["2"], 1),
        ProofStep::derived("6", f("P -> (Q -> P)"), Rule::ImpliesIntro, &["1"], 0),
    ];
    assert_proved(&steps, &[], &f("P -> (Q -> P)"));
}

// ── Failure modes ────────────────────────────────────────────────────────────

#[test]
fn empty_proof_reports_empty_proof() {
    let result = check(&[], &[], &f("P"));
    assert!(!result.valid);
    assert!(!result.complete);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::EmptyProof);
}

#[test]
fn citing_into_a_closed_subproof_is_inaccessible() {
    // The final step reaches into a subproof that has already closed
    let steps = [
        ProofStep::assumption("1", f("P"), 1),
        ProofStep::derived("2", f("P \\/ Q"), Rule::OrIntroL, &["1"], 1),
        ProofStep::derived("3", f("P -> P \\/ Q"), Rule::ImpliesIntro, &["1"], 0),
        ProofStep::derived("4", f("P \\/ Q"), Rule::OrIntroL, &["1"], 0),
    ];
    let result = check(&steps, &[], &f("P \\/ Q"));
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::InaccessibleJustification);
    assert_eq!(result.errors[0].step_id.as_deref(), Some("4"));
}

#[test]
fn sibling_subproof_is_not_visible() {
    let steps = [
        ProofStep::assumption("a", f("P"), 1),
        ProofStep::derived("b", f("P \\/ Q"), Rule::OrIntroL, &["a"], 1),
        ProofStep::assumption("c", f("R"), 1),
        // Reaches back into the closed sibling subproof
        ProofStep::derived("d", f("P \\/ Q"), Rule::AndElimL, &["b"], 1),
    ];
    let result = check(&steps, &[], &f("P \\/ Q"));
    assert!(result
        .errors
        .iter()
        .any(|e| e.code == ErrorCode::InaccessibleJustification));
}

#[test]
fn error_list_preserves_step_order() {
    let steps = [
        ProofStep::derived("x", f("P"), Rule::AndElimL, &["missing"], 0),
        ProofStep::derived("y", f("Q"), Rule::NotElim, &["x"], 0),
        ProofStep::derived("z", f("R"), Rule::BottomElim, &["y"], 0),
    ];
    let result = check(&steps, &[], &f("R"));
    let ids: Vec<_> = result
        .errors
        .iter()
        .map(|e| e.step_id.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["x", "y", "z"]);
}

#[test]
fn validity_and_completeness_are_independent() {
    // Valid but incomplete: correct derivation of the wrong conclusion
    let steps = [
        ProofStep::assumption("1", f("P /\\ Q"), 0),
        ProofStep::derived("2", f("P"), Rule::AndElimL, &["1"], 0),
    ];
    let result = check(&steps, &[f("P /\\ Q")], &f("Q"));
    assert!(result.valid);
    assert!(!result.complete);

    // Invalid but complete: right conclusion, broken justification
    let steps = [
        ProofStep::assumption("1", f("P /\\ Q"), 0),
        ProofStep::derived("2", f("Q"), Rule::AndElimL, &["1"], 0),
    ];
    let result = check(&steps, &[f("P /\\ Q")], &f("Q"));
    assert!(!result.valid);
    assert!(result.complete);
}

// ── The theorem rule ─────────────────────────────────────────────────────────

#[test]
fn theorem_citation_in_a_proof() {
    let mut library = TheoremLibrary::new();
    library.insert(ProvenTheorem::new("lem", vec![], f("Q \\/ ~Q")));

    let steps = [
        ProofStep::assumption("1", f("P"), 0),
        ProofStep::theorem("2", f("Q \\/ ~Q"), "lem"),
        ProofStep::derived("3", f("P /\\ (Q \\/ ~Q)"), Rule::AndIntro, &["1", "2"], 0),
    ];
    let result = check_proof(
        &steps,
        &[f("P")],
        &f("P /\\ (Q \\/ ~Q)"),
        &library,
    );
    assert!(result.valid && result.complete, "errors: {:?}", result.errors);
}

#[test]
fn theorem_errors_surface_with_codes() {
    let library = TheoremLibrary::new();
    let steps = [ProofStep::theorem("1", f("P"), "ghost")];
    let result = check_proof(&steps, &[], &f("P"), &library);
    assert_eq!(result.errors[0].code, ErrorCode::TheoremNotFound);
}

// ── Determinism under truncation ─────────────────────────────────────────────

#[test]
fn removing_the_last_step_never_invalidates_earlier_steps() {
    let premises = [f("P \\/ Q"), f("P -> R"), f("Q -> R")];
    let steps = vec![
        ProofStep::assumption("disj", f("P \\/ Q"), 0),
        ProofStep::assumption("pr", f("P -> R"), 0),
        ProofStep::assumption("qr", f("Q -> R"), 0),
        ProofStep::assumption("sub1", f("P"), 1),
        ProofStep::derived("sub1r", f("R"), Rule::ImpliesElim, &["sub1", "pr"], 1),
        ProofStep::assumption("sub2", f("Q"), 1),
        ProofStep::derived("sub2r", f("R"), Rule::ImpliesElim, &["sub2", "qr"], 1),
        ProofStep::derived("goal", f("R"), Rule::OrElim, &["disj", "sub1", "sub2"], 0),
    ];
    for len in (1..=steps.len()).rev() {
        let result = check(&steps[..len], &premises, &f("R"));
        assert!(
            result.valid,
            "prefix of length {} produced {:?}",
            len, result.errors
        );
    }
}
