//! Scenario S1 from `spec.md` §8: a twelve-ish-entry transcript deriving
//! `1+1=2` from the Peano axioms alone, ported verbatim (transcript shape, comments,
//! and all) from `pyano/proof_checker_test.py::test_one_plus_one_is_two` and its
//! `_wrong_proof` sibling.

use panoka::ast::{Pred, Term};
use panoka::axioms::{get_peano_axiom_x_plus_succ_y, get_peano_axiom_x_plus_zero};
use panoka::checker::{assert_proof_is_valid, ProofEntry};
use panoka::subst::substitute_forall;

#[test]
fn one_plus_one_is_two() {
    let one = Term::succ(Term::zero());
    let two = Term::succ(one.clone());
    let theorem = Pred::eq(Term::add(one.clone(), one.clone()), two);

    let x_plus_succ_y = get_peano_axiom_x_plus_succ_y();
    let x_plus_succ_y_subst_ = substitute_forall(&x_plus_succ_y, &one);
    let x_plus_succ_y_subst = substitute_forall(&x_plus_succ_y_subst_, &Term::zero());

    let x_plus_zero = get_peano_axiom_x_plus_zero();
    let x_plus_zero_subst = substitute_forall(&x_plus_zero, &one);

    let subst = Pred::implies(
        x_plus_zero_subst.clone(),
        Pred::implies(x_plus_succ_y_subst.clone(), theorem.clone()),
    );
    let (_, subst_q) = subst.as_implies().unwrap();
    let subst_q = subst_q.clone();

    let proof: Vec<ProofEntry> = vec![
        "x + s(y) = s(x + y)".into(),
        x_plus_succ_y.clone().into(),
        "1 + 1 = s(1 + 0)".into(),
        Pred::implies(x_plus_succ_y.clone(), x_plus_succ_y_subst_.clone()).into(),
        x_plus_succ_y_subst_.clone().into(),
        Pred::implies(x_plus_succ_y_subst_.clone(), x_plus_succ_y_subst.clone()).into(),
        x_plus_succ_y_subst.clone().into(),
        "x + 0 = x".into(),
        x_plus_zero.clone().into(),
        "1 + 0 = 1".into(),
        Pred::implies(x_plus_zero.clone(), x_plus_zero_subst.clone()).into(),
        x_plus_zero_subst.into(),
        "((1 + 0) = 1) => ((1 + 1) = s(1 + 0)) => ((1 + 1) = s(1))".into(),
        subst.into(),
        subst_q.into(),
        theorem.into(),
    ];

    assert_proof_is_valid(&proof).expect("1+1=2 transcript should be accepted");
}

/// The source's deliberately broken variant: the second `substitute_forall`
/// application substitutes `one` where `Zero()` was required, so `x_plus_succ_y_subst`
/// ends up claiming `1+S(1) = S(1+1)` instead of `1+S(0) = S(1+0)`. The source's test
/// asserts this fails at transcript index 13 for this exact step ordering.
#[test]
fn one_plus_one_is_two_wrong_proof() {
    let one = Term::succ(Term::zero());
    let two = Term::succ(one.clone());
    let theorem = Pred::eq(Term::add(one.clone(), one.clone()), two);

    let x_plus_succ_y = get_peano_axiom_x_plus_succ_y();
    let x_plus_succ_y_subst_ = substitute_forall(&x_plus_succ_y, &one);
    // BUG (ported deliberately): should be `substitute_forall(&x_plus_succ_y_subst_, &Term::zero())`.
    let x_plus_succ_y_subst = substitute_forall(&x_plus_succ_y_subst_, &one);

    let x_plus_zero = get_peano_axiom_x_plus_zero();
    let x_plus_zero_subst = substitute_forall(&x_plus_zero, &one);

    let subst = Pred::implies(
        x_plus_zero_subst.clone(),
        Pred::implies(x_plus_succ_y_subst.clone(), theorem.clone()),
    );
    let (_, subst_q) = subst.as_implies().unwrap();
    let subst_q = subst_q.clone();

    let proof: Vec<ProofEntry> = vec![
        "x + s(y) = s(x + y)".into(),
        x_plus_succ_y.clone().into(),
        "1 + 1 = s(1 + 0)".into(),
        Pred::implies(x_plus_succ_y.clone(), x_plus_succ_y_subst_.clone()).into(),
        x_plus_succ_y_subst_.clone().into(),
        Pred::implies(x_plus_succ_y_subst_.clone(), x_plus_succ_y_subst.clone()).into(),
        x_plus_succ_y_subst.clone().into(),
        "x + 0 = x".into(),
        x_plus_zero.clone().into(),
        "1 + 0 = 1".into(),
        Pred::implies(x_plus_zero.clone(), x_plus_zero_subst.clone()).into(),
        x_plus_zero_subst.into(),
        "((1 + 0) = 1) => ((1 + 1) = s(1 + 0)) => ((1 + 1) = s(1))".into(),
        subst.into(),
        subst_q.into(),
        theorem.into(),
    ];

    let err = assert_proof_is_valid(&proof).expect_err("broken transcript must be rejected");
    assert_eq!(err.invalid_formula_idx(), 13);
}
