//! The axiom recognizer.
//!
//! Eight independent schema predicates, each operating on a formula with zero or
//! more free variables understood as implicitly universally quantified, wrapped in a
//! uniform driver (`is_general_axiom`) that strips leading `ForAll` quantifiers after
//! checking the whole formula is closed.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::ast::{Pred, PredKind, Term};
use crate::matcher::match_template;
use crate::subst::{get_free_vars, substitute_forall};

/// Rejects open formulas outright, then tries `schema` against `F`, peeling one
/// leading `ForAll` at a time until it runs out of quantifiers to peel.
fn is_general_axiom(f: &Pred, inner_matcher: impl Fn(&Pred) -> bool) -> bool {
    if !get_free_vars(f).is_empty() {
        return false;
    }
    let mut cur = f.clone();
    loop {
        if inner_matcher(&cur) {
            return true;
        }
        match cur.as_forall() {
            Some((_, body)) => cur = body.clone(),
            None => return false,
        }
    }
}

pub fn is_induction_axiom(f: &Pred) -> bool {
    is_general_axiom(f, is_induction_axiom_impl)
}

fn is_induction_axiom_impl(f: &Pred) -> bool {
    // (P(0) & (forall k. P(k) => P(k+1))) => forall x. P(x)
    let (lhs_and, rhs_forall) = match f.as_implies() {
        Some((p, q)) if q.as_forall().is_some() => (p, q),
        _ => return false,
    };
    let (base, inductive_step) = match lhs_and.kind() {
        PredKind::And(a, b) => (a, b),
        _ => return false,
    };
    if *base != substitute_forall(rhs_forall, &Term::zero()) {
        return false;
    }
    let (k, _) = match inductive_step.as_forall() {
        Some(pair) => pair,
        None => return false,
    };
    let expected = Pred::forall(
        k.to_string(),
        Pred::implies(
            substitute_forall(rhs_forall, &Term::var(k)),
            substitute_forall(rhs_forall, &Term::succ(Term::var(k))),
        ),
    );
    expected == *inductive_step
}

fn evaluate_with_truth_assignments(
    f: &Pred,
    truth_assignment: &HashMap<Pred, bool>,
) -> Result<bool, ()> {
    if let Some(v) = truth_assignment.get(f) {
        return Ok(*v);
    }
    match f.kind() {
        PredKind::And(a, b) => Ok(evaluate_with_truth_assignments(a, truth_assignment)?
            && evaluate_with_truth_assignments(b, truth_assignment)?),
        PredKind::Not(x) => Ok(!evaluate_with_truth_assignments(x, truth_assignment)?),
        PredKind::Implies(p, q) => Ok(!evaluate_with_truth_assignments(p, truth_assignment)?
            || evaluate_with_truth_assignments(q, truth_assignment)?),
        _ => Err(()),
    }
}

fn collect_toplevel_preds(f: &Pred, out: &mut Vec<Pred>) {
    match f.kind() {
        PredKind::ForAll(..) | PredKind::Eq(..) => out.push(f.clone()),
        PredKind::Not(x) => collect_toplevel_preds(x, out),
        PredKind::And(a, b) | PredKind::Implies(a, b) => {
            collect_toplevel_preds(a, out);
            collect_toplevel_preds(b, out);
        }
    }
}

fn is_tautology_impl(f: &Pred) -> bool {
    let mut preds = Vec::new();
    collect_toplevel_preds(f, &mut preds);
    // De-duplicate by (alpha-equivalent) structural equality -- `(A & A)` has one
    // atom, not two.
    let mut atoms: Vec<Pred> = Vec::new();
    for p in preds.drain(..) {
        if !atoms.iter().any(|a| *a == p) {
            atoms.push(p);
        }
    }

    let n = atoms.len();
    for mask in 0u64..(1u64 << n) {
        let mut assignment = HashMap::new();
        for (i, atom) in atoms.iter().enumerate() {
            assignment.insert(atom.clone(), (mask >> i) & 1 == 1);
        }
        match evaluate_with_truth_assignments(f, &assignment) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(()) => return false,
        }
    }
    true
}

pub fn is_tautology(f: &Pred) -> bool {
    is_general_axiom(f, is_tautology_impl)
}

fn is_forall_elimination_impl(f: &Pred) -> bool {
    // forall x. P(x) => P(k)
    let (p, q) = match f.as_implies() {
        Some(pair) => pair,
        None => return false,
    };
    let (x, body) = match p.as_forall() {
        Some(pair) => pair,
        None => return false,
    };
    match_template(body, q, &[x]).is_some()
}

pub fn is_forall_elimination(f: &Pred) -> bool {
    is_general_axiom(f, is_forall_elimination_impl)
}

fn is_forall_introduction_impl(f: &Pred) -> bool {
    // f => forall x. f
    let (p, q) = match f.as_implies() {
        Some(pair) => pair,
        None => return false,
    };
    let (x, body) = match q.as_forall() {
        Some(pair) => pair,
        None => return false,
    };
    !get_free_vars(p).contains(x) && body == p
}

pub fn is_forall_introduction(f: &Pred) -> bool {
    is_general_axiom(f, is_forall_introduction_impl)
}

fn is_forall_split_impl(f: &Pred) -> bool {
    // forall x. (A => B) => ((forall x. A) => (forall x. B))
    //     ^P                       ^Q               ^R
    let (p, rhs) = match f.as_implies() {
        Some(pair) => pair,
        None => return false,
    };
    let (x, p_body) = match p.as_forall() {
        Some(pair) => pair,
        None => return false,
    };
    let (a, b) = match p_body.kind() {
        PredKind::Implies(a, b) => (a, b),
        _ => return false,
    };
    let (q, r) = match rhs.as_implies() {
        Some(pair) => pair,
        None => return false,
    };
    if q.as_forall().is_none() || r.as_forall().is_none() {
        return false;
    }
    Pred::forall(x.to_string(), a.clone()) == *q && Pred::forall(x.to_string(), b.clone()) == *r
}

pub fn is_forall_split(f: &Pred) -> bool {
    is_general_axiom(f, is_forall_split_impl)
}

fn is_reflexivity_axiom_impl(f: &Pred) -> bool {
    *f == Pred::forall("x", Pred::eq(Term::var("x"), Term::var("x")))
}

pub fn is_reflexivity_axiom(f: &Pred) -> bool {
    is_general_axiom(f, is_reflexivity_axiom_impl)
}

fn is_subst_axiom_impl(f: &Pred) -> bool {
    // x = y => (A => B) where B is A with x replaced by y in some places.
    let (p, rhs) = match f.as_implies() {
        Some(pair) => pair,
        None => return false,
    };
    let (x, y) = match p.as_eq() {
        Some(pair) => pair,
        None => return false,
    };
    let (a, b) = match rhs.as_implies() {
        Some(pair) => pair,
        None => return false,
    };

    let mut gen = crate::subst::NameGenerator::for_pred(f);
    let mut varnames: Vec<String> = Vec::new();
    let template = crate::subst::replace_subformula(
        &crate::ast::Formula::Pred(a.clone()),
        &crate::ast::Formula::Term(x.clone()),
        &mut || {
            let name = gen.generate();
            varnames.push(name.clone());
            crate::ast::Formula::Term(Term::var(name))
        },
    )
    .into_pred();

    let capture_refs: Vec<&str> = varnames.iter().map(|s| s.as_str()).collect();
    let captured = match match_template(&template, b, &capture_refs) {
        Some(c) => c,
        None => return false,
    };

    captured.values().all(|v| v == x || v == y)
}

pub fn is_subst_axiom(f: &Pred) -> bool {
    is_general_axiom(f, is_subst_axiom_impl)
}

struct PeanoAxioms {
    zero_is_not_succ: Pred,
    succ_is_injective: Pred,
    x_plus_zero: Pred,
    x_plus_succ_y: Pred,
    x_times_zero: Pred,
    x_times_succ_y: Pred,
}

fn gen_first_order_peano_axioms() -> PeanoAxioms {
    let x = Term::var("x");
    let y = Term::var("y");

    let forallx = |body: Pred| Pred::forall("x", body);
    let forallxy = |body: Pred| Pred::forall("x", Pred::forall("y", body));

    PeanoAxioms {
        zero_is_not_succ: forallx(Pred::not(Pred::eq(Term::zero(), Term::succ(x.clone())))),
        succ_is_injective: forallxy(Pred::implies(
            Pred::eq(Term::succ(x.clone()), Term::succ(y.clone())),
            Pred::eq(x.clone(), y.clone()),
        )),
        x_plus_zero: forallx(Pred::eq(Term::add(x.clone(), Term::zero()), x.clone())),
        x_plus_succ_y: forallxy(Pred::eq(
            Term::add(x.clone(), Term::succ(y.clone())),
            Term::succ(Term::add(x.clone(), y.clone())),
        )),
        x_times_zero: forallx(Pred::eq(Term::mul(x.clone(), Term::zero()), Term::zero())),
        x_times_succ_y: forallxy(Pred::eq(
            Term::mul(x.clone(), Term::succ(y.clone())),
            Term::add(Term::mul(x.clone(), y.clone()), x.clone()),
        )),
    }
}

fn peano_axioms() -> &'static PeanoAxioms {
    static AXIOMS: OnceLock<PeanoAxioms> = OnceLock::new();
    AXIOMS.get_or_init(gen_first_order_peano_axioms)
}

/// `forall x. 0 != S(x)`.
pub fn get_peano_axiom_zero_is_not_succ() -> Pred {
    peano_axioms().zero_is_not_succ.clone()
}

/// `forall x, y. S(x)=S(y) => x=y`.
pub fn get_peano_axiom_succ_is_injective() -> Pred {
    peano_axioms().succ_is_injective.clone()
}

/// `forall x. x+0=x`.
pub fn get_peano_axiom_x_plus_zero() -> Pred {
    peano_axioms().x_plus_zero.clone()
}

/// `forall x, y. x+S(y)=S(x+y)`.
pub fn get_peano_axiom_x_plus_succ_y() -> Pred {
    peano_axioms().x_plus_succ_y.clone()
}

/// `forall x. x*0=0`.
pub fn get_peano_axiom_x_times_zero() -> Pred {
    peano_axioms().x_times_zero.clone()
}

/// `forall x, y. x*S(y)=x*y+x`.
pub fn get_peano_axiom_x_times_succ_y() -> Pred {
    peano_axioms().x_times_succ_y.clone()
}

pub fn is_first_order_peano_axiom(f: &Pred) -> bool {
    let a = peano_axioms();
    [
        &a.zero_is_not_succ,
        &a.succ_is_injective,
        &a.x_plus_zero,
        &a.x_plus_succ_y,
        &a.x_times_zero,
        &a.x_times_succ_y,
    ]
    .iter()
    .any(|ax| *ax == f)
}

/// `true` iff `f` is an instance of one of the eight recognized schemas.
pub fn is_axiom(f: &Pred) -> bool {
    is_induction_axiom(f)
        || is_tautology(f)
        || is_forall_elimination(f)
        || is_forall_introduction(f)
        || is_forall_split(f)
        || is_reflexivity_axiom(f)
        || is_subst_axiom(f)
        || is_first_order_peano_axiom(f)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::helpers::{forall_n, gen_induction_axiom, less_than_or_eq, or};

    #[test]
    fn induction_axiom_recognized() {
        let p = Pred::eq(Term::var("x"), Term::zero());
        let induction = gen_induction_axiom("x", &p);
        assert!(is_induction_axiom(&induction));
    }

    #[test]
    fn induction_axiom_rejects_mismatched_predicates() {
        let two = Term::succ(Term::succ(Term::zero()));
        let p1 = or(
            less_than_or_eq(Term::var("x"), two.clone()),
            less_than_or_eq(two.clone(), Term::var("x")),
        );
        let p2 = or(
            less_than_or_eq(two.clone(), Term::var("x")),
            less_than_or_eq(Term::var("x"), two),
        );

        let base = crate::subst::substitute_free_var(&p1, "x", &Term::zero());
        let step = Pred::forall(
            "$k",
            Pred::implies(
                crate::subst::substitute_free_var(&p1, "x", &Term::var("$k")),
                crate::subst::substitute_free_var(&p1, "x", &Term::succ(Term::var("$k"))),
            ),
        );
        let conclusion = Pred::forall(
            "$x",
            crate::subst::substitute_free_var(&p2, "x", &Term::var("$x")),
        );
        let induction = Pred::implies(Pred::and(base, step), conclusion);
        assert!(!is_induction_axiom(&induction));
    }

    #[test]
    fn tautology_law_of_excluded_middle() {
        let pred = Pred::eq(Term::var("x"), Term::var("y"));
        let taut = forall_n(&["x", "y"], or(pred.clone(), Pred::not(pred)));
        assert!(is_tautology(&taut));
    }

    #[test]
    fn tautology_rejects_conjunction_with_negation() {
        let pred = Pred::eq(Term::var("x"), Term::var("y"));
        let not_taut = forall_n(&["x", "y"], Pred::and(pred.clone(), Pred::not(pred)));
        assert!(!is_tautology(&not_taut));
    }

    #[test]
    fn tautology_rejects_peano_addition_axiom() {
        let addition_axiom = get_peano_axiom_x_plus_succ_y();
        assert!(!is_tautology(&addition_axiom));
    }

    #[test]
    fn forall_elimination_accepts_uniform_substitution() {
        let addition_axiom = get_peano_axiom_x_plus_succ_y();
        let one = Term::succ(Term::zero());
        let add_one = Pred::forall(
            "x",
            Pred::eq(
                Term::add(one.clone(), Term::succ(Term::var("x"))),
                Term::succ(Term::add(one.clone(), Term::var("x"))),
            ),
        );
        let eliminate_forall = Pred::implies(addition_axiom, add_one);
        assert!(is_forall_elimination(&eliminate_forall));
    }

    #[test]
    fn forall_elimination_rejects_non_uniform_substitution() {
        let addition_axiom = get_peano_axiom_x_plus_succ_y();
        let one = Term::succ(Term::zero());
        let add_one_notok = Pred::forall(
            "x",
            Pred::eq(
                Term::add(one.clone(), Term::succ(Term::var("x"))),
                Term::succ(Term::add(Term::zero(), Term::var("x"))),
            ),
        );
        let eliminate_forall = Pred::implies(addition_axiom, add_one_notok);
        assert!(!is_forall_elimination(&eliminate_forall));
    }

    #[test]
    fn reflexivity_rejects_multi_quantifier_equality() {
        // Only `forall x. x=x` is recognized; a two-variable equality, even a
        // trivially true one, is not an instance of this schema.
        let axiom = Pred::forall(
            "x",
            Pred::forall(
                "y",
                Pred::eq(
                    Term::add(Term::var("x"), Term::var("y")),
                    Term::add(Term::var("x"), Term::var("y")),
                ),
            ),
        );
        assert!(!is_reflexivity_axiom(&axiom));
    }

    #[test]
    fn reflexivity_accepts_single_variable_form() {
        let axiom = Pred::forall("x", Pred::eq(Term::var("x"), Term::var("x")));
        assert!(is_reflexivity_axiom(&axiom));
    }

    #[test]
    fn subst_axiom_accepts_transitivity_shape() {
        let x = Term::var("x");
        let y = Term::var("y");
        let z = Term::var("z");
        let eq_is_transitive = forall_n(
            &["x", "y", "z"],
            Pred::implies(
                Pred::eq(x.clone(), y.clone()),
                Pred::implies(Pred::eq(x, z.clone()), Pred::eq(y, z)),
            ),
        );
        assert!(is_subst_axiom(&eq_is_transitive));
    }

    #[test]
    fn first_order_peano_rejects_mutated_variant() {
        let axiom = Pred::forall(
            "x",
            Pred::not(Pred::eq(Term::zero(), Term::var("x"))),
        );
        assert!(!is_first_order_peano_axiom(&axiom));
        assert!(!is_axiom(&axiom));
    }

    #[test]
    fn all_peano_axioms_are_axioms() {
        assert!(is_axiom(&get_peano_axiom_zero_is_not_succ()));
        assert!(is_axiom(&get_peano_axiom_succ_is_injective()));
        assert!(is_axiom(&get_peano_axiom_x_plus_zero()));
        assert!(is_axiom(&get_peano_axiom_x_plus_succ_y()));
        assert!(is_axiom(&get_peano_axiom_x_times_zero()));
        assert!(is_axiom(&get_peano_axiom_x_times_succ_y()));
    }
}
