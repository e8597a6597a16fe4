//! Derived formula constructors layered on top of the core algebra.
//!
//! These aren't kernel primitives, but they're exactly the vocabulary the axiom
//! recognizer, the proof builder, and the theorem library are all written against,
//! so they live in the crate rather than in test code.

use crate::ast::{Pred, Term};
use crate::subst::NameGenerator;

/// `Exists(var, body) = Not(ForAll(var, Not(body)))`.
pub fn exists<S: Into<String>>(var: S, body: Pred) -> Pred {
    Pred::not(Pred::forall(var, Pred::not(body)))
}

/// `Or(x, y) = Not(And(Not(x), Not(y)))`.
pub fn or(x: Pred, y: Pred) -> Pred {
    Pred::not(Pred::and(Pred::not(x), Pred::not(y)))
}

/// `x <= y = Exists(k. x + k = y)`, for a freshly generated `k`.
pub fn less_than_or_eq(x: Term, y: Term) -> Pred {
    let mut gen = NameGenerator::for_pred(&Pred::eq(x.clone(), y.clone()));
    let k = gen.generate();
    exists(k.clone(), Pred::eq(Term::add(x, Term::var(k)), y))
}

/// `x < y = (x <= y) & !(x = y)`.
pub fn less_than(x: Term, y: Term) -> Pred {
    Pred::and(
        less_than_or_eq(x.clone(), y.clone()),
        Pred::not(Pred::eq(x, y)),
    )
}

/// Binds every name in `vars` around `body`, innermost binder last in the list
/// (`forall_n(&["x","y"], body) == ForAll(x, ForAll(y, body))`). Requires at least
/// one name.
pub fn forall_n(vars: &[&str], body: Pred) -> Pred {
    assert!(!vars.is_empty(), "forall_n requires at least one variable");
    let mut result = body;
    for v in vars.iter().rev() {
        result = Pred::forall(*v, result);
    }
    result
}

/// Right-associative chain of implications: `implies_n(&[a,b,c,d]) == a => (b => (c => d))`.
/// Requires at least two arguments.
pub fn implies_n(args: &[Pred]) -> Pred {
    assert!(args.len() > 1, "implies_n requires at least two arguments");
    let mut iter = args.iter().rev();
    let mut result = iter.next().unwrap().clone();
    for a in iter {
        result = Pred::implies(a.clone(), result);
    }
    result
}

/// Builds the induction axiom instance for predicate `p` over `var`:
/// `(P(0) & forall k. P(k) => P(S(k))) => forall x. P(x)`.
///
/// `var` must be free in `p` (contract violation otherwise -- mirrors the Python
/// source's assertion in `gen_induction_axiom`).
pub fn gen_induction_axiom<S: Into<String>>(var: S, p: &Pred) -> Pred {
    let var = var.into();
    assert!(
        crate::subst::get_free_vars(p).contains(&var),
        "gen_induction_axiom: {} is not free in {}",
        var,
        p
    );
    let mut namegen = NameGenerator::for_pred(p);
    let k = namegen.generate();
    let x = namegen.generate();

    let base = crate::subst::substitute_free_var(p, &var, &Term::zero());
    let step = Pred::forall(
        k.clone(),
        Pred::implies(
            crate::subst::substitute_free_var(p, &var, &Term::var(k.clone())),
            crate::subst::substitute_free_var(p, &var, &Term::succ(Term::var(k))),
        ),
    );
    let conclusion = Pred::forall(
        x.clone(),
        crate::subst::substitute_free_var(p, &var, &Term::var(x)),
    );
    Pred::implies(Pred::and(base, step), conclusion)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn implies_n_renders_right_associative() {
        let a = Pred::eq(Term::zero(), Term::succ(Term::zero()));
        let b = Pred::eq(Term::zero(), Term::zero());
        let c = Pred::eq(Term::succ(Term::zero()), Term::zero());
        let d = Pred::eq(Term::succ(Term::zero()), Term::succ(Term::zero()));
        let chain = implies_n(&[a, b, c, d]);
        assert_eq!(
            chain.to_string(),
            "(0 = S(0)) => (0 = 0) => (S(0) = 0) => (S(0) = S(0))"
        );
    }

    #[test]
    fn gen_induction_axiom_renders_expected_shape() {
        let p = Pred::eq(Term::var("x"), Term::zero());
        let induction = gen_induction_axiom("x", &p);
        assert_eq!(
            induction.to_string(),
            "((0 = 0) & (forall $0. ($0 = 0) => (S($0) = 0))) => (forall $1. ($1 = 0))"
        );
    }

    #[test]
    #[should_panic(expected = "is not free in")]
    fn gen_induction_axiom_requires_free_var() {
        let p = Pred::eq(Term::var("y"), Term::zero());
        gen_induction_axiom("x", &p);
    }
}
