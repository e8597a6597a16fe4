//! Algebraic-law property tests from `spec.md` §8, driven by `proptest` over the
//! strategies in `panoka::ast_strategy` (generalized from the donor crate's own
//! `ast_strategy.rs`/`proptest` dev-dependency).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use panoka::ast::{Pred, Term};
use panoka::ast_strategy::{arb_pred, arb_term};
use panoka::{canonicalize_bound_vars, get_free_vars, match_template, substitute_free_var};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

proptest! {
    /// Alpha equality: `ForAll(x, P) == ForAll(y, P[x:=y])` whenever `y` is not free in `P`.
    #[test]
    fn alpha_equal_under_fresh_rename(p in arb_pred(3, 12)) {
        let p = Pred::forall("x", p);
        let renamed = Pred::forall(
            "zz",
            substitute_free_var(p.as_forall().unwrap().1, "x", &Term::var("zz")),
        );
        // "zz" is outside the bounded variable pool `arb_pred` draws from, so it is
        // never free in the generated body.
        prop_assert_eq!(&p, &renamed);
    }

    /// Hash respects equality, in particular across alpha-renamed binders.
    #[test]
    fn hash_respects_alpha_equality(p in arb_pred(3, 12)) {
        let p = Pred::forall("x", p);
        let renamed = Pred::forall(
            "zz",
            substitute_free_var(p.as_forall().unwrap().1, "x", &Term::var("zz")),
        );
        prop_assert_eq!(p.clone(), renamed.clone());
        prop_assert_eq!(hash_of(&p), hash_of(&renamed));
    }

    /// Substitution is a no-op when the name being replaced isn't free.
    #[test]
    fn substitution_idempotent_when_name_absent(p in arb_pred(3, 12), v in proptest::sample::select(&["m", "n"][..])) {
        let name = v.to_string();
        prop_assume!(!get_free_vars(&p).contains(&name));
        let got = substitute_free_var(&p, &name, &Term::zero());
        prop_assert_eq!(got, p);
    }

    /// `canonicalize_bound_vars(f)` is alpha-equivalent to `f`.
    #[test]
    fn canonicalize_preserves_alpha_equivalence(p in arb_pred(3, 12)) {
        let canon = canonicalize_bound_vars(&p);
        prop_assert_eq!(canon, p);
    }

    /// Template round-trip: substituting `assignment` into `template` and matching
    /// back against the capture set recovers `assignment`.
    #[test]
    fn template_round_trip(t in arb_term(2, 6)) {
        let template = Pred::eq(Term::var("cap"), Term::zero());
        let instantiated = Pred::eq(t.clone(), Term::zero());
        let captured = match_template(&template, &instantiated, &["cap"])
            .expect("uniform single-occurrence substitution should always match");
        prop_assert_eq!(captured.get("cap"), Some(&t));
    }
}

/// No-capture-via-canonicalization's "disjoint bound names" half isn't a `proptest`
/// property (it's a structural fact about one canonicalization, not a universally
/// quantified equation over arbitrary inputs) -- checked directly instead.
#[test]
fn canonicalize_bound_vars_produces_disjoint_names() {
    let f = Pred::forall(
        "x",
        Pred::forall("x", Pred::eq(Term::var("x"), Term::var("x"))),
    );
    let canon = canonicalize_bound_vars(&f);
    let (outer, inner) = canon.as_forall().unwrap();
    let (inner_name, _) = inner.as_forall().unwrap();
    assert_ne!(outer, inner_name);
    assert_eq!(outer, "$0");
    assert_eq!(inner_name, "$1");
}
