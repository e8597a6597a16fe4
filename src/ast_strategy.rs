//! Property-based testing strategies for [`crate::ast::Term`] and [`crate::ast::Pred`].
//!
//! Builds `proptest` strategies for the Peano term algebra and first-order formula
//! algebra. Kept in the library (rather than under `tests/`) so both unit property
//! tests and the integration suite in `tests/` can share it.

use proptest::prelude::*;

use crate::ast::{Pred, Term};

/// A small fixed pool of variable names, kept finite so that generated formulas have
/// a realistic chance of sharing free/bound names (exercising alpha-equivalence and
/// capture-policy edge cases) rather than almost always being pairwise disjoint.
const VAR_POOL: &[&str] = &["x", "y", "z", "a", "b"];

pub fn arb_var_name() -> impl Strategy<Value = String> {
    proptest::sample::select(VAR_POOL).prop_map(|s| s.to_string())
}

/// Arbitrary `Term`, recursively built from `Zero`/`Var` leaves via `Succ`/`Add`/`Mul`.
pub fn arb_term(max_depth: u32, max_size: u32) -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        Just(Term::zero()),
        arb_var_name().prop_map(Term::var),
    ];
    leaf.prop_recursive(max_depth, max_size, max_size, |inner| {
        prop_oneof![
            inner.clone().prop_map(Term::succ),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Term::add(a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| Term::mul(a, b)),
        ]
    })
}

/// Arbitrary `Pred`, recursively built from `Eq` leaves via `And`/`Not`/`Implies`/
/// `ForAll`.
pub fn arb_pred(max_depth: u32, max_size: u32) -> impl Strategy<Value = Pred> {
    let leaf = (arb_term(2, 4), arb_term(2, 4)).prop_map(|(a, b)| Pred::eq(a, b));
    leaf.prop_recursive(max_depth, max_size, max_size, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Pred::and(a, b)),
            inner.clone().prop_map(Pred::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Pred::implies(a, b)),
            (arb_var_name(), inner).prop_map(|(v, p)| Pred::forall(v, p)),
        ]
    })
}

#[cfg(test)]
mod test {
    use super::*;

    proptest! {
        #[test]
        fn arb_pred_builds_without_panicking(p in arb_pred(4, 16)) {
            // Construction alone exercises the smart constructors' invariants; round
            // through Display to catch any renderer panics too.
            let _ = p.to_string();
        }
    }
}
