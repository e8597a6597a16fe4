//! `panoka`: a small formal-reasoning kernel for first-order logic extended with
//! Peano arithmetic.
//!
//! Given a finite sequence of formulas, [`checker::assert_proof_is_valid`] answers one
//! question: is that sequence a valid proof? Everything else in this crate exists to
//! construct such sequences: the term/formula algebra ([`ast`]), substitution and
//! alpha-equivalence ([`subst`], [`matcher`]), the fixed family of recognized axiom
//! schemas ([`axioms`]), and a stateful proof-builder with a library of derived
//! tactics ([`builder`]) on top of which concrete arithmetic theorems ([`theorems`])
//! are proved.
//!
//! Data flows downward only -- `ast` has no dependents among these modules, `matcher`
//! and `subst` depend only on `ast`, `axioms` depends on those three, `checker`
//! depends on `axioms`, and `builder`/`theorems` sit on top of everything below them.

pub mod ast;
pub mod ast_strategy;
pub mod axioms;
pub mod builder;
pub mod checker;
pub mod helpers;
pub mod matcher;
pub mod subst;
pub mod theorems;

pub use ast::{Formula, Pred, Term};
pub use axioms::is_axiom;
pub use builder::ProofBuilder;
pub use checker::{assert_proof_is_valid, InvalidProofError, ProofEntry};
pub use matcher::match_template;
pub use subst::{
    canonicalize_bound_vars, get_free_vars, replace_subformula, substitute_forall,
    substitute_free_var, NameGenerator,
};

/// Thin free-function wrapper around [`NameGenerator::for_preds`].
pub fn get_name_generator(fs: &[&Pred]) -> NameGenerator {
    NameGenerator::for_preds(fs)
}
