//! The proof checker.
//!
//! A single forward pass over a transcript, accepting each formula entry as either an
//! axiom instance or a modus-ponens consequence of previously accepted entries.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;

use crate::ast::Pred;
use crate::axioms::is_axiom;

/// One entry in a proof transcript: either an opaque comment (ignored for validity,
/// but remembered as a diagnostic hint) or a formula.
#[derive(Debug, Clone)]
pub enum ProofEntry {
    Comment(String),
    Formula(Pred),
}

impl From<Pred> for ProofEntry {
    fn from(p: Pred) -> Self {
        ProofEntry::Formula(p)
    }
}

impl<'a> From<&'a str> for ProofEntry {
    fn from(s: &'a str) -> Self {
        ProofEntry::Comment(s.to_string())
    }
}

impl From<String> for ProofEntry {
    fn from(s: String) -> Self {
        ProofEntry::Comment(s)
    }
}

/// An invalid-proof error: the offending formula, its index, and the nearest
/// preceding comment (if any). Hand-written `Display`/`Error` rather than a derive
/// macro over a three-field struct.
#[derive(Debug, Clone)]
pub struct InvalidProofError {
    invalid_formula: Pred,
    invalid_formula_idx: usize,
    last_comment: Option<String>,
}

impl InvalidProofError {
    pub fn invalid_formula(&self) -> &Pred {
        &self.invalid_formula
    }

    pub fn invalid_formula_idx(&self) -> usize {
        self.invalid_formula_idx
    }

    pub fn last_comment(&self) -> Option<&str> {
        self.last_comment.as_deref()
    }
}

impl fmt::Display for InvalidProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Proof not valid: error at step number {}, last comment: {}\n\nInvalid formula: {}",
            self.invalid_formula_idx,
            self.last_comment.as_deref().unwrap_or(""),
            self.invalid_formula
        )
    }
}

impl Error for InvalidProofError {}

fn previous_comment(proof: &[ProofEntry], idx: usize) -> Option<String> {
    proof[..=idx].iter().rev().find_map(|e| match e {
        ProofEntry::Comment(c) => Some(c.clone()),
        ProofEntry::Formula(_) => None,
    })
}

/// Checks that `proof` is valid: every formula entry is either an axiom instance or
/// follows from a previously-accepted `Implies(P, current)` where `P` is itself
/// previously accepted. Runs in a single forward pass; returns on the first failure.
pub fn assert_proof_is_valid(proof: &[ProofEntry]) -> Result<(), InvalidProofError> {
    let mut implications: HashMap<Pred, HashSet<Pred>> = HashMap::new();
    let mut valid_formulae: HashSet<Pred> = HashSet::new();

    for (idx, entry) in proof.iter().enumerate() {
        let formula = match entry {
            ProofEntry::Comment(_) => continue,
            ProofEntry::Formula(f) => f,
        };

        let ok = is_axiom(formula)
            || implications
                .get(formula)
                .map(|ants| ants.iter().any(|p| valid_formulae.contains(p)))
                .unwrap_or(false);

        if !ok {
            return Err(InvalidProofError {
                invalid_formula: formula.clone(),
                invalid_formula_idx: idx,
                last_comment: previous_comment(proof, idx),
            });
        }

        valid_formulae.insert(formula.clone());

        if let Some((p, q)) = formula.as_implies() {
            implications
                .entry(q.clone())
                .or_insert_with(HashSet::new)
                .insert(p.clone());
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::Term;

    #[test]
    fn rejects_proof_with_unjustified_second_entry() {
        let proof = vec![
            ProofEntry::Formula(Pred::forall(
                "x",
                Pred::eq(Term::var("x"), Term::var("x")),
            )),
            ProofEntry::Formula(Pred::forall(
                "x",
                Pred::eq(Term::var("x"), Term::zero()),
            )),
        ];
        let err = assert_proof_is_valid(&proof).expect_err("should be rejected");
        assert_eq!(err.invalid_formula_idx(), 1);
    }

    #[test]
    fn accepts_single_axiom() {
        let proof = vec![ProofEntry::Formula(Pred::forall(
            "x",
            Pred::eq(Term::var("x"), Term::var("x")),
        ))];
        assert!(assert_proof_is_valid(&proof).is_ok());
    }

    #[test]
    fn accepts_modus_ponens_step() {
        let p = Pred::forall("x", Pred::eq(Term::var("x"), Term::var("x")));
        let q = Pred::eq(Term::zero(), Term::zero());
        let proof = vec![
            ProofEntry::Formula(p.clone()),
            ProofEntry::Formula(Pred::implies(p, q.clone())),
            ProofEntry::Formula(q),
        ];
        assert!(assert_proof_is_valid(&proof).is_ok());
    }
}
