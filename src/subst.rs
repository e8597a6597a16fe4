//! Substitution, free-variable analysis, canonicalization, and subformula
//! replacement.
//!
//! None of these operations perform capture-avoiding renaming; that is a deliberate
//! design choice (see the "Capture policy" paragraph below). Callers that might
//! introduce capture must mint fresh names via `NameGenerator` first.

use std::collections::{HashMap, HashSet};

use crate::ast::{Formula, Pred, PredKind, Term, TermKind};

/// Generic substitution/free-variable-collection behavior shared by `Term` and
/// `Pred`. Kept internal: the public API is the free functions below.
trait Node: Sized + Clone {
    fn subst_free(&self, name: &str, value: &Term) -> Self;
    fn free_vars_rec(&self, env: &mut Vec<String>, out: &mut HashSet<String>);
    fn collect_var_names(&self, out: &mut HashSet<String>);
}

impl Node for Term {
    fn subst_free(&self, name: &str, value: &Term) -> Term {
        match self.kind() {
            TermKind::Zero => self.clone(),
            TermKind::Var(n) => {
                if n == name {
                    value.clone()
                } else {
                    self.clone()
                }
            }
            TermKind::Succ(x) => Term::succ(x.subst_free(name, value)),
            TermKind::Add(a, b) => Term::add(a.subst_free(name, value), b.subst_free(name, value)),
            TermKind::Mul(a, b) => Term::mul(a.subst_free(name, value), b.subst_free(name, value)),
        }
    }

    fn free_vars_rec(&self, env: &mut Vec<String>, out: &mut HashSet<String>) {
        match self.kind() {
            TermKind::Zero => {}
            TermKind::Var(n) => {
                if !env.iter().any(|e| e == n) {
                    out.insert(n.clone());
                }
            }
            TermKind::Succ(x) => x.free_vars_rec(env, out),
            TermKind::Add(a, b) | TermKind::Mul(a, b) => {
                a.free_vars_rec(env, out);
                b.free_vars_rec(env, out);
            }
        }
    }

    fn collect_var_names(&self, out: &mut HashSet<String>) {
        match self.kind() {
            TermKind::Zero => {}
            TermKind::Var(n) => {
                out.insert(n.clone());
            }
            TermKind::Succ(x) => x.collect_var_names(out),
            TermKind::Add(a, b) | TermKind::Mul(a, b) => {
                a.collect_var_names(out);
                b.collect_var_names(out);
            }
        }
    }
}

impl Node for Pred {
    fn subst_free(&self, name: &str, value: &Term) -> Pred {
        match self.kind() {
            PredKind::Eq(a, b) => Pred::eq(a.subst_free(name, value), b.subst_free(name, value)),
            PredKind::And(a, b) => Pred::and(a.subst_free(name, value), b.subst_free(name, value)),
            PredKind::Not(x) => Pred::not(x.subst_free(name, value)),
            PredKind::Implies(p, q) => {
                Pred::implies(p.subst_free(name, value), q.subst_free(name, value))
            }
            PredKind::ForAll(v, body) => {
                // A rebinding ForAll shadows the substitution: stop descending.
                if v == name {
                    self.clone()
                } else {
                    Pred::forall(v.clone(), body.subst_free(name, value))
                }
            }
        }
    }

    fn free_vars_rec(&self, env: &mut Vec<String>, out: &mut HashSet<String>) {
        match self.kind() {
            PredKind::Eq(a, b) => {
                a.free_vars_rec(env, out);
                b.free_vars_rec(env, out);
            }
            PredKind::And(a, b) | PredKind::Implies(a, b) => {
                a.free_vars_rec(env, out);
                b.free_vars_rec(env, out);
            }
            PredKind::Not(x) => x.free_vars_rec(env, out),
            PredKind::ForAll(v, body) => {
                env.push(v.clone());
                body.free_vars_rec(env, out);
                env.pop();
            }
        }
    }

    fn collect_var_names(&self, out: &mut HashSet<String>) {
        match self.kind() {
            PredKind::Eq(a, b) => {
                a.collect_var_names(out);
                b.collect_var_names(out);
            }
            PredKind::And(a, b) | PredKind::Implies(a, b) => {
                a.collect_var_names(out);
                b.collect_var_names(out);
            }
            PredKind::Not(x) => x.collect_var_names(out),
            PredKind::ForAll(_, body) => body.collect_var_names(out),
        }
    }
}

/// Substitutes every free occurrence of `name` with `value` in an arbitrary `Term`.
pub fn substitute_free_var_term(f: &Term, name: &str, value: &Term) -> Term {
    f.subst_free(name, value)
}

/// Substitutes every free occurrence of `name` with `value` in an arbitrary `Pred`.
pub fn substitute_free_var(f: &Pred, name: &str, value: &Term) -> Pred {
    f.subst_free(name, value)
}

/// Given `f = ForAll(x, body)`, returns `body` with every free `x` replaced by
/// `value`. Panics (contract violation) if `f` is not a `ForAll`.
pub fn substitute_forall(f: &Pred, value: &Term) -> Pred {
    let (var, body) = f
        .as_forall()
        .unwrap_or_else(|| panic!("substitute_forall requires a ForAll, found {}", f));
    body.subst_free(var, value)
}

/// The set of variable names free in `f`.
pub fn get_free_vars(f: &Pred) -> HashSet<String> {
    let mut env = Vec::new();
    let mut out = HashSet::new();
    f.free_vars_rec(&mut env, &mut out);
    out
}

/// The set of variable names free in `t`.
pub fn get_free_vars_term(t: &Term) -> HashSet<String> {
    let mut env = Vec::new();
    let mut out = HashSet::new();
    t.free_vars_rec(&mut env, &mut out);
    out
}

/// A stateful producer of fresh `$k` names, monotonically increasing and guaranteed
/// distinct from every name observed in the formulas it was built from, and from
/// every name it has already produced.
pub struct NameGenerator {
    next: u64,
}

impl NameGenerator {
    /// Scans `preds` for any existing `$k`-shaped variable name and starts one above
    /// the maximum observed (or at `$0` if none are present).
    pub fn for_preds(preds: &[&Pred]) -> NameGenerator {
        let mut names = HashSet::new();
        for p in preds {
            p.collect_var_names(&mut names);
        }
        NameGenerator::from_names(&names)
    }

    pub fn for_pred(p: &Pred) -> NameGenerator {
        NameGenerator::for_preds(&[p])
    }

    fn from_names(names: &HashSet<String>) -> NameGenerator {
        let next = names
            .iter()
            .filter_map(|n| n.strip_prefix('$'))
            .filter_map(|k| k.parse::<u64>().ok())
            .map(|k| k + 1)
            .max()
            .unwrap_or(0);
        NameGenerator { next }
    }

    /// Produces the next fresh name and advances the counter.
    pub fn generate(&mut self) -> String {
        let name = format!("${}", self.next);
        self.next += 1;
        name
    }
}

/// Renames every `ForAll` binder in `f` to a fresh `$k` (sequential from 0,
/// pre-order), returning a formula alpha-equivalent to `f`.
pub fn canonicalize_bound_vars(f: &Pred) -> Pred {
    canonicalize_bound_vars_collecting(f).0
}

/// As `canonicalize_bound_vars`, additionally returning the set of `Var` terms that
/// remained free (i.e. were never bound by any renamed `ForAll`).
pub fn canonicalize_bound_vars_collecting(f: &Pred) -> (Pred, HashSet<Term>) {
    let mut counter = 0u64;
    let mut free_out = HashSet::new();
    let bindings = HashMap::new();
    let result = canon_pred(f, &bindings, &mut counter, &mut free_out);
    (result, free_out)
}

fn canon_term(
    t: &Term,
    bindings: &HashMap<String, Term>,
    free_out: &mut HashSet<Term>,
) -> Term {
    match t.kind() {
        TermKind::Zero => t.clone(),
        TermKind::Var(n) => match bindings.get(n) {
            Some(repl) => repl.clone(),
            None => {
                free_out.insert(t.clone());
                t.clone()
            }
        },
        TermKind::Succ(x) => Term::succ(canon_term(x, bindings, free_out)),
        TermKind::Add(a, b) => Term::add(
            canon_term(a, bindings, free_out),
            canon_term(b, bindings, free_out),
        ),
        TermKind::Mul(a, b) => Term::mul(
            canon_term(a, bindings, free_out),
            canon_term(b, bindings, free_out),
        ),
    }
}

fn canon_pred(
    p: &Pred,
    bindings: &HashMap<String, Term>,
    counter: &mut u64,
    free_out: &mut HashSet<Term>,
) -> Pred {
    match p.kind() {
        PredKind::Eq(a, b) => Pred::eq(
            canon_term(a, bindings, free_out),
            canon_term(b, bindings, free_out),
        ),
        PredKind::And(a, b) => Pred::and(
            canon_pred(a, bindings, counter, free_out),
            canon_pred(b, bindings, counter, free_out),
        ),
        PredKind::Not(x) => Pred::not(canon_pred(x, bindings, counter, free_out)),
        PredKind::Implies(a, b) => Pred::implies(
            canon_pred(a, bindings, counter, free_out),
            canon_pred(b, bindings, counter, free_out),
        ),
        PredKind::ForAll(v, body) => {
            let fresh = format!("${}", *counter);
            *counter += 1;
            let mut bindings2 = bindings.clone();
            bindings2.insert(v.clone(), Term::var(fresh.clone()));
            Pred::forall(fresh, canon_pred(body, &bindings2, counter, free_out))
        }
    }
}

/// Returns `f` with every subformula alpha-equivalent to `x` replaced by `y()`
/// (invoked once per match). Descent stops at a matched node.
pub fn replace_subformula(f: &Formula, x: &Formula, y: &mut dyn FnMut() -> Formula) -> Formula {
    if formula_alpha_equal(f, x) {
        return y();
    }
    match f {
        Formula::Term(t) => Formula::Term(replace_in_term(t, x, y)),
        Formula::Pred(p) => Formula::Pred(replace_in_pred(p, x, y)),
    }
}

fn formula_alpha_equal(f: &Formula, x: &Formula) -> bool {
    match (f, x) {
        (Formula::Term(a), Formula::Term(b)) => a == b,
        (Formula::Pred(a), Formula::Pred(b)) => a == b,
        _ => false,
    }
}

fn replace_in_term(t: &Term, x: &Formula, y: &mut dyn FnMut() -> Formula) -> Term {
    match t.kind() {
        TermKind::Zero | TermKind::Var(_) => t.clone(),
        TermKind::Succ(inner) => {
            Term::succ(replace_subformula(&Formula::Term(inner.clone()), x, y).into_term())
        }
        TermKind::Add(a, b) => Term::add(
            replace_subformula(&Formula::Term(a.clone()), x, y).into_term(),
            replace_subformula(&Formula::Term(b.clone()), x, y).into_term(),
        ),
        TermKind::Mul(a, b) => Term::mul(
            replace_subformula(&Formula::Term(a.clone()), x, y).into_term(),
            replace_subformula(&Formula::Term(b.clone()), x, y).into_term(),
        ),
    }
}

fn replace_in_pred(p: &Pred, x: &Formula, y: &mut dyn FnMut() -> Formula) -> Pred {
    match p.kind() {
        PredKind::Eq(a, b) => Pred::eq(
            replace_subformula(&Formula::Term(a.clone()), x, y).into_term(),
            replace_subformula(&Formula::Term(b.clone()), x, y).into_term(),
        ),
        PredKind::And(a, b) => Pred::and(
            replace_subformula(&Formula::Pred(a.clone()), x, y).into_pred(),
            replace_subformula(&Formula::Pred(b.clone()), x, y).into_pred(),
        ),
        PredKind::Not(inner) => {
            Pred::not(replace_subformula(&Formula::Pred(inner.clone()), x, y).into_pred())
        }
        PredKind::Implies(p1, q1) => Pred::implies(
            replace_subformula(&Formula::Pred(p1.clone()), x, y).into_pred(),
            replace_subformula(&Formula::Pred(q1.clone()), x, y).into_pred(),
        ),
        PredKind::ForAll(v, body) => Pred::forall(
            v.clone(),
            replace_subformula(&Formula::Pred(body.clone()), x, y).into_pred(),
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn substitute_forall_replaces_free_occurrences() {
        let f = Pred::forall("x", Pred::eq(Term::var("x"), Term::zero()));
        let got = substitute_forall(&f, &Term::succ(Term::zero()));
        assert_eq!(got, Pred::eq(Term::succ(Term::zero()), Term::zero()));
    }

    #[test]
    fn substitute_stops_at_rebinding_forall() {
        let f = Pred::and(
            Pred::eq(Term::var("x"), Term::zero()),
            Pred::forall("x", Pred::eq(Term::var("x"), Term::zero())),
        );
        let got = substitute_free_var(&f, "x", &Term::succ(Term::zero()));
        let expected = Pred::and(
            Pred::eq(Term::succ(Term::zero()), Term::zero()),
            Pred::forall("x", Pred::eq(Term::var("x"), Term::zero())),
        );
        assert_eq!(got, expected);
    }

    #[test]
    fn substitution_idempotent_when_var_absent() {
        let f = Pred::eq(Term::var("y"), Term::zero());
        let got = substitute_free_var(&f, "x", &Term::succ(Term::zero()));
        assert_eq!(got, f);
    }

    #[test]
    fn name_generator_starts_fresh() {
        let p = Pred::eq(Term::var("x"), Term::zero());
        let mut gen = NameGenerator::for_pred(&p);
        assert_eq!(gen.generate(), "$0");
        assert_eq!(gen.generate(), "$1");
    }

    #[test]
    fn name_generator_skips_existing_dollar_names() {
        let p = Pred::eq(Term::var("$0"), Term::var("$1"));
        let mut gen = NameGenerator::for_pred(&p);
        assert_eq!(gen.generate(), "$2");
    }

    #[test]
    fn canonicalize_is_alpha_equivalent_and_disjoint() {
        let f = Pred::forall(
            "x",
            Pred::forall("x", Pred::eq(Term::var("x"), Term::var("x"))),
        );
        let (canon, _) = canonicalize_bound_vars_collecting(&f);
        assert_eq!(canon, f);
        let (outer, inner) = canon.as_forall().unwrap();
        let (inner_name, _) = inner.as_forall().unwrap();
        assert_ne!(outer, inner_name);
    }

    #[test]
    fn replace_subformula_finds_term_subformula() {
        let f = Formula::Pred(Pred::forall(
            "x",
            Pred::eq(Term::succ(Term::var("y")), Term::var("x")),
        ));
        let x = Formula::Term(Term::succ(Term::var("y")));
        let got = replace_subformula(&f, &x, &mut || Formula::Term(Term::zero()));
        let expected = Pred::forall("x", Pred::eq(Term::zero(), Term::var("x")));
        assert_eq!(got.into_pred(), expected);
    }
}
