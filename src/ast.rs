//! Term and proposition algebra: `Term` (Nat) and `Pred` (first-order formula).
//!
//! Both are reference-counted, hash-consing-friendly trees: cloning is O(1) and
//! structure can be shared as a DAG at runtime. Neither type ever compares by pointer
//! identity — `PartialEq` is alpha-equivalence, implemented in `crate::matcher`, and
//! `Hash` delegates to a cached structural hash computed at construction time that
//! deliberately ignores `Var`/`ForAll` names so that alpha-equivalent formulas always
//! collide.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use std::collections::hash_map::DefaultHasher;

const TAG_ZERO: u64 = 0;
const TAG_SUCC: u64 = 1;
const TAG_ADD: u64 = 2;
const TAG_MUL: u64 = 3;
const TAG_VAR: u64 = 4;
const TAG_EQ: u64 = 5;
const TAG_AND: u64 = 6;
const TAG_NOT: u64 = 7;
const TAG_IMPLIES: u64 = 8;
const TAG_FORALL: u64 = 9;

fn combine(tag: u64, parts: &[u64]) -> u64 {
    let mut h = DefaultHasher::new();
    tag.hash(&mut h);
    for p in parts {
        p.hash(&mut h);
    }
    h.finish()
}

/// A term denoting a natural number.
#[derive(Debug, Clone)]
pub struct Term(Rc<TermNode>);

#[derive(Debug)]
struct TermNode {
    kind: TermKind,
    hash: u64,
}

#[derive(Debug)]
pub(crate) enum TermKind {
    Zero,
    Succ(Term),
    Add(Term, Term),
    Mul(Term, Term),
    Var(String),
}

impl Term {
    pub fn zero() -> Term {
        Term::new(TermKind::Zero)
    }

    pub fn succ(t: Term) -> Term {
        Term::new(TermKind::Succ(t))
    }

    pub fn add(a: Term, b: Term) -> Term {
        Term::new(TermKind::Add(a, b))
    }

    pub fn mul(a: Term, b: Term) -> Term {
        Term::new(TermKind::Mul(a, b))
    }

    /// Builds `Var(name)`. Panics on an empty name.
    pub fn var<S: Into<String>>(name: S) -> Term {
        let name = name.into();
        assert!(!name.is_empty(), "Var name must not be empty");
        Term::new(TermKind::Var(name))
    }

    fn new(kind: TermKind) -> Term {
        let hash = Term::compute_hash(&kind);
        Term(Rc::new(TermNode { kind, hash }))
    }

    fn compute_hash(kind: &TermKind) -> u64 {
        match kind {
            TermKind::Zero => combine(TAG_ZERO, &[]),
            TermKind::Succ(t) => combine(TAG_SUCC, &[t.cached_hash()]),
            TermKind::Add(a, b) => combine(TAG_ADD, &[a.cached_hash(), b.cached_hash()]),
            TermKind::Mul(a, b) => combine(TAG_MUL, &[a.cached_hash(), b.cached_hash()]),
            // Deliberately ignores the variable name, so alpha-equivalent terms hash equal.
            TermKind::Var(_) => combine(TAG_VAR, &[]),
        }
    }

    pub(crate) fn kind(&self) -> &TermKind {
        &self.0.kind
    }

    pub(crate) fn cached_hash(&self) -> u64 {
        self.0.hash
    }

    /// The variable name, if this term is a `Var`.
    pub fn as_var_name(&self) -> Option<&str> {
        match self.kind() {
            TermKind::Var(n) => Some(n.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TermKind::Zero => write!(f, "0"),
            TermKind::Succ(t) => write!(f, "S({})", t),
            TermKind::Add(a, b) => write!(f, "({} + {})", a, b),
            TermKind::Mul(a, b) => write!(f, "({} * {})", a, b),
            TermKind::Var(n) => write!(f, "{}", n),
        }
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

/// A first-order formula over terms.
#[derive(Debug, Clone)]
pub struct Pred(Rc<PredNode>);

#[derive(Debug)]
struct PredNode {
    kind: PredKind,
    hash: u64,
}

#[derive(Debug)]
pub(crate) enum PredKind {
    Eq(Term, Term),
    And(Pred, Pred),
    Not(Pred),
    Implies(Pred, Pred),
    ForAll(String, Pred),
}

impl Pred {
    pub fn eq(a: Term, b: Term) -> Pred {
        Pred::new(PredKind::Eq(a, b))
    }

    pub fn and(a: Pred, b: Pred) -> Pred {
        Pred::new(PredKind::And(a, b))
    }

    pub fn not(x: Pred) -> Pred {
        Pred::new(PredKind::Not(x))
    }

    pub fn implies(p: Pred, q: Pred) -> Pred {
        Pred::new(PredKind::Implies(p, q))
    }

    /// Builds `ForAll(var, body)`. Panics (contract violation) on an empty `var`.
    pub fn forall<S: Into<String>>(var: S, body: Pred) -> Pred {
        let var = var.into();
        assert!(!var.is_empty(), "ForAll variable name must not be empty");
        Pred::new(PredKind::ForAll(var, body))
    }

    fn new(kind: PredKind) -> Pred {
        let hash = Pred::compute_hash(&kind);
        Pred(Rc::new(PredNode { kind, hash }))
    }

    fn compute_hash(kind: &PredKind) -> u64 {
        match kind {
            PredKind::Eq(a, b) => combine(TAG_EQ, &[a.cached_hash(), b.cached_hash()]),
            PredKind::And(a, b) => combine(TAG_AND, &[a.cached_hash(), b.cached_hash()]),
            PredKind::Not(x) => combine(TAG_NOT, &[x.cached_hash()]),
            PredKind::Implies(p, q) => combine(TAG_IMPLIES, &[p.cached_hash(), q.cached_hash()]),
            // Deliberately ignores the bound variable name, so alpha-equivalent foralls hash equal.
            PredKind::ForAll(_, body) => combine(TAG_FORALL, &[body.cached_hash()]),
        }
    }

    pub(crate) fn kind(&self) -> &PredKind {
        &self.0.kind
    }

    pub(crate) fn cached_hash(&self) -> u64 {
        self.0.hash
    }

    /// `true` iff this is an `Implies` node, with the antecedent/consequent returned.
    pub fn as_implies(&self) -> Option<(&Pred, &Pred)> {
        match self.kind() {
            PredKind::Implies(p, q) => Some((p, q)),
            _ => None,
        }
    }

    /// `true` iff this is a `ForAll` node, with the bound name/body returned.
    pub fn as_forall(&self) -> Option<(&str, &Pred)> {
        match self.kind() {
            PredKind::ForAll(v, body) => Some((v.as_str(), body)),
            _ => None,
        }
    }

    /// `true` iff this is an `Eq` node, with both operands returned.
    pub fn as_eq(&self) -> Option<(&Term, &Term)> {
        match self.kind() {
            PredKind::Eq(a, b) => Some((a, b)),
            _ => None,
        }
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PredKind::Eq(a, b) => write!(f, "({} = {})", a, b),
            PredKind::And(a, b) => write!(f, "({} & {})", a, b),
            PredKind::Not(x) => write!(f, "!{}", x),
            PredKind::Implies(p, q) => {
                if matches!(p.kind(), PredKind::Implies(..)) {
                    write!(f, "({}) => {}", p, q)
                } else {
                    write!(f, "{} => {}", p, q)
                }
            }
            // Collapses a maximal run of directly nested ForAlls into one clause.
            PredKind::ForAll(v, body) => {
                let mut names = vec![v.clone()];
                let mut cur: &Pred = body;
                while let PredKind::ForAll(v2, b2) = cur.kind() {
                    names.push(v2.clone());
                    cur = b2;
                }
                write!(f, "(forall {}. {})", names.join(", "), cur)
            }
        }
    }
}

impl Hash for Pred {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

/// The disjoint union of `Term` and `Pred`. Used only where an operation is
/// genuinely generic over both halves of the algebra, such as `replace_subformula`
/// (a template subformula may be either a `Term` or a `Pred`).
#[derive(Debug, Clone)]
pub enum Formula {
    Term(Term),
    Pred(Pred),
}

impl Term {
    /// Yields this term and every sub-term, in pre-order. Finite and eagerly
    /// collected rather than a lazy iterator, since every caller in this crate wants
    /// the whole list anyway (e.g. `rename_forall_quantifier`'s capture check).
    pub fn subterms(&self) -> Vec<Term> {
        let mut out = Vec::new();
        self.collect_subterms(&mut out);
        out
    }

    fn collect_subterms(&self, out: &mut Vec<Term>) {
        out.push(self.clone());
        match self.kind() {
            TermKind::Zero | TermKind::Var(_) => {}
            TermKind::Succ(t) => t.collect_subterms(out),
            TermKind::Add(a, b) | TermKind::Mul(a, b) => {
                a.collect_subterms(out);
                b.collect_subterms(out);
            }
        }
    }
}

impl Pred {
    /// Yields this formula and every sub-formula (terms included), in pre-order.
    pub fn subformulas(&self) -> Vec<Formula> {
        let mut out = Vec::new();
        self.collect_subformulas(&mut out);
        out
    }

    fn collect_subformulas(&self, out: &mut Vec<Formula>) {
        out.push(Formula::Pred(self.clone()));
        match self.kind() {
            PredKind::Eq(a, b) => {
                out.extend(a.subterms().into_iter().map(Formula::Term));
                out.extend(b.subterms().into_iter().map(Formula::Term));
            }
            PredKind::And(a, b) | PredKind::Implies(a, b) => {
                a.collect_subformulas(out);
                b.collect_subformulas(out);
            }
            PredKind::Not(x) => x.collect_subformulas(out),
            PredKind::ForAll(_, body) => body.collect_subformulas(out),
        }
    }
}

impl Formula {
    pub fn as_term(&self) -> &Term {
        match self {
            Formula::Term(t) => t,
            Formula::Pred(_) => panic!("expected a Term, found a Pred"),
        }
    }

    pub fn as_pred(&self) -> &Pred {
        match self {
            Formula::Pred(p) => p,
            Formula::Term(_) => panic!("expected a Pred, found a Term"),
        }
    }

    pub fn into_term(self) -> Term {
        match self {
            Formula::Term(t) => t,
            Formula::Pred(_) => panic!("expected a Term, found a Pred"),
        }
    }

    pub fn into_pred(self) -> Pred {
        match self {
            Formula::Pred(p) => p,
            Formula::Term(_) => panic!("expected a Pred, found a Term"),
        }
    }
}

impl From<Term> for Formula {
    fn from(t: Term) -> Self {
        Formula::Term(t)
    }
}

impl From<Pred> for Formula {
    fn from(p: Pred) -> Self {
        Formula::Pred(p)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Term(t) => write!(f, "{}", t),
            Formula::Pred(p) => write!(f, "{}", p),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_term() {
        let t = Term::add(Term::var("x"), Term::succ(Term::zero()));
        assert_eq!(t.to_string(), "(x + S(0))");
    }

    #[test]
    fn display_pred_single_forall() {
        let p = Pred::forall("x", Pred::eq(Term::var("x"), Term::var("x")));
        assert_eq!(p.to_string(), "(forall x. (x = x))");
    }

    #[test]
    fn display_pred_collapses_nested_foralls() {
        let p = Pred::forall(
            "x",
            Pred::forall("y", Pred::eq(Term::var("x"), Term::var("y"))),
        );
        assert_eq!(p.to_string(), "(forall x, y. (x = y))");
    }

    #[test]
    fn display_implies_parenthesizes_implies_antecedent() {
        let a = Pred::eq(Term::zero(), Term::zero());
        let inner = Pred::implies(a.clone(), a.clone());
        let outer = Pred::implies(inner, a);
        assert_eq!(outer.to_string(), "((0 = 0) => (0 = 0)) => (0 = 0)");
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn var_with_empty_name_panics() {
        Term::var("");
    }

    #[test]
    fn subformulas_enumerate_preorder() {
        let p = Pred::forall("x", Pred::eq(Term::var("x"), Term::var("x")));
        let rendered: Vec<String> = p.subformulas().iter().map(|f| f.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["(forall x. (x = x))", "(x = x)", "x", "x"]
        );
    }
}
