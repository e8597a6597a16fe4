//! The proof builder and its tactic library.
//!
//! `ProofBuilder` is a stateful, append-only transcript; every tactic below appends
//! a fixed sequence of formulas that the checker
//! (`crate::checker::assert_proof_is_valid`) is guaranteed to accept, given that its
//! documented preconditions hold. A violated precondition is a caller bug and panics
//! rather than returning a `Result` -- there is no "tactic failed gracefully"
//! outcome, only a broken call site.
//!
//! `Term`/`Pred` are cheap-to-clone `Rc`-backed values (see `crate::ast`), so every
//! tactic here takes its formula arguments by value rather than by reference --
//! there is no lifetime to manage, and it matches how the rest of the crate already
//! treats formulas as plain data.

use std::collections::HashSet;

use crate::ast::{Pred, PredKind, Term};
use crate::checker::{assert_proof_is_valid, ProofEntry};
use crate::helpers::{forall_n, implies_n};
use crate::subst::{get_free_vars_term, substitute_forall};

/// What `assert_proved` compares the last proved formula against: either another
/// formula (structural/alpha equality) or its canonical rendering (string equality),
/// mirroring the Python source's `isinstance(formula, str)` branch.
pub enum Expected {
    Formula(Pred),
    Rendered(String),
}

impl From<Pred> for Expected {
    fn from(p: Pred) -> Self {
        Expected::Formula(p)
    }
}

impl From<&str> for Expected {
    fn from(s: &str) -> Self {
        Expected::Rendered(s.to_string())
    }
}

impl From<String> for Expected {
    fn from(s: String) -> Self {
        Expected::Rendered(s)
    }
}

/// A stateful, append-only proof transcript. Each `ProofBuilder` owns its transcript
/// and its symmetry/transitivity flags; there is no global state, so multiple
/// builders may be used independently with no coordination.
pub struct ProofBuilder {
    proof: Vec<ProofEntry>,
    check_each_step: bool,
    proved_eq_is_symmetric: bool,
    proved_eq_is_transitive: bool,
}

impl Default for ProofBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofBuilder {
    pub fn new() -> ProofBuilder {
        ProofBuilder {
            proof: Vec::new(),
            check_each_step: false,
            proved_eq_is_symmetric: false,
            proved_eq_is_transitive: false,
        }
    }

    /// As `new`, but every `append` immediately re-validates the whole transcript so
    /// far -- useful when developing a new tactic, expensive for a long proof.
    pub fn with_step_checking() -> ProofBuilder {
        ProofBuilder {
            check_each_step: true,
            ..ProofBuilder::new()
        }
    }

    /// Appends `formula` to the transcript and returns it back, so call sites can
    /// both record a step and keep using the value (`p(...)` in the source).
    pub fn append(&mut self, formula: Pred) -> Pred {
        self.proof.push(ProofEntry::Formula(formula.clone()));
        if self.check_each_step {
            assert_proof_is_valid(&self.proof).expect("proof step invalid");
        }
        formula
    }

    /// Alias for `append`, matching the source's terse `p(...)` convention.
    pub fn p(&mut self, formula: Pred) -> Pred {
        self.append(formula)
    }

    /// Appends an opaque comment, ignored by the checker but surfaced as a
    /// diagnostic hint on the nearest following failure.
    pub fn comment<S: Into<String>>(&mut self, text: S) {
        self.proof.push(ProofEntry::Comment(text.into()));
    }

    pub fn proof(&self) -> &[ProofEntry] {
        &self.proof
    }

    /// The most recently appended formula entry (comments are skipped). Panics if
    /// nothing has been proved yet.
    pub fn last_formula(&self) -> Pred {
        self.proof
            .iter()
            .rev()
            .find_map(|e| match e {
                ProofEntry::Formula(f) => Some(f.clone()),
                ProofEntry::Comment(_) => None,
            })
            .expect("last_formula: proof is empty")
    }

    /// Asserts that the last proved formula is `expected`, by structural
    /// (alpha-)equality or by canonical rendering. This does not itself check that
    /// the proof so far is valid -- that's established once, at the end, by
    /// `assert_proof_is_valid`.
    pub fn assert_proved(&self, expected: impl Into<Expected>) {
        let last = self.last_formula();
        match expected.into() {
            Expected::Formula(f) => assert!(
                last == f,
                "proved: {}; expected: {}",
                last,
                f
            ),
            Expected::Rendered(s) => assert_eq!(
                last.to_string(),
                s,
                "proved: {}; expected: {}",
                last,
                s
            ),
        }
    }

    /// Removes duplicate formula entries, preserving first-seen order. Validity is
    /// preserved: every modus-ponens witness a later step depends on is some earlier
    /// formula, which (being earlier) survives the dedup. Returns the count removed.
    pub fn simplify(&mut self) -> usize {
        let before = self.proof.len();
        let mut seen: HashSet<Pred> = HashSet::new();
        let mut kept = Vec::with_capacity(before);
        for entry in self.proof.drain(..) {
            let keep = match &entry {
                ProofEntry::Comment(_) => true,
                ProofEntry::Formula(f) => seen.insert(f.clone()),
            };
            if keep {
                kept.push(entry);
            }
        }
        self.proof = kept;
        before - self.proof.len()
    }

    /// `immediately_implies(A, B, C, ...)`: appends `A => B => C => ...` (assumed to
    /// be an axiom instance at the call site -- every caller below constructs it to
    /// be one), then peels off `A` via modus ponens (requiring `A` already proved) to
    /// get `B => C => ...`, recursing until a single conclusion remains. A one-element
    /// slice is shorthand for "chain from whatever was just proved to this": `A` is
    /// implicitly `last_formula()`.
    pub fn immediately_implies(&mut self, formulae: &[Pred]) -> Pred {
        let formulae: Vec<Pred> = if formulae.len() == 1 {
            let mut v = vec![self.last_formula()];
            v.extend_from_slice(formulae);
            v
        } else {
            formulae.to_vec()
        };
        self.p(implies_n(&formulae));
        if formulae.len() > 2 {
            self.immediately_implies(&formulae[1..])
        } else {
            self.p(formulae[1].clone())
        }
    }

    // ---- forall_split -----------------------------------------------------

    /// From `F = ForAll*(xs, Implies(P, Q))` with 1-3 quantifiers (`xs`), derives one
    /// of three things depending on `level`:
    ///   - `"low"`: `F => (ForAll*(xs,P) => ForAll*(xs,Q))` (an axiom for one
    ///     quantifier; proved by composing the one-quantifier axiom for 2-3).
    ///   - `"med"`: additionally, `ForAll*(xs,P) => ForAll*(xs,Q)`.
    ///   - `"high"`: additionally, `ForAll*(xs,Q)`, assuming `ForAll*(xs,P)` has
    ///     already been proved.
    ///
    /// `forall` defaults to `last_formula()` when `None`.
    pub fn forall_split(&mut self, level: &str, forall: Option<Pred>) -> Pred {
        let forall = forall.unwrap_or_else(|| self.last_formula());
        assert!(
            matches!(level, "low" | "med" | "high"),
            "forall_split: resolution_level = {} not supported",
            level
        );

        let (vars, inner) = forall_vars_and_body(&forall);
        let num_level = vars.len();
        assert!(
            matches!(num_level, 1 | 2 | 3),
            "forall_split: num_level = {} not supported",
            num_level
        );

        let prop = match num_level {
            1 => self.forallx_split(&vars, &inner, &forall),
            2 => self.forallxy_split(&vars, &inner, &forall),
            _ => self.forallxyz_split(&vars, &inner, &forall),
        };

        let (_, rhs) = prop
            .as_implies()
            .expect("forall_split: derived axiom must be an implication");
        if level == "low" {
            return self.last_formula();
        }

        let (forall_p, forall_q) = rhs
            .as_implies()
            .expect("forall_split: derived axiom's consequent must be an implication");
        let forall_q = forall_q.clone();
        self.p(rhs.clone());
        if level == "med" {
            return self.last_formula();
        }

        let _ = forall_p;
        self.p(forall_q)
    }

    fn forallx_split(&mut self, vars: &[String], inner: &Pred, forall: &Pred) -> Pred {
        let (p, q) = inner
            .as_implies()
            .unwrap_or_else(|| panic!("forall_split: body must be an implication, found {}", inner));
        let (p, q) = (p.clone(), q.clone());
        let forallx = |body: Pred| wrap_forall(vars, body);
        self.p(implies_n(&[forall.clone(), forallx(p), forallx(q)]))
    }

    fn forallxy_split(&mut self, vars: &[String], inner: &Pred, forall: &Pred) -> Pred {
        let (p, q) = inner
            .as_implies()
            .unwrap_or_else(|| panic!("forall_split: body must be an implication, found {}", inner));
        let (p, q) = (p.clone(), q.clone());
        let x = vars[0].clone();
        let y = vars[1].clone();
        let forallx = |b: Pred| Pred::forall(x.clone(), b);
        let forally = |b: Pred| Pred::forall(y.clone(), b);
        let forallxy = |b: Pred| forallx(forally(b));

        let a = forall.clone();
        let b_ = forallxy(p.clone());
        let c = forallxy(q.clone());
        let d = forallx(implies_n(&[
            forally(implies_n(&[p.clone(), q.clone()])),
            forally(p.clone()),
            forally(q.clone()),
        ]));
        let e = forallx(implies_n(&[forally(p), forally(q)]));
        let a_b_c = implies_n(&[a.clone(), b_.clone(), c.clone()]);

        self.p(d.clone());
        self.p(implies_n(&[d, a.clone(), e.clone()]));
        let a_e = self.p(implies_n(&[a, e.clone()]));
        let e_b_c = self.p(implies_n(&[e, b_, c]));
        self.immediately_implies(&[a_e, e_b_c, a_b_c])
    }

    fn forallxyz_split(&mut self, vars: &[String], inner: &Pred, forall: &Pred) -> Pred {
        let (p, q) = inner
            .as_implies()
            .unwrap_or_else(|| panic!("forall_split: body must be an implication, found {}", inner));
        let (p, q) = (p.clone(), q.clone());
        let x = vars[0].clone();
        let y = vars[1].clone();
        let z = vars[2].clone();
        let forallx = |b: Pred| Pred::forall(x.clone(), b);
        let forally = |b: Pred| Pred::forall(y.clone(), b);
        let forallz = |b: Pred| Pred::forall(z.clone(), b);
        let forallxy = |b: Pred| forallx(forally(b));
        let forallxyz = |b: Pred| forallx(forally(forallz(b)));

        let a = forall.clone();
        let b_ = forallxyz(p.clone());
        let c = forallxyz(q.clone());
        let a_b_c = implies_n(&[a.clone(), b_, c]);

        let fz_p_q = forallz(Pred::implies(p.clone(), q.clone()));
        let fz_p_fz_q = Pred::implies(forallz(p), forallz(q));
        debug_assert_eq!(
            forallxy(fz_p_q.clone()),
            a,
            "forallxyz_split: A must equal forallxy(forallz(Implies(P,Q)))"
        );

        self.p(forallxy(Pred::implies(fz_p_q, fz_p_fz_q.clone())));
        let x_res = self.forall_split("high", None);
        self.assert_proved(forallxy(fz_p_fz_q));

        let y_res = self.forall_split("med", None);

        self.immediately_implies(&[x_res, y_res, a_b_c])
    }

    // ---- equality tactics ---------------------------------------------------

    /// Proves `forall x,y. (x=y) => (y=x)`. Idempotent: a second call is a no-op.
    pub fn prove_eq_is_symmetric(&mut self) -> Pred {
        if self.proved_eq_is_symmetric {
            return forall_n(&["x", "y"], Pred::implies(eq_xy(), eq_yx()));
        }
        self.proved_eq_is_symmetric = true;

        let x_x = Pred::eq(Term::var("x"), Term::var("x"));
        let x_y = eq_xy();
        let y_x = eq_yx();
        let theorem = forall_n(&["x", "y"], Pred::implies(x_y.clone(), y_x.clone()));

        self.p(forall_n(
            &["x", "y"],
            Pred::implies(
                implies_n(&[x_y.clone(), x_x.clone(), y_x.clone()]),
                implies_n(&[x_x.clone(), x_y.clone(), y_x.clone()]),
            ),
        ));
        self.forall_split("med", None);
        self.p(forall_n(&["x", "y"], implies_n(&[x_y.clone(), x_x.clone(), y_x.clone()])));
        self.p(forall_n(&["x", "y"], implies_n(&[x_x.clone(), x_y, y_x])));
        self.forall_split("med", None);
        self.p(forall_n(&["y", "x"], x_x));
        self.flip_xy_order_in_forall(None);
        self.p(theorem)
    }

    /// Proves `forall x,y,z. (x=y) => (y=z) => (x=z)`. Idempotent.
    pub fn prove_eq_is_transitive(&mut self) -> Pred {
        let x = Term::var("x");
        let y = Term::var("y");
        let z = Term::var("z");
        let x_y = Pred::eq(x.clone(), y.clone());
        let y_z = Pred::eq(y, z.clone());
        let x_z = Pred::eq(x, z);
        let theorem = forall_n(&["x", "y", "z"], implies_n(&[x_y.clone(), y_z.clone(), x_z.clone()]));

        if self.proved_eq_is_transitive {
            return theorem;
        }
        self.proved_eq_is_transitive = true;

        let p_ = implies_n(&[y_z.clone(), x_y.clone(), x_z.clone()]);
        let q_ = implies_n(&[x_y, y_z, x_z]);
        debug_assert_eq!(forall_n(&["x", "y", "z"], q_.clone()), theorem);

        self.p(forall_n(&["x", "y", "z"], p_.clone()));
        self.p(forall_n(&["x", "y", "z"], Pred::implies(p_, q_)));
        self.forall_split("high", None)
    }

    /// Given a proved `ForAll*(xs, F=G)`, derives `ForAll*(xs, G=F)`.
    pub fn flip_equality(&mut self, eq: Option<Pred>) -> Pred {
        let eq = eq.unwrap_or_else(|| self.last_formula());
        let mut varlist = Vec::new();
        let mut cur = eq;
        while let Some((v, body)) = cur.as_forall() {
            varlist.push(v.to_string());
            cur = body.clone();
        }
        assert!(!varlist.is_empty(), "flip_equality requires a ForAll-quantified equality");
        let (f_term, g_term) = cur
            .as_eq()
            .unwrap_or_else(|| panic!("flip_equality: body must be an equality, found {}", cur));
        let (f_term, g_term) = (f_term.clone(), g_term.clone());

        let used: HashSet<&str> = varlist.iter().map(String::as_str).collect();
        let fresh: Vec<String> = ('a'..='z')
            .map(|c| c.to_string())
            .filter(|s| !used.contains(s.as_str()))
            .take(2)
            .collect();
        let (vx, vy) = (fresh[0].clone(), fresh[1].clone());
        let forallxy = {
            let (vx, vy) = (vx.clone(), vy.clone());
            move |body: Pred| Pred::forall(vx.clone(), Pred::forall(vy.clone(), body))
        };

        self.prove_eq_is_symmetric();
        let symmetric_axiom = self.p(forallxy(Pred::implies(
            Pred::eq(Term::var(vx.clone()), Term::var(vy.clone())),
            Pred::eq(Term::var(vy.clone()), Term::var(vx.clone())),
        )));

        let mut wrapped = symmetric_axiom.clone();
        for v in varlist.iter().rev() {
            let prior = wrapped.clone();
            wrapped = Pred::forall(v.clone(), prior.clone());
            self.immediately_implies(&[prior, wrapped.clone()]);
        }

        let subst_f = substitute_forall(&symmetric_axiom, &f_term);
        let subst_fg = substitute_forall(&subst_f, &g_term);

        self.p(wrap_forall(&varlist, Pred::implies(symmetric_axiom, subst_f.clone())));
        self.forall_split("high", None);
        self.p(wrap_forall(&varlist, Pred::implies(subst_f, subst_fg)));
        self.forall_split("high", None);
        self.forall_split("high", None)
    }

    /// Given `a(m)=b(m)`, `b(m)=c(m)`, and `c`, all proved as functions of one fresh
    /// variable, derives `forall m. a(m)=b(m) => b(m)=c(m) => a(m)=c(m)`.
    pub fn prove_values_transitively_equal_1(
        &mut self,
        a: impl Fn(Term) -> Term,
        b: impl Fn(Term) -> Term,
        c: impl Fn(Term) -> Term,
    ) -> Pred {
        self.prove_eq_is_transitive();

        let eq_transitive = forall_n(&["x", "y", "z"], three_way_body(Term::var("x"), Term::var("y"), Term::var("z")));
        let eq_transitive_m = Pred::forall("m", eq_transitive.clone());
        self.immediately_implies(&[eq_transitive, eq_transitive_m.clone()]);

        let m = Term::var("m");
        let (a_m, b_m, c_m) = (a(m.clone()), b(m.clone()), c(m));
        let theorem = Pred::forall("m", three_way_body(a_m.clone(), b_m.clone(), c_m.clone()));

        let forallyz_a = Pred::forall(
            "y",
            Pred::forall("z", three_way_body(a_m.clone(), Term::var("y"), Term::var("z"))),
        );
        let step1 = self.p(Pred::forall("m", Pred::implies(eq_transitive_m.clone(), forallyz_a.clone())));
        self.immediately_implies(&[step1, eq_transitive_m, Pred::forall("m", forallyz_a.clone())]);

        let forallz_ab = Pred::forall("z", three_way_body(a_m.clone(), b_m.clone(), Term::var("z")));
        let step2 = self.p(Pred::forall("m", Pred::implies(forallyz_a.clone(), forallz_ab.clone())));
        self.immediately_implies(&[step2, Pred::forall("m", forallyz_a), Pred::forall("m", forallz_ab.clone())]);

        let step3 = self.p(Pred::forall(
            "m",
            Pred::implies(forallz_ab.clone(), three_way_body(a_m, b_m, c_m)),
        ));
        self.immediately_implies(&[step3, Pred::forall("m", forallz_ab), theorem])
    }

    /// As `prove_values_transitively_equal_1`, for functions of two fresh variables.
    pub fn prove_values_transitively_equal_2(
        &mut self,
        a: impl Fn(Term, Term) -> Term,
        b: impl Fn(Term, Term) -> Term,
        c: impl Fn(Term, Term) -> Term,
    ) -> Pred {
        self.prove_eq_is_transitive();

        let eq_transitive = forall_n(&["x", "y", "z"], three_way_body(Term::var("x"), Term::var("y"), Term::var("z")));
        let eq_transitive_m = Pred::forall("m", eq_transitive.clone());
        self.immediately_implies(&[eq_transitive.clone(), eq_transitive_m.clone()]);
        let eq_transitive_mn = Pred::forall("n", eq_transitive_m);
        self.immediately_implies(&[eq_transitive.clone(), eq_transitive_mn]);

        let (m, n) = (Term::var("m"), Term::var("n"));
        let (a_mn, b_mn, c_mn) = (a(m.clone(), n.clone()), b(m.clone(), n.clone()), c(m, n));

        let forallyz_a = Pred::forall(
            "y",
            Pred::forall("z", three_way_body(a_mn.clone(), Term::var("y"), Term::var("z"))),
        );
        self.p(forall_n(&["m", "n"], Pred::implies(eq_transitive, forallyz_a.clone())));
        self.forall_split("high", None);

        let forallz_ab = Pred::forall("z", three_way_body(a_mn.clone(), b_mn.clone(), Term::var("z")));
        self.p(forall_n(&["m", "n"], Pred::implies(forallyz_a, forallz_ab.clone())));
        self.forall_split("high", None);

        self.p(forall_n(
            &["m", "n"],
            Pred::implies(forallz_ab, three_way_body(a_mn, b_mn, c_mn)),
        ));
        self.forall_split("high", None)
    }

    /// Given `forall x. P(x)`, derives `forall x. P(fn(x))`, for `fn` a function
    /// over terms (e.g. `Succ`).
    pub fn subst_forall_with_expr(&mut self, forall: Pred, f: impl Fn(Term) -> Term) -> Pred {
        let (var, _) = forall
            .as_forall()
            .unwrap_or_else(|| panic!("subst_forall_with_expr requires a ForAll, found {}", forall));
        assert_ne!(var, "t", "subst_forall_with_expr: bound variable must not be \"t\"");

        let wrapped = Pred::forall("t", forall.clone());
        self.immediately_implies(&[forall.clone(), wrapped]);
        let subst = substitute_forall(&forall, &f(Term::var("t")));
        self.p(Pred::forall("t", Pred::implies(forall, subst)));
        self.forall_split("high", None)
    }

    /// Given `forall x. P(x)`, derives `P(c)` for a constant term `c`.
    pub fn subst_forall_with_const(&mut self, forall: Pred, c: &Term) -> Pred {
        let subst = substitute_forall(&forall, c);
        self.immediately_implies(&[forall, subst])
    }

    /// Given `forall x,y. P(x,y)`, derives `forall y,x. P(x,y)`, renaming to fresh
    /// names drawn from `{a,b,c,d}` minus the formula's own bound names.
    pub fn flip_xy_order_in_forall(&mut self, forall: Option<Pred>) -> Pred {
        let forall = forall.unwrap_or_else(|| self.last_formula());
        let (xname, inner) = forall
            .as_forall()
            .unwrap_or_else(|| panic!("flip_xy_order_in_forall requires a ForAll, found {}", forall));
        let (yname, _) = inner.as_forall().unwrap_or_else(|| {
            panic!(
                "flip_xy_order_in_forall requires two nested ForAlls, found {}",
                forall
            )
        });
        let used: HashSet<&str> = [xname, yname].into_iter().collect();
        let mut available: Vec<&str> = ["a", "b", "c", "d"]
            .iter()
            .copied()
            .filter(|c| !used.contains(c))
            .collect();
        available.sort_unstable();
        let vx = available[0].to_string();
        let vy = available[1].to_string();

        let body = |x: Term, y: Term| -> Pred { substitute_forall(&substitute_forall(&forall, &x), &y) };
        let forallxy = {
            let (vx, vy) = (vx.clone(), vy.clone());
            move |p: Pred| Pred::forall(vx.clone(), Pred::forall(vy.clone(), p))
        };

        self.p(forallxy(Pred::implies(
            forall.clone(),
            Pred::forall("n", body(Term::var(vy.clone()), Term::var("n"))),
        )));
        self.forall_split("med", None);

        self.immediately_implies(&[forall.clone(), Pred::forall(vy.clone(), forall.clone())]);
        self.immediately_implies(&[Pred::forall(vy.clone(), forall.clone()), forallxy(forall.clone())]);
        self.immediately_implies(&[
            forallxy(forall.clone()),
            forallxy(Pred::forall("n", body(Term::var(vy.clone()), Term::var("n")))),
        ]);

        self.p(forallxy(Pred::implies(
            Pred::forall("n", body(Term::var(vy.clone()), Term::var("n"))),
            body(Term::var(vy.clone()), Term::var(vx.clone())),
        )));
        self.forall_split("med", None);

        self.p(forallxy(body(Term::var(vy), Term::var(vx))))
    }

    /// Proves `expr = expr`, universally quantified over `free_vars` (1 or 2 names,
    /// which must equal `expr`'s actual free variables).
    pub fn prove_expr_eq_to_itself(&mut self, expr: Term, free_vars: &[&str]) -> Pred {
        assert!(
            free_vars.len() == 1 || free_vars.len() == 2,
            "prove_expr_eq_to_itself: free_vars must have length 1 or 2, got {}",
            free_vars.len()
        );
        let mut actual: Vec<String> = get_free_vars_term(&expr).into_iter().collect();
        actual.sort();
        let mut expected: Vec<String> = free_vars.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(
            actual, expected,
            "prove_expr_eq_to_itself: free_vars = {:?}, actual free vars of expr = {:?}",
            expected, actual
        );

        let used: HashSet<&str> = free_vars.iter().copied().collect();
        let x = *["p", "q", "r"]
            .iter()
            .find(|c| !used.contains(*c))
            .expect("prove_expr_eq_to_itself: no available fresh name in {p,q,r}");

        let forallx = |body: Pred| Pred::forall(x, body);
        let forally = |body: Pred| forall_n(free_vars, body);

        let x_eq_x = Pred::eq(Term::var(x), Term::var(x));
        self.p(forally(forallx(x_eq_x.clone())));
        self.p(forally(Pred::implies(
            forallx(x_eq_x),
            Pred::eq(expr.clone(), expr),
        )));
        self.forall_split("high", None)
    }

    /// Given `forall x. M(x)=N(x)`, derives `forall x. fn(M(x))=fn(N(x))`.
    pub fn apply_fn_on_eq(&mut self, fn_: impl Fn(Term) -> Term, eq: Option<Pred>) -> Pred {
        let eq = eq.unwrap_or_else(|| self.last_formula());
        let (var, body) = {
            let (v, b) = eq
                .as_forall()
                .unwrap_or_else(|| panic!("apply_fn_on_eq requires a ForAll, found {}", eq));
            (v.to_string(), b.clone())
        };
        let (a_term, b_term) = body
            .as_eq()
            .unwrap_or_else(|| panic!("apply_fn_on_eq requires ForAll(x, Eq(A,B)), found {}", eq))
            .clone();
        let a_term = a_term.clone();
        let b_term = b_term.clone();

        let var2 = var.clone();
        let forallx = move |p: Pred| Pred::forall(var2.clone(), p);

        self.prove_expr_eq_to_itself(fn_(a_term.clone()), &[&var]);
        self.p(forallx(implies_n(&[
            body,
            Pred::eq(fn_(a_term.clone()), fn_(a_term.clone())),
            Pred::eq(fn_(a_term), fn_(b_term)),
        ])));
        self.forall_split("high", None);
        self.forall_split("high", None)
    }

    /// Given `A=>B=>C`, derives `B=>A=>C`.
    pub fn flip_implication_order(&mut self, formula: Option<Pred>) -> Pred {
        let formula = formula.unwrap_or_else(|| self.last_formula());
        let (a, bc) = formula
            .as_implies()
            .unwrap_or_else(|| panic!("flip_implication_order requires an Implies, found {}", formula));
        let (b, c) = bc.as_implies().unwrap_or_else(|| {
            panic!(
                "flip_implication_order requires A => B => C, found {}",
                formula
            )
        });
        let (a, b, c) = (a.clone(), b.clone(), c.clone());
        self.p(Pred::implies(
            implies_n(&[a.clone(), b.clone(), c.clone()]),
            implies_n(&[b.clone(), a.clone(), c.clone()]),
        ));
        self.p(implies_n(&[b, a, c]))
    }

    /// Given `A=>B` and `B=>C` (both already proved), derives `A=>C`.
    pub fn compose_implications(&mut self, a: Pred, b: Pred) -> Pred {
        let (a_p, _) = a
            .as_implies()
            .unwrap_or_else(|| panic!("compose_implications: a must be an Implies, found {}", a));
        let (_, b_q) = b
            .as_implies()
            .unwrap_or_else(|| panic!("compose_implications: b must be an Implies, found {}", b));
        let (a_p, b_q) = (a_p.clone(), b_q.clone());
        self.p(implies_n(&[a.clone(), b.clone(), a_p.clone(), b_q.clone()]));
        self.p(implies_n(&[b, a_p.clone(), b_q.clone()]));
        self.p(implies_n(&[a_p, b_q]))
    }

    /// Alpha-renames every `ForAll` binder reachable through `ForAll`/`Implies`/`And`
    /// structure to `name`, provided `name` does not already occur anywhere in
    /// `formula`. `formula` defaults to `last_formula()`.
    pub fn rename_forall_quantifier(&mut self, name: &str, formula: Option<Pred>) -> Pred {
        let formula = formula.unwrap_or_else(|| self.last_formula());
        for sub in formula.subformulas() {
            if let crate::ast::Formula::Term(t) = &sub {
                assert_ne!(
                    t.as_var_name(),
                    Some(name),
                    "rename_forall_quantifier: {} already occurs in {}",
                    name,
                    formula
                );
            }
        }
        self.p(recursively_rename_forall_quantifier(name, &formula))
    }

    pub fn peano_axiom_zero_is_not_succ(&mut self) -> Pred {
        self.p(crate::axioms::get_peano_axiom_zero_is_not_succ())
    }

    pub fn peano_axiom_succ_is_injective(&mut self) -> Pred {
        self.p(crate::axioms::get_peano_axiom_succ_is_injective())
    }

    pub fn peano_axiom_x_plus_zero(&mut self) -> Pred {
        self.p(crate::axioms::get_peano_axiom_x_plus_zero())
    }

    pub fn peano_axiom_x_plus_succ_y(&mut self) -> Pred {
        self.p(crate::axioms::get_peano_axiom_x_plus_succ_y())
    }

    pub fn peano_axiom_x_times_zero(&mut self) -> Pred {
        self.p(crate::axioms::get_peano_axiom_x_times_zero())
    }

    pub fn peano_axiom_x_times_succ_y(&mut self) -> Pred {
        self.p(crate::axioms::get_peano_axiom_x_times_succ_y())
    }
}

impl std::fmt::Display for ProofBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .proof
            .iter()
            .enumerate()
            .map(|(i, e)| match e {
                ProofEntry::Formula(p) => format!("{}. {}", i, p),
                ProofEntry::Comment(c) => format!("{}. {}", i, c),
            })
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

fn eq_xy() -> Pred {
    Pred::eq(Term::var("x"), Term::var("y"))
}

fn eq_yx() -> Pred {
    Pred::eq(Term::var("y"), Term::var("x"))
}

fn three_way_body(x: Term, y: Term, z: Term) -> Pred {
    implies_n(&[
        Pred::eq(x.clone(), y.clone()),
        Pred::eq(y, z.clone()),
        Pred::eq(x, z),
    ])
}

fn forall_vars_and_body(f: &Pred) -> (Vec<String>, Pred) {
    let mut vars = Vec::new();
    let mut cur = f.clone();
    while let Some((v, body)) = cur.as_forall() {
        vars.push(v.to_string());
        cur = body.clone();
    }
    (vars, cur)
}

fn wrap_forall(vars: &[String], body: Pred) -> Pred {
    let refs: Vec<&str> = vars.iter().map(String::as_str).collect();
    forall_n(&refs, body)
}

fn recursively_rename_forall_quantifier(name: &str, formula: &Pred) -> Pred {
    match formula.kind() {
        PredKind::ForAll(_, _) => Pred::forall(
            name.to_string(),
            substitute_forall(formula, &Term::var(name.to_string())),
        ),
        PredKind::Implies(p, q) => Pred::implies(
            recursively_rename_forall_quantifier(name, p),
            recursively_rename_forall_quantifier(name, q),
        ),
        PredKind::And(a, b) => Pred::and(
            recursively_rename_forall_quantifier(name, a),
            recursively_rename_forall_quantifier(name, b),
        ),
        _ => panic!(
            "rename_forall_quantifier: unhandled formula shape at {}",
            formula
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::checker::assert_proof_is_valid;

    #[test]
    fn prove_eq_is_symmetric_derives_theorem() {
        let mut b = ProofBuilder::new();
        b.prove_eq_is_symmetric();
        b.assert_proved("(forall x, y. (x = y) => (y = x))");
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn prove_eq_is_transitive_derives_theorem() {
        let mut b = ProofBuilder::new();
        b.prove_eq_is_transitive();
        b.assert_proved("(forall x, y, z. (x = y) => (y = z) => (x = z))");
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn forallxy_split_on_symmetry() {
        let mut b = ProofBuilder::new();
        let sym = b.prove_eq_is_symmetric();
        b.forall_split("med", Some(sym));
        b.assert_proved("(forall x, y. (x = y)) => (forall x, y. (y = x))");
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn forallxyz_split_on_transitivity() {
        let mut b = ProofBuilder::new();
        let tr = b.prove_eq_is_transitive();
        b.forall_split("med", Some(tr));
        b.assert_proved("(forall x, y, z. (x = y)) => (forall x, y, z. (y = z) => (x = z))");
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn flip_equality_reverses_proved_equation() {
        let mut b = ProofBuilder::new();
        let eq = b.peano_axiom_x_plus_zero();
        b.assert_proved("(forall x. ((x + 0) = x))");
        b.flip_equality(Some(eq));
        b.assert_proved("(forall x. (x = (x + 0)))");
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn flip_xy_order_in_forall_swaps_quantifiers() {
        let mut b = ProofBuilder::new();
        let f = b.peano_axiom_x_plus_succ_y();
        b.flip_xy_order_in_forall(Some(f));
        b.assert_proved("(forall a, b. ((b + S(a)) = S((b + a))))");
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn apply_fn_on_eq_wraps_both_sides() {
        let mut b = ProofBuilder::new();
        b.peano_axiom_x_plus_zero();
        b.apply_fn_on_eq(Term::succ, None);
        b.assert_proved("(forall x. (S((x + 0)) = S(x)))");
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn prove_values_transitively_equal_chains_three_facts() {
        let mut b = ProofBuilder::new();
        let one = Term::succ(Term::zero());
        b.prove_values_transitively_equal_1(
            Term::succ,
            {
                let one = one.clone();
                move |x: Term| Term::add(x, one.clone())
            },
            {
                let one = one.clone();
                move |x: Term| Term::add(one.clone(), x)
            },
        );
        b.assert_proved(
            "(forall m. (S(m) = (m + S(0))) => ((m + S(0)) = (S(0) + m)) => (S(m) = (S(0) + m)))",
        );
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn simplify_removes_duplicate_formulas() {
        let mut b = ProofBuilder::new();
        b.peano_axiom_x_plus_zero();
        b.peano_axiom_x_plus_zero();
        assert_eq!(b.proof().len(), 2);
        let removed = b.simplify();
        assert_eq!(removed, 1);
        assert_eq!(b.proof().len(), 1);
        assert_proof_is_valid(b.proof()).expect("valid proof");
    }

    #[test]
    fn printing_proof_renders_indexed_lines() {
        let mut b = ProofBuilder::new();
        b.peano_axiom_x_plus_zero();
        b.apply_fn_on_eq(Term::succ, None);
        assert_proof_is_valid(b.proof()).expect("valid proof");
        assert!(b.to_string().starts_with("0. (forall x. ((x + 0) = x))"));
    }
}
