//! Unification with recursive solutions.
//!
//! [`Unifier`] accumulates term equations `a = b` into a single union-find
//! forest keyed by terms (structurally, so equal-shaped terms are one node).
//! Each call to [`Unifier::unify`] refines the same global solution; there is
//! no separate session object.
//!
//! ## Union policy
//!
//! When a variable class meets a non-variable class, the non-variable root
//! always wins, so dereferencing a variable reaches shape information directly.
//! Otherwise, union by rank.
//!
//! ## Recursive solutions
//!
//! [`Unifier::calculate_solution`] closes every variable's representative into
//! a finite term. Cycles (e.g. `x = f(x)`) are cut at the first variable seen
//! twice on the current path and wrapped in a `μ` binder, which is introduced
//! only when the bound variable actually occurs in the closed body.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::UnificationError;
use crate::term::{Term, Var};

#[derive(Debug, Clone)]
pub struct Unifier<T> {
    parents: HashMap<Term<T>, Term<T>>,
    ranks: HashMap<Term<T>, u32>,
}

impl<T> Default for Unifier<T> {
    fn default() -> Self {
        Self {
            parents: HashMap::new(),
            ranks: HashMap::new(),
        }
    }
}

impl<T> Unifier<T>
where
    T: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn rank(&self, term: &Term<T>) -> u32 {
        self.ranks.get(term).copied().unwrap_or(0)
    }

    /// Representative of `term`, compressing the path to it.
    ///
    /// Terms seen for the first time become singleton classes.
    fn root(&mut self, term: &Term<T>) -> Term<T> {
        let mut path = Vec::new();
        let mut current = term.clone();
        loop {
            let parent = self
                .parents
                .entry(current.clone())
                .or_insert_with(|| current.clone())
                .clone();
            if parent == current {
                break;
            }
            path.push(std::mem::replace(&mut current, parent));
        }
        for node in path {
            self.parents.insert(node, current.clone());
        }
        current
    }

    /// Representative of `term` without modifying the forest.
    pub fn find(&self, term: &Term<T>) -> Term<T> {
        let mut current = term;
        while let Some(parent) = self.parents.get(current) {
            if parent == current {
                break;
            }
            current = parent;
        }
        current.clone()
    }

    /// Merge the classes of two roots, returning the new root.
    fn union(&mut self, a: &Term<T>, b: &Term<T>) -> Term<T> {
        if a == b {
            return a.clone();
        }
        let rank_a = self.rank(a);
        let rank_b = self.rank(b);
        let (root, child) = match (a.is_var(), b.is_var()) {
            (true, false) => {
                self.ranks.insert(b.clone(), rank_b.max(rank_a + 1));
                (b, a)
            }
            (false, true) => {
                self.ranks.insert(a.clone(), rank_a.max(rank_b + 1));
                (a, b)
            }
            _ if rank_a < rank_b => (b, a),
            _ if rank_a > rank_b => (a, b),
            _ => {
                self.ranks.insert(a.clone(), rank_a + 1);
                (a, b)
            }
        };
        trace!("union: {:?} -> {:?}", child, root);
        self.parents.insert(child.clone(), root.clone());
        root.clone()
    }

    /// Assert that `lhs` and `rhs` denote the same value.
    ///
    /// On a shape clash, returns the two offending representatives. Classes
    /// merged while unifying earlier argument pairs of the same call stay merged.
    pub fn unify(&mut self, lhs: &Term<T>, rhs: &Term<T>) -> Result<(), UnificationError<T>> {
        let l = self.root(lhs);
        let r = self.root(rhs);
        if l == r {
            return Ok(());
        }

        match (&l, &r) {
            (Term::App { name: ln, args: la }, Term::App { name: rn, args: ra }) => {
                if ln != rn || la.len() != ra.len() {
                    debug!("unify: constructor clash {:?} vs {:?}", l, r);
                    return Err(UnificationError::new(l.clone(), r.clone()));
                }
                self.union(&l, &r);
                for (a, b) in la.iter().zip(ra.iter()) {
                    self.unify(a, b)?;
                }
                Ok(())
            }
            (Term::Var(_), _) | (_, Term::Var(_)) => {
                self.union(&l, &r);
                Ok(())
            }
            _ => {
                debug!("unify: shape clash {:?} vs {:?}", l, r);
                Err(UnificationError::new(l.clone(), r.clone()))
            }
        }
    }

    /// Every variable mentioned so far.
    pub fn variables(&self) -> Vec<Var<T>> {
        self.parents
            .keys()
            .filter_map(|t| match t {
                Term::Var(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// Close `term` into a finite term, following representatives.
    ///
    /// `visited` holds the variables being expanded on the current path.
    fn close(&self, term: &Term<T>, visited: &HashSet<Var<T>>) -> Term<T> {
        match term {
            Term::Var(v) => {
                let root = self.find(term);
                if visited.contains(v) || root == *term {
                    return Term::Var(v.to_bound());
                }
                let mut inner = visited.clone();
                inner.insert(v.clone());
                let closed = self.close(&root, &inner);
                let bound = v.to_bound();
                if closed.free_vars().contains(&bound) {
                    let body = closed.subst(v, &Term::Var(bound.clone()));
                    Term::mu(bound.name().clone(), body)
                } else {
                    closed
                }
            }
            Term::App { .. } => term.free_vars().into_iter().fold(term.clone(), |acc, v| {
                let closed = self.close(&Term::Var(v.clone()), visited);
                acc.subst(&v, &closed)
            }),
            Term::Mu { param, body } => Term::mu(param.clone(), self.close(body, visited)),
        }
    }

    /// Canonical (possibly recursive) term for every variable seen so far.
    pub fn calculate_solution(&self) -> HashMap<Var<T>, Term<T>> {
        let solution: HashMap<_, _> = self
            .variables()
            .into_iter()
            .map(|v| {
                let closed = self.close(&Term::Var(v.clone()), &HashSet::new());
                (v, closed)
            })
            .collect();
        debug!("calculate_solution: {} variables", solution.len());
        solution
    }
}
