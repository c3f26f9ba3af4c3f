//! # fixpoint-rs: lattices, fixpoint solvers and unification
//!
//! **`fixpoint-rs`** is a small toolkit for building static analyses.
//! It provides the algebraic building blocks (lattices), the machinery that
//! computes least fixpoints of dataflow equations over them, and a unifier
//! that solves term equations, including recursive ones.
//!
//! ## Core Components
//!
//! - **[`lattice`]**: the [`Lattice`][crate::lattice::Lattice] trait and combinators:
//!   flat, powerset (and its reverse), pairs, uniform products, maps, and the sign domain.
//! - **[`mapping`]**: total functions with a default value, the elements of map lattices.
//! - **[`solver`]**: naive, map-lattice and worklist fixpoint solvers, with widening and narrowing.
//! - **[`graph`]**: dependency graphs feeding the solvers.
//! - **[`term`]** and **[`unify`]**: terms with recursive binders and union-find unification.
//!
//! ## Basic Usage
//!
//! Sign analysis of a straight-line program `a = 5; b = -a; c = a * b`:
//!
//! ```rust
//! use fixpoint_rs::graph::Graph;
//! use fixpoint_rs::lattice::{FlatElement, Sign, SignLattice};
//! use fixpoint_rs::solver::WorklistFixpointSolver;
//!
//! let ops = SignLattice::new();
//! let graph = Graph::from_edges([("a", "b"), ("b", "c")]);
//!
//! let transfer = |node: &&str, _input: FlatElement<Sign>| match *node {
//!     "a" => ops.abs(5),
//!     "b" => ops.minus(&ops.zero(), &ops.pos()),
//!     _ => ops.times(&ops.pos(), &ops.neg()),
//! };
//!
//! let mut solver = WorklistFixpointSolver::new(SignLattice::new(), &graph, transfer);
//! let result = solver.solve();
//! assert_eq!(result[&"c"], FlatElement::Simple(Sign::Neg));
//! ```
//!
//! Unification with a recursive solution:
//!
//! ```rust
//! use fixpoint_rs::term::{Term, Var};
//! use fixpoint_rs::unify::Unifier;
//!
//! let mut unifier = Unifier::new();
//! let x = Term::var("x");
//! unifier.unify(&x, &Term::app("f", vec![x.clone()])).unwrap();
//!
//! let solution = unifier.calculate_solution();
//! assert_eq!(solution[&Var::Free("x")].to_string(), "μ'x.f('x)");
//! ```
//!
//! ## Logging
//!
//! The solvers and the unifier report progress through the [`log`] facade
//! (`debug` for convergence, `trace` for individual updates).

pub mod error;
pub mod graph;
pub mod lattice;
pub mod mapping;
pub mod solver;
pub mod term;
pub mod types;
pub mod unify;
