//! Fixpoint solvers for dataflow analysis.
//!
//! A dataflow problem is given by:
//! - a finite set of keys (program points) with a dependency structure ([`Domain`] + [`Dependencies`]);
//! - a lattice of per-key values;
//! - a monotone [`Transfer`] function per key.
//!
//! The solution is the least fixpoint of the equation system
//! `x[k] = transfer(k, ⊔ { x[p] | p ∈ incoming(k) })` in the map lattice
//! [`MapLattice`][crate::lattice::MapLattice].
//!
//! Solvers, from the simplest:
//! - [`NaiveSolver`]: iterate an arbitrary function from ⊥ until it stabilizes.
//! - [`SimpleMapSolver`]: naive iteration of the whole equation system.
//! - [`WorklistFixpointSolver`]: recompute only keys whose inputs changed,
//!   optionally with [`Widening`] on backedges and a fixed number of narrowing rounds.
//!
//! # Termination
//!
//! None of the solvers check monotonicity or bound the number of iterations.
//! Termination requires a monotone transfer function and a lattice of finite
//! height, or a widening operator that forces every ascending chain to stabilize.

mod equations;
mod naive;
mod widening;
mod worklist;

pub use equations::{MapLatticeSolver, SimpleMapSolver};
pub use naive::NaiveSolver;
pub use widening::{NoWidening, SimpleWidening, Widening};
pub use worklist::{Worklist, WorklistFixpointSolver, WorklistSolver};

/// Finite, ordered set of keys of an equation system.
pub trait Domain<K> {
    fn domain(&self) -> Vec<K>;
}

/// Dependency structure between keys.
pub trait Dependencies<K> {
    /// Keys whose values flow into `key`.
    fn incoming(&self, key: &K) -> Vec<K>;

    /// Keys that depend on the value of `key`.
    fn outgoing(&self, key: &K) -> Vec<K>;
}

/// Per-key transfer function: maps the joined input state to the output state.
///
/// Must be monotone for the solvers' results to be least fixpoints.
pub trait Transfer<K, E> {
    fn transfer(&self, key: &K, state: E) -> E;
}

impl<K, E, F> Transfer<K, E> for F
where
    F: Fn(&K, E) -> E,
{
    fn transfer(&self, key: &K, state: E) -> E {
        self(key, state)
    }
}

impl<K, G: Domain<K> + ?Sized> Domain<K> for &G {
    fn domain(&self) -> Vec<K> {
        (**self).domain()
    }
}

impl<K, G: Dependencies<K> + ?Sized> Dependencies<K> for &G {
    fn incoming(&self, key: &K) -> Vec<K> {
        (**self).incoming(key)
    }

    fn outgoing(&self, key: &K) -> Vec<K> {
        (**self).outgoing(key)
    }
}
