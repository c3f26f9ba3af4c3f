use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use super::naive::NaiveSolver;
use super::{Dependencies, Domain, Transfer};
use crate::lattice::{Lattice, MapLattice};
use crate::mapping::Mapping;

/// Equation system over a map lattice: a dependency graph plus a transfer function.
///
/// For a key `k`, the input state is the join of the states of `incoming(k)`
/// (⊥ if there are none), and the output state is `transfer(k, input)`.
#[derive(Debug, Clone)]
pub struct MapLatticeSolver<K, L, G, T> {
    pub lattice: MapLattice<K, L>,
    pub graph: G,
    pub transfer: T,
}

impl<K, L, G, T> MapLatticeSolver<K, L, G, T>
where
    K: Clone + Debug + Eq + Hash,
    L: Lattice,
    G: Domain<K> + Dependencies<K>,
    T: Transfer<K, L::Element>,
{
    pub fn new(sub: L, graph: G, transfer: T) -> Self {
        Self {
            lattice: MapLattice::new(sub),
            graph,
            transfer,
        }
    }

    /// The per-key lattice.
    pub fn sub(&self) -> &L {
        &self.lattice.sub
    }

    /// Join of the states of all keys flowing into `key`.
    pub fn join(&self, key: &K, state: &Mapping<K, L::Element>) -> L::Element {
        let sub = self.sub();
        self.graph
            .incoming(key)
            .iter()
            .fold(sub.bottom(), |acc, p| sub.lub(&acc, state.get(p)))
    }

    /// New state of `key` given the current state of the whole system.
    pub fn funsub(&self, key: &K, state: &Mapping<K, L::Element>) -> L::Element {
        self.transfer.transfer(key, self.join(key, state))
    }

    /// Recompute every key of the domain from `state`.
    pub fn step(&self, state: &Mapping<K, L::Element>) -> Mapping<K, L::Element> {
        self.graph
            .domain()
            .into_iter()
            .fold(self.lattice.bottom(), |m, key| {
                let value = self.funsub(&key, state);
                m + (key, value)
            })
    }
}

/// Naive iteration of [`MapLatticeSolver::step`] from ⊥.
#[derive(Debug, Clone)]
pub struct SimpleMapSolver<K, L, G, T> {
    equations: MapLatticeSolver<K, L, G, T>,
    iterations: usize,
}

impl<K, L, G, T> SimpleMapSolver<K, L, G, T>
where
    K: Clone + Debug + Eq + Hash,
    L: Lattice,
    G: Domain<K> + Dependencies<K>,
    T: Transfer<K, L::Element>,
{
    pub fn new(sub: L, graph: G, transfer: T) -> Self {
        Self {
            equations: MapLatticeSolver::new(sub, graph, transfer),
            iterations: 0,
        }
    }

    pub fn equations(&self) -> &MapLatticeSolver<K, L, G, T> {
        &self.equations
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn solve(&mut self) -> Mapping<K, L::Element> {
        let equations = &self.equations;
        let mut naive = NaiveSolver::new(&equations.lattice, |x: &Mapping<K, L::Element>| {
            equations.step(x)
        });
        let result = naive.solve();
        self.iterations = naive.iterations();
        debug!("map lattice solver: {} rounds", self.iterations);
        result
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::Graph;
    use crate::lattice::{FlatElement, FlatLattice};

    fn chain() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_node("d");
        g
    }

    #[test]
    fn test_join_over_incoming() {
        let mut g = Graph::new();
        g.add_edge("a", "c");
        g.add_edge("b", "c");
        let solver = MapLatticeSolver::new(FlatLattice::<i32>::new(), &g, |_: &&str, s: FlatElement<i32>| s);

        let state = solver.lattice.bottom() + ("a", FlatElement::Simple(1));
        assert_eq!(solver.join(&"c", &state), FlatElement::Simple(1));
        assert_eq!(solver.join(&"a", &state), FlatElement::Bottom);

        let state = state + ("b", FlatElement::Simple(2));
        assert_eq!(solver.join(&"c", &state), FlatElement::Top);
    }

    #[test]
    fn test_funsub() {
        let g = chain();
        let solver = MapLatticeSolver::new(FlatLattice::<i32>::new(), &g, |k: &&str, s: FlatElement<i32>| {
            if *k == "a" {
                FlatElement::Simple(7)
            } else {
                s
            }
        });
        let state = solver.lattice.bottom();
        assert_eq!(solver.funsub(&"a", &state), FlatElement::Simple(7));
        assert_eq!(solver.funsub(&"b", &state), FlatElement::Bottom);
    }

    #[test]
    fn test_simple_map_solver() {
        let g = chain();
        let mut solver = SimpleMapSolver::new(FlatLattice::<i32>::new(), &g, |k: &&str, s: FlatElement<i32>| {
            if *k == "a" {
                FlatElement::Simple(7)
            } else {
                s
            }
        });
        let result = solver.solve();
        assert_eq!(result[&"a"], FlatElement::Simple(7));
        assert_eq!(result[&"b"], FlatElement::Simple(7));
        assert_eq!(result[&"c"], FlatElement::Simple(7));
        assert_eq!(result[&"d"], FlatElement::Bottom);
        assert_eq!(solver.iterations(), 4);
    }
}
