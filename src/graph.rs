//! Dependency graphs for the solvers.
//!
//! [`Graph`] is a finite list of nodes with forward edges; backward edges are
//! maintained alongside. For a forward analysis, `incoming` are the
//! predecessors and `outgoing` the successors. Use [`Graph::reversed`] for a
//! backward analysis.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;

use crate::solver::{Dependencies, Domain};

#[derive(Debug, Clone)]
pub struct Graph<K> {
    nodes: Vec<K>,
    successors: HashMap<K, Vec<K>>,
    predecessors: HashMap<K, Vec<K>>,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            successors: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Graph<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list. Nodes are ordered by first appearance.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut g = Self::new();
        for (from, to) in edges {
            g.add_edge(from, to);
        }
        g
    }

    pub fn contains(&self, node: &K) -> bool {
        self.successors.contains_key(node)
    }

    /// Add a node unless already present.
    pub fn add_node(&mut self, node: K) {
        if !self.contains(&node) {
            self.successors.insert(node.clone(), Vec::new());
            self.predecessors.insert(node.clone(), Vec::new());
            self.nodes.push(node);
        }
    }

    /// Add an edge `from -> to`, adding missing nodes. Parallel edges are ignored.
    pub fn add_edge(&mut self, from: K, to: K) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        let succ = self.successors.entry(from.clone()).or_default();
        if succ.contains(&to) {
            return;
        }
        succ.push(to.clone());
        self.predecessors.entry(to).or_default().push(from);
    }

    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    pub fn successors(&self, node: &K) -> &[K] {
        self.successors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn predecessors(&self, node: &K) -> &[K] {
        self.predecessors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> {
        self.nodes
            .iter()
            .flat_map(move |from| self.successors(from).iter().map(move |to| (from, to)))
    }

    pub fn num_edges(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }

    /// The same graph with every edge flipped.
    pub fn reversed(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            successors: self.predecessors.clone(),
            predecessors: self.successors.clone(),
        }
    }
}

impl<K: Clone + Eq + Hash> Domain<K> for Graph<K> {
    fn domain(&self) -> Vec<K> {
        self.nodes.clone()
    }
}

impl<K: Clone + Eq + Hash> Dependencies<K> for Graph<K> {
    fn incoming(&self, key: &K) -> Vec<K> {
        self.predecessors(key).to_vec()
    }

    fn outgoing(&self, key: &K) -> Vec<K> {
        self.successors(key).to_vec()
    }
}

impl<K: Clone + Eq + Hash + Display> Display for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.iter() {
            write!(f, "{} ->", node)?;
            for succ in self.successors(node) {
                write!(f, " {}", succ)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
