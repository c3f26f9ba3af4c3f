use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::{Lattice, MeetLattice};

/// Subsets of a fixed finite universe, ordered by inclusion.
#[derive(Debug, Clone)]
pub struct PowersetLattice<A> {
    pub universe: HashSet<A>,
}

impl<A: Clone + Debug + Eq + Hash> PowersetLattice<A> {
    pub fn new<I>(universe: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self {
            universe: universe.into_iter().collect(),
        }
    }
}

impl<A: Clone + Debug + Eq + Hash> Lattice for PowersetLattice<A> {
    type Element = HashSet<A>;

    fn bottom(&self) -> Self::Element {
        HashSet::new()
    }

    fn top(&self) -> Self::Element {
        self.universe.clone()
    }

    fn lub(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        x.union(y).cloned().collect()
    }

    fn leq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        x.is_subset(y)
    }

    fn contains(&self, element: &Self::Element) -> bool {
        element.is_subset(&self.universe)
    }
}

impl<A: Clone + Debug + Eq + Hash> MeetLattice for PowersetLattice<A> {
    fn glb(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        x.intersection(y).cloned().collect()
    }
}

/// Dual of a lattice: bottom and top are swapped, order and join are inverted.
#[derive(Debug, Clone)]
pub struct ReverseLattice<L> {
    pub original: L,
}

impl<L: MeetLattice> ReverseLattice<L> {
    pub fn new(original: L) -> Self {
        Self { original }
    }
}

impl<L: MeetLattice> Lattice for ReverseLattice<L> {
    type Element = L::Element;

    fn bottom(&self) -> Self::Element {
        self.original.top()
    }

    fn top(&self) -> Self::Element {
        self.original.bottom()
    }

    fn lub(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        self.original.glb(x, y)
    }

    fn leq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        self.original.leq(y, x)
    }

    fn contains(&self, element: &Self::Element) -> bool {
        self.original.contains(element)
    }
}

impl<L: MeetLattice> MeetLattice for ReverseLattice<L> {
    fn glb(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        self.original.lub(x, y)
    }
}

/// Powerset joined by intersection, for must-analyses.
pub type ReversePowersetLattice<A> = ReverseLattice<PowersetLattice<A>>;

impl<A: Clone + Debug + Eq + Hash> ReversePowersetLattice<A> {
    pub fn with_universe<I>(universe: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        ReverseLattice::new(PowersetLattice::new(universe))
    }
}
