use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use super::Lattice;
use crate::mapping::Mapping;

/// Pointwise lattice of total functions `K → L::Element`.
#[derive(Debug, Clone)]
pub struct MapLattice<K, L> {
    pub sub: L,
    _phantom: PhantomData<K>,
}

impl<K, L: Lattice> MapLattice<K, L> {
    pub fn new(sub: L) -> Self {
        Self {
            sub,
            _phantom: PhantomData,
        }
    }
}

impl<K, L> Lattice for MapLattice<K, L>
where
    K: Clone + Debug + Eq + Hash,
    L: Lattice,
{
    type Element = Mapping<K, L::Element>;

    fn bottom(&self) -> Self::Element {
        Mapping::new(self.sub.bottom())
    }

    fn top(&self) -> Self::Element {
        Mapping::new(self.sub.top())
    }

    fn lub(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        if x == y {
            return x.clone();
        }
        x.zip(y, |a, b| self.sub.lub(a, b))
    }

    fn leq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        self.sub.leq(x.default_value(), y.default_value())
            && x.iter().all(|(k, v)| self.sub.leq(v, y.get(k)))
            && y.iter().all(|(k, v)| self.sub.leq(x.get(k), v))
    }
}
