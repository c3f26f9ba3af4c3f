use super::Lattice;
use crate::error::LatticeError;

/// Product of two lattices, ordered componentwise.
#[derive(Debug, Clone)]
pub struct PairLattice<A, B> {
    pub left: A,
    pub right: B,
}

impl<A: Lattice, B: Lattice> PairLattice<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Lattice, B: Lattice> Lattice for PairLattice<A, B> {
    type Element = (A::Element, B::Element);

    fn bottom(&self) -> Self::Element {
        (self.left.bottom(), self.right.bottom())
    }

    fn top(&self) -> Self::Element {
        (self.left.top(), self.right.top())
    }

    fn lub(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        (self.left.lub(&x.0, &y.0), self.right.lub(&x.1, &y.1))
    }

    fn leq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        self.left.leq(&x.0, &y.0) && self.right.leq(&x.1, &y.1)
    }

    fn contains(&self, element: &Self::Element) -> bool {
        self.left.contains(&element.0) && self.right.contains(&element.1)
    }
}

/// Product of `n` copies of the same lattice.
#[derive(Debug, Clone)]
pub struct UniformProductLattice<L> {
    pub sub: L,
    pub size: usize,
}

impl<L: Lattice> UniformProductLattice<L> {
    pub fn new(sub: L, size: usize) -> Self {
        Self { sub, size }
    }

    /// Componentwise join of two vectors of equal length.
    pub fn try_lub(
        &self,
        x: &[L::Element],
        y: &[L::Element],
    ) -> Result<Vec<L::Element>, LatticeError> {
        if x.len() != y.len() {
            return Err(LatticeError::SizeMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        Ok(x.iter().zip(y).map(|(a, b)| self.sub.lub(a, b)).collect())
    }
}

impl<L: Lattice> Lattice for UniformProductLattice<L> {
    type Element = Vec<L::Element>;

    fn bottom(&self) -> Self::Element {
        vec![self.sub.bottom(); self.size]
    }

    fn top(&self) -> Self::Element {
        vec![self.sub.top(); self.size]
    }

    /// # Panics
    ///
    /// Panics if the elements have different lengths.
    fn lub(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        match self.try_lub(x, y) {
            Ok(z) => z,
            Err(e) => panic!("{}", e),
        }
    }

    fn contains(&self, element: &Self::Element) -> bool {
        element.len() == self.size && element.iter().all(|e| self.sub.contains(e))
    }
}
