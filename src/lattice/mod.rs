//! Lattices and lattice combinators.
//!
//! A [`Lattice`] is a stateless description of a partially ordered value type:
//! it knows the distinguished `bottom` (⊥) and `top` (⊤) elements, how to
//! join (`lub`, ⊔) two elements, and how to compare them (`leq`, ⊑).
//!
//! Larger lattices are built compositionally from smaller ones:
//!
//! - [`FlatLattice`]: `⊥ ⊑ x ⊑ ⊤` for every plain value `x`, distinct values are incomparable.
//! - [`PairLattice`] and [`UniformProductLattice`]: componentwise order.
//! - [`MapLattice`]: pointwise order over [`Mapping`][crate::mapping::Mapping]s.
//! - [`PowersetLattice`]: subsets of a finite universe, ordered by inclusion.
//! - [`ReverseLattice`]: the dual of a lattice; [`ReversePowersetLattice`] joins by intersection.
//!
//! # Laws
//!
//! Every instance must satisfy:
//! - `lub` is commutative, associative and idempotent;
//! - `bottom` is the identity of `lub`;
//! - `a ⊑ b` iff `a ⊔ b = b`.
//!
//! These are not checked at runtime.

use std::fmt::Debug;

pub mod flat;
pub mod map;
pub mod powerset;
pub mod product;
pub mod sign;
pub mod table;

pub use flat::{FlatElement, FlatLattice};
pub use map::MapLattice;
pub use powerset::{PowersetLattice, ReverseLattice, ReversePowersetLattice};
pub use product::{PairLattice, UniformProductLattice};
pub use sign::{Sign, SignElement, SignLattice};
pub use table::FullTable;

/// Lattice interface.
///
/// The lattice object itself carries no state that changes during analysis.
/// It is constructed once and shared by reference.
pub trait Lattice {
    /// The type of lattice elements.
    type Element: Clone + Debug + PartialEq;

    /// The least element (⊥).
    fn bottom(&self) -> Self::Element;

    /// The greatest element (⊤).
    fn top(&self) -> Self::Element;

    /// Least upper bound (`x ⊔ y`).
    ///
    /// The default treats the lattice as flat: anything joined with ⊥ is
    /// itself, equal elements join to themselves, and everything else is ⊤.
    fn lub(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        if *x == self.bottom() {
            y.clone()
        } else if *y == self.bottom() || x == y {
            x.clone()
        } else {
            self.top()
        }
    }

    /// Partial order: `x ⊑ y`.
    ///
    /// Derived from `lub` unless overridden.
    fn leq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        self.lub(x, y) == *y
    }

    /// Reverse partial order: `x ⊒ y`.
    fn geq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        self.leq(y, x)
    }

    /// Equality with respect to the partial order.
    fn eq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        self.leq(x, y) && self.leq(y, x)
    }

    /// Whether `element` belongs to this lattice.
    fn contains(&self, _element: &Self::Element) -> bool {
        true
    }

    /// Join of all the given elements, starting from ⊥.
    fn lub_all<I>(&self, elements: I) -> Self::Element
    where
        I: IntoIterator<Item = Self::Element>,
        Self: Sized,
    {
        elements
            .into_iter()
            .fold(self.bottom(), |acc, e| self.lub(&acc, &e))
    }
}

/// Lattices that also provide the greatest lower bound.
pub trait MeetLattice: Lattice {
    /// Greatest lower bound (`x ⊓ y`).
    fn glb(&self, x: &Self::Element, y: &Self::Element) -> Self::Element;
}

impl<L: Lattice> Lattice for &L {
    type Element = L::Element;

    fn bottom(&self) -> Self::Element {
        (**self).bottom()
    }
    fn top(&self) -> Self::Element {
        (**self).top()
    }
    fn lub(&self, x: &Self::Element, y: &Self::Element) -> Self::Element {
        (**self).lub(x, y)
    }
    fn leq(&self, x: &Self::Element, y: &Self::Element) -> bool {
        (**self).leq(x, y)
    }
    fn contains(&self, element: &Self::Element) -> bool {
        (**self).contains(element)
    }
}
