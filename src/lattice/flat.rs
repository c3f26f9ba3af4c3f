use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

use super::Lattice;

/// Element of a [`FlatLattice`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FlatElement<X> {
    Bottom,
    Simple(X),
    Top,
}

impl<X> FlatElement<X> {
    pub fn is_bottom(&self) -> bool {
        matches!(self, FlatElement::Bottom)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, FlatElement::Top)
    }

    /// Return the wrapped value, if any.
    pub fn simple(&self) -> Option<&X> {
        match self {
            FlatElement::Simple(x) => Some(x),
            _ => None,
        }
    }
}

impl<X: Display> Display for FlatElement<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatElement::Bottom => write!(f, "⊥"),
            FlatElement::Simple(x) => write!(f, "{}", x),
            FlatElement::Top => write!(f, "⊤"),
        }
    }
}

/// Flat lattice over plain values of type `X`.
///
/// ```text
///        ⊤
///    /  |  \
///   x1  x2  ...
///    \  |  /
///        ⊥
/// ```
#[derive(Clone)]
pub struct FlatLattice<X> {
    _phantom: PhantomData<X>,
}

impl<X> FlatLattice<X> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    pub fn lift(&self, value: X) -> FlatElement<X> {
        FlatElement::Simple(value)
    }
}

impl<X> Default for FlatLattice<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> Debug for FlatLattice<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FlatLattice")
    }
}

impl<X: Clone + Debug + PartialEq> Lattice for FlatLattice<X> {
    type Element = FlatElement<X>;

    fn bottom(&self) -> Self::Element {
        FlatElement::Bottom
    }

    fn top(&self) -> Self::Element {
        FlatElement::Top
    }
}
