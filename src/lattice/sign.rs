//! Sign lattice.
//!
//! The classic example of a flat abstract domain:
//!
//! ```text
//!        ⊤
//!    /   |   \
//!   -    0    +
//!    \   |   /
//!        ⊥
//! ```
//!
//! Arithmetic on signs is tabulated once per lattice with [`FullTable`].
//! Comparison operators return `+` for "true", `0` for "false" and `⊤` when
//! either is possible.

use std::fmt;

use super::flat::FlatElement::{Bottom, Simple, Top};
use super::flat::{FlatElement, FlatLattice};
use super::table::FullTable;
use super::Lattice;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sign {
    Neg,
    Zero,
    Pos,
}

impl Sign {
    pub const ALL: [Sign; 3] = [Sign::Neg, Sign::Zero, Sign::Pos];

    pub fn of(value: i64) -> Self {
        match value.cmp(&0) {
            std::cmp::Ordering::Less => Sign::Neg,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Pos,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Neg => write!(f, "-"),
            Sign::Zero => write!(f, "0"),
            Sign::Pos => write!(f, "+"),
        }
    }
}

pub type SignElement = FlatElement<Sign>;

const NEG: SignElement = Simple(Sign::Neg);
const ZERO: SignElement = Simple(Sign::Zero);
const POS: SignElement = Simple(Sign::Pos);

#[derive(Debug, Clone)]
pub struct SignLattice {
    flat: FlatLattice<Sign>,
    plus: FullTable<SignElement>,
    minus: FullTable<SignElement>,
    times: FullTable<SignElement>,
    div: FullTable<SignElement>,
    equals: FullTable<SignElement>,
    gt: FullTable<SignElement>,
}

impl SignLattice {
    pub fn new() -> Self {
        let values: Vec<SignElement> = [Top, Bottom]
            .into_iter()
            .chain(Sign::ALL.into_iter().map(Simple))
            .collect();

        let plus = FullTable::new(values.clone(), |l, r| match (l, r) {
            (Bottom, _) | (_, Bottom) => Bottom,
            (Top, _) | (_, Top) => Top,
            _ if l == r => *l,
            (Simple(Sign::Zero), _) => *r,
            (_, Simple(Sign::Zero)) => *l,
            _ => Top,
        });

        let minus = FullTable::new(values.clone(), |l, r| match (l, r) {
            (Bottom, _) | (_, Bottom) => Bottom,
            (Top, _) | (_, Top) => Top,
            (Simple(Sign::Pos), _) if *r != POS => POS,
            (Simple(Sign::Neg), _) if *r != NEG => NEG,
            (Simple(Sign::Zero), Simple(Sign::Neg)) => POS,
            (Simple(Sign::Zero), Simple(Sign::Pos)) => NEG,
            (Simple(Sign::Zero), Simple(Sign::Zero)) => ZERO,
            _ => Top,
        });

        let times = FullTable::new(values.clone(), |l, r| match (l, r) {
            (Bottom, _) | (_, Bottom) => Bottom,
            (Simple(Sign::Zero), _) | (_, Simple(Sign::Zero)) => ZERO,
            (Top, _) | (_, Top) => Top,
            _ if l == r => POS,
            _ => NEG,
        });

        // Division by zero (or possibly zero) has no defined result.
        let div = FullTable::new(values.clone(), |l, r| match (l, r) {
            (Bottom, _) | (_, Bottom | Top | Simple(Sign::Zero)) => Bottom,
            (Simple(Sign::Zero), _) => ZERO,
            (Top, _) => Top,
            _ if l == r => POS,
            _ => NEG,
        });

        let equals = FullTable::new(values.clone(), |l, r| match (l, r) {
            (Bottom, _) | (_, Bottom) => Bottom,
            (Simple(Sign::Zero), Simple(Sign::Zero)) => POS,
            (Simple(a), Simple(b)) if a != b => ZERO,
            _ => Top,
        });

        let gt = FullTable::new(values, |l, r| match (l, r) {
            (Bottom, _) | (_, Bottom) => Bottom,
            (Top, _) | (_, Top) => Top,
            (Simple(Sign::Pos), _) if *r != POS => POS,
            (_, Simple(Sign::Pos)) if *l != POS => ZERO,
            (Simple(Sign::Zero), Simple(Sign::Neg)) => POS,
            (_, Simple(Sign::Zero)) => ZERO,
            _ => Top,
        });

        Self {
            flat: FlatLattice::new(),
            plus,
            minus,
            times,
            div,
            equals,
            gt,
        }
    }

    pub fn neg(&self) -> SignElement {
        NEG
    }

    pub fn zero(&self) -> SignElement {
        ZERO
    }

    pub fn pos(&self) -> SignElement {
        POS
    }

    /// Abstraction of a concrete integer.
    pub fn abs(&self, value: i64) -> SignElement {
        self.flat.lift(Sign::of(value))
    }

    pub fn plus(&self, l: &SignElement, r: &SignElement) -> SignElement {
        self.plus.apply(l, r)
    }

    pub fn minus(&self, l: &SignElement, r: &SignElement) -> SignElement {
        self.minus.apply(l, r)
    }

    pub fn times(&self, l: &SignElement, r: &SignElement) -> SignElement {
        self.times.apply(l, r)
    }

    pub fn div(&self, l: &SignElement, r: &SignElement) -> SignElement {
        self.div.apply(l, r)
    }

    pub fn equals(&self, l: &SignElement, r: &SignElement) -> SignElement {
        self.equals.apply(l, r)
    }

    pub fn gt(&self, l: &SignElement, r: &SignElement) -> SignElement {
        self.gt.apply(l, r)
    }
}

impl Default for SignLattice {
    fn default() -> Self {
        Self::new()
    }
}

impl Lattice for SignLattice {
    type Element = SignElement;

    fn bottom(&self) -> Self::Element {
        self.flat.bottom()
    }

    fn top(&self) -> Self::Element {
        self.flat.top()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::lattice::tests::check_axioms;

    #[test]
    fn test_sign_axioms() {
        let lattice = SignLattice::new();
        check_axioms(&lattice, &[Bottom, NEG, ZERO, POS, Top]);
    }

    #[test]
    fn test_sign_join() {
        let lattice = SignLattice::new();
        assert_eq!(lattice.lub(&POS, &POS), POS);
        assert_eq!(lattice.lub(&POS, &NEG), Top);
        assert_eq!(lattice.lub(&Bottom, &ZERO), ZERO);
    }

    #[test]
    fn test_sign_abs() {
        let lattice = SignLattice::new();
        assert_eq!(lattice.abs(-7), NEG);
        assert_eq!(lattice.abs(0), ZERO);
        assert_eq!(lattice.abs(42), POS);
    }

    #[test]
    fn test_sign_plus() {
        let s = SignLattice::new();
        assert_eq!(s.plus(&POS, &POS), POS);
        assert_eq!(s.plus(&POS, &NEG), Top);
        assert_eq!(s.plus(&ZERO, &ZERO), ZERO);
        assert_eq!(s.plus(&ZERO, &NEG), NEG);
        assert_eq!(s.plus(&Bottom, &Top), Bottom);
        assert_eq!(s.plus(&Top, &POS), Top);
    }

    #[test]
    fn test_sign_minus() {
        let s = SignLattice::new();
        assert_eq!(s.minus(&POS, &NEG), POS);
        assert_eq!(s.minus(&NEG, &POS), NEG);
        assert_eq!(s.minus(&ZERO, &POS), NEG);
        assert_eq!(s.minus(&ZERO, &ZERO), ZERO);
        assert_eq!(s.minus(&POS, &POS), Top);
    }

    #[test]
    fn test_sign_times() {
        let s = SignLattice::new();
        assert_eq!(s.times(&ZERO, &Top), ZERO);
        assert_eq!(s.times(&Top, &ZERO), ZERO);
        assert_eq!(s.times(&NEG, &NEG), POS);
        assert_eq!(s.times(&NEG, &POS), NEG);
        assert_eq!(s.times(&Top, &POS), Top);
        assert_eq!(s.times(&Bottom, &ZERO), Bottom);
    }

    #[test]
    fn test_sign_div() {
        let s = SignLattice::new();
        assert_eq!(s.div(&POS, &ZERO), Bottom);
        assert_eq!(s.div(&POS, &Top), Bottom);
        assert_eq!(s.div(&ZERO, &NEG), ZERO);
        assert_eq!(s.div(&NEG, &NEG), POS);
        assert_eq!(s.div(&POS, &NEG), NEG);
        assert_eq!(s.div(&Top, &POS), Top);
    }

    #[test]
    fn test_sign_comparisons() {
        let s = SignLattice::new();
        assert_eq!(s.equals(&ZERO, &ZERO), POS);
        assert_eq!(s.equals(&POS, &NEG), ZERO);
        assert_eq!(s.equals(&POS, &POS), Top);
        assert_eq!(s.gt(&POS, &NEG), POS);
        assert_eq!(s.gt(&NEG, &POS), ZERO);
        assert_eq!(s.gt(&ZERO, &NEG), POS);
        assert_eq!(s.gt(&NEG, &ZERO), ZERO);
        assert_eq!(s.gt(&POS, &POS), Top);
    }
}
