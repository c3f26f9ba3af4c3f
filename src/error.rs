//! Error types.
//!
//! There are two kinds of errors:
//! - [`LatticeError`]: the client combined elements of incompatible shape.
//!   This is a setup mistake and is never retried.
//! - [`UnificationError`]: two term constraints are structurally incompatible.
//!   The caller decides whether this aborts the whole analysis.

use thiserror::Error;

use crate::term::Term;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LatticeError {
    #[error("cannot combine product elements of sizes {left} and {right}")]
    SizeMismatch { left: usize, right: usize },
}

/// Two terms that cannot be made equal.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("cannot unify terms: {left}, {right}")]
pub struct UnificationError<T> {
    pub left: Term<T>,
    pub right: Term<T>,
}

impl<T> UnificationError<T> {
    pub fn new(left: Term<T>, right: Term<T>) -> Self {
        Self { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = LatticeError::SizeMismatch { left: 2, right: 3 };
        assert_eq!(e.to_string(), "cannot combine product elements of sizes 2 and 3");

        let e = UnificationError::new(
            Term::app("f", vec![Term::var("a")]),
            Term::app("g", vec![Term::var("a")]),
        );
        assert_eq!(e.to_string(), "cannot unify terms: f(a), g(a)");
    }
}
