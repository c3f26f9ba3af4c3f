use log::debug;

use crate::lattice::Lattice;

/// Kleene iteration: `x ← f(x)` from ⊥ until `f(x) == x`.
pub struct NaiveSolver<L, F> {
    lattice: L,
    f: F,
    iterations: usize,
}

impl<L, F> NaiveSolver<L, F>
where
    L: Lattice,
    F: Fn(&L::Element) -> L::Element,
{
    pub fn new(lattice: L, f: F) -> Self {
        Self {
            lattice,
            f,
            iterations: 0,
        }
    }

    pub fn lattice(&self) -> &L {
        &self.lattice
    }

    /// Number of applications of `f` performed by the last [`solve`][Self::solve].
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn solve(&mut self) -> L::Element {
        self.iterations = 0;
        let mut x = self.lattice.bottom();
        loop {
            let next = (self.f)(&x);
            self.iterations += 1;
            if next == x {
                break;
            }
            x = next;
        }
        debug!("naive fixpoint converged after {} iterations", self.iterations);
        x
    }
}
