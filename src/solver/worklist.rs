use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use super::equations::MapLatticeSolver;
use super::widening::{NoWidening, Widening};
use super::{Dependencies, Domain, Transfer};
use crate::lattice::Lattice;
use crate::mapping::Mapping;

/// FIFO queue with set semantics.
///
/// Adding an element that is already pending is a no-op, so each element is
/// pending at most once. Elements are popped oldest first.
#[derive(Debug, Clone)]
pub struct Worklist<N> {
    queue: VecDeque<N>,
    pending: HashSet<N>,
}

impl<N> Default for Worklist<N> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            pending: HashSet::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Worklist<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, n: &N) -> bool {
        self.pending.contains(n)
    }

    /// Enqueue `n` unless it is already pending.
    pub fn add(&mut self, n: N) {
        if self.pending.insert(n.clone()) {
            self.queue.push_back(n);
        }
    }

    pub fn add_all<I>(&mut self, ns: I)
    where
        I: IntoIterator<Item = N>,
    {
        for n in ns {
            self.add(n);
        }
    }

    /// Remove and return the oldest pending element.
    pub fn pop(&mut self) -> Option<N> {
        let n = self.queue.pop_front()?;
        self.pending.remove(&n);
        Some(n)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.pending.clear();
    }
}

impl<N: Clone + Eq + Hash> Extend<N> for Worklist<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

/// Worklist scheduling: pop and process pending elements until none are left.
pub trait WorklistSolver<N: Clone + Eq + Hash> {
    fn worklist(&mut self) -> &mut Worklist<N>;

    /// Handle one element; may enqueue more.
    fn process(&mut self, n: N);

    /// Reset the worklist to `init` and process until it is empty.
    fn run<I>(&mut self, init: I)
    where
        I: IntoIterator<Item = N>,
    {
        let worklist = self.worklist();
        worklist.clear();
        worklist.add_all(init);
        while let Some(n) = self.worklist().pop() {
            self.process(n);
        }
    }
}

/// Worklist fixpoint solver over a map lattice.
///
/// Configuration:
/// - [`with_init`][Self::with_init]: seed the worklist with the given keys
///   instead of the whole domain (e.g. only the entry of a forward analysis);
/// - [`with_widening`][Self::with_widening]: widen new values of keys with an
///   outgoing backedge;
/// - [`with_narrowing`][Self::with_narrowing]: after the fixpoint is reached,
///   apply the plain equations this many more times over the whole domain.
///
/// Narrowing is only sound if the transfer function and widening are
/// compatible; this is not checked.
pub struct WorklistFixpointSolver<K, L: Lattice, G, T, W = NoWidening> {
    equations: MapLatticeSolver<K, L, G, T>,
    widening: W,
    init: Option<Vec<K>>,
    narrowing_steps: usize,
    worklist: Worklist<K>,
    current: Mapping<K, L::Element>,
    iterations: usize,
}

impl<K, L, G, T> WorklistFixpointSolver<K, L, G, T, NoWidening>
where
    K: Clone + Debug + Eq + Hash,
    L: Lattice,
    G: Domain<K> + Dependencies<K>,
    T: Transfer<K, L::Element>,
{
    pub fn new(sub: L, graph: G, transfer: T) -> Self {
        let equations = MapLatticeSolver::new(sub, graph, transfer);
        let current = equations.lattice.bottom();
        Self {
            equations,
            widening: NoWidening,
            init: None,
            narrowing_steps: 0,
            worklist: Worklist::new(),
            current,
            iterations: 0,
        }
    }
}

impl<K, L, G, T, W> WorklistFixpointSolver<K, L, G, T, W>
where
    K: Clone + Debug + Eq + Hash,
    L: Lattice,
    G: Domain<K> + Dependencies<K>,
    T: Transfer<K, L::Element>,
    W: Widening<K, L::Element>,
{
    /// Seed the worklist with `init` instead of the whole domain.
    pub fn with_init<I>(mut self, init: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        self.init = Some(init.into_iter().collect());
        self
    }

    pub fn with_widening<W2>(self, widening: W2) -> WorklistFixpointSolver<K, L, G, T, W2>
    where
        W2: Widening<K, L::Element>,
    {
        WorklistFixpointSolver {
            equations: self.equations,
            widening,
            init: self.init,
            narrowing_steps: self.narrowing_steps,
            worklist: self.worklist,
            current: self.current,
            iterations: self.iterations,
        }
    }

    pub fn with_narrowing(mut self, steps: usize) -> Self {
        self.narrowing_steps = steps;
        self
    }

    pub fn equations(&self) -> &MapLatticeSolver<K, L, G, T> {
        &self.equations
    }

    /// Current state; the solution after [`solve`][Self::solve].
    pub fn state(&self) -> &Mapping<K, L::Element> {
        &self.current
    }

    /// Number of processed keys during the last [`solve`][Self::solve].
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn solve(&mut self) -> Mapping<K, L::Element> {
        self.current = self.equations.lattice.bottom();
        self.iterations = 0;

        let init = match &self.init {
            Some(init) => init.clone(),
            None => self.equations.graph.domain(),
        };
        self.run(init);
        debug!("worklist fixpoint reached after {} iterations", self.iterations);

        for i in 0..self.narrowing_steps {
            trace!("narrowing round {}", i + 1);
            self.current = self.equations.step(&self.current);
        }
        if self.narrowing_steps > 0 {
            debug!("applied {} narrowing rounds", self.narrowing_steps);
        }

        self.current.clone()
    }
}

impl<K, L, G, T, W> WorklistSolver<K> for WorklistFixpointSolver<K, L, G, T, W>
where
    K: Clone + Debug + Eq + Hash,
    L: Lattice,
    G: Domain<K> + Dependencies<K>,
    T: Transfer<K, L::Element>,
    W: Widening<K, L::Element>,
{
    fn worklist(&mut self) -> &mut Worklist<K> {
        &mut self.worklist
    }

    fn process(&mut self, n: K) {
        self.iterations += 1;
        let y = self.equations.funsub(&n, &self.current);
        if y == *self.current.get(&n) {
            return;
        }

        let out = self.equations.graph.outgoing(&n);
        let y = if out.iter().any(|m| self.widening.is_backedge(&n, m)) {
            debug!("widening at {:?}", n);
            self.widening.widen(y)
        } else {
            y
        };
        trace!("update {:?} := {:?}", n, y);

        let state = std::mem::replace(&mut self.current, self.equations.lattice.bottom());
        self.current = state + (n, y);
        self.worklist.add_all(out);
    }
}
