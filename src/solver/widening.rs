/// Widening strategy for the worklist solver.
///
/// `widen` is applied to a key's new value whenever one of its outgoing edges
/// is a backedge. It must make every ascending chain stabilize in finitely many steps.
pub trait Widening<K, E> {
    fn widen(&self, element: E) -> E;

    fn is_backedge(&self, src: &K, dst: &K) -> bool;
}

/// No widening: no edge is a backedge.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoWidening;

impl<K, E> Widening<K, E> for NoWidening {
    fn widen(&self, element: E) -> E {
        element
    }

    fn is_backedge(&self, _src: &K, _dst: &K) -> bool {
        false
    }
}

/// Widening assembled from a pair of closures.
#[derive(Debug, Clone)]
pub struct SimpleWidening<W, B> {
    pub widen: W,
    pub is_backedge: B,
}

impl<W, B> SimpleWidening<W, B> {
    pub fn new(widen: W, is_backedge: B) -> Self {
        Self { widen, is_backedge }
    }
}

impl<K, E, W, B> Widening<K, E> for SimpleWidening<W, B>
where
    W: Fn(E) -> E,
    B: Fn(&K, &K) -> bool,
{
    fn widen(&self, element: E) -> E {
        (self.widen)(element)
    }

    fn is_backedge(&self, src: &K, dst: &K) -> bool {
        (self.is_backedge)(src, dst)
    }
}
