//! Identifiers for nodes of analysed programs.
//!
//! [`NodeId`] values are minted from a process-wide counter and are never
//! reused. [`UidGenerator`] provides an independent counter when ids only
//! need to be unique within one structure.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_NODE_ID: AtomicU32 = AtomicU32::new(0);

/// Unique identifier of a program node (e.g. a CFG node).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Mint a new identifier, distinct from every previously minted one.
    ///
    /// Safe to call from multiple threads.
    pub fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Counter producing `0, 1, 2, ...`; shareable between threads.
#[derive(Debug, Default)]
pub struct UidGenerator {
    state: AtomicU32,
}

impl UidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `start`.
    pub fn starting_at(start: u32) -> Self {
        Self {
            state: AtomicU32::new(start),
        }
    }

    pub fn next(&self) -> u32 {
        self.state.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next call to [`next`][Self::next] will return.
    pub fn peek(&self) -> u32 {
        self.state.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use test_log::test;

    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = NodeId::fresh();
        let b = NodeId::fresh();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), format!("n{}", a.id()));
    }

    #[test]
    fn test_fresh_ids_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| (0..100).map(|_| NodeId::fresh()).collect::<Vec<_>>()))
            .collect();
        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 400);
    }

    #[test]
    fn test_uid_generator() {
        let gen = UidGenerator::new();
        assert_eq!(gen.next(), 0);
        assert_eq!(gen.next(), 1);
        assert_eq!(gen.peek(), 2);

        let gen = UidGenerator::starting_at(10);
        assert_eq!(gen.next(), 10);
    }

    #[test]
    fn test_uid_generator_shared() {
        let gen = Arc::new(UidGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gen = Arc::clone(&gen);
                thread::spawn(move || (0..50).map(|_| gen.next()).collect::<Vec<_>>())
            })
            .collect();
        let all: HashSet<u32> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        assert_eq!(all, (0..200).collect());
    }
}
