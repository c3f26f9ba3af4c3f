//! Widening and narrowing on a lattice of unbounded height.

use std::cmp::{max, min};

use num_bigint::BigUint;
use test_log::test;

use fixpoint_rs::graph::Graph;
use fixpoint_rs::lattice::Lattice;
use fixpoint_rs::mapping::Mapping;
use fixpoint_rs::solver::{SimpleWidening, WorklistFixpointSolver};

/// Upper bound of a loop counter.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
enum Bound {
    Unreached,
    Finite(BigUint),
    Infinite,
}

use Bound::{Finite, Infinite, Unreached};

/// Chain `Unreached ⊑ 0 ⊑ 1 ⊑ ... ⊑ Infinite`.
struct BoundLattice;

impl Lattice for BoundLattice {
    type Element = Bound;

    fn bottom(&self) -> Bound {
        Unreached
    }

    fn top(&self) -> Bound {
        Infinite
    }

    fn lub(&self, x: &Bound, y: &Bound) -> Bound {
        max(x, y).clone()
    }
}

fn finite(n: u32) -> Bound {
    Finite(BigUint::from(n))
}

const CAP: u32 = 100;
const THRESHOLD: u32 = 3;

/// `i = 0; while (...) { i = min(i + 1, CAP) }`
fn counting_loop() -> Graph<&'static str> {
    Graph::from_edges([("entry", "head"), ("head", "body"), ("body", "head"), ("head", "exit")])
}

fn capped(k: &&'static str, x: Bound) -> Bound {
    match *k {
        "entry" => finite(0),
        "body" => match x {
            Unreached => Unreached,
            Finite(n) => Finite(min(n + 1u32, BigUint::from(CAP))),
            Infinite => finite(CAP),
        },
        _ => x,
    }
}

fn uncapped(k: &&'static str, x: Bound) -> Bound {
    match *k {
        "entry" => finite(0),
        "body" => match x {
            Finite(n) => Finite(n + 1u32),
            other => other,
        },
        _ => x,
    }
}

fn widen(x: Bound) -> Bound {
    match x {
        Finite(n) if n >= BigUint::from(THRESHOLD) => Infinite,
        other => other,
    }
}

fn is_backedge(src: &&'static str, dst: &&'static str) -> bool {
    *src == "body" && *dst == "head"
}

fn solve_capped(init: &[&'static str], narrowing: usize) -> Mapping<&'static str, Bound> {
    let g = counting_loop();
    let mut solver = WorklistFixpointSolver::new(BoundLattice, &g, capped)
        .with_init(init.iter().copied())
        .with_widening(SimpleWidening::new(widen, is_backedge))
        .with_narrowing(narrowing);
    solver.solve()
}

#[test]
fn test_widening_terminates() {
    let g = counting_loop();
    let mut solver = WorklistFixpointSolver::new(BoundLattice, &g, uncapped)
        .with_widening(SimpleWidening::new(widen, is_backedge));
    let result = solver.solve();

    assert_eq!(result[&"entry"], finite(0));
    assert_eq!(result[&"head"], Infinite);
    assert_eq!(result[&"body"], Infinite);
    assert_eq!(result[&"exit"], Infinite);
    assert!(solver.iterations() < 20, "took {} iterations", solver.iterations());
}

#[test]
fn test_widening_without_narrowing() {
    let result = solve_capped(&["entry", "head", "body", "exit"], 0);
    assert_eq!(result[&"entry"], finite(0));
    assert_eq!(result[&"head"], Infinite);
    assert_eq!(result[&"body"], Infinite);
    assert_eq!(result[&"exit"], Infinite);
}

#[test]
fn test_narrowing_recovers_bound() {
    let result = solve_capped(&["entry", "head", "body", "exit"], 3);
    assert_eq!(result[&"entry"], finite(0));
    assert_eq!(result[&"head"], finite(CAP));
    assert_eq!(result[&"body"], finite(CAP));
    assert_eq!(result[&"exit"], finite(CAP));

    // Further rounds keep the result.
    assert_eq!(solve_capped(&["entry", "head", "body", "exit"], 5), result);
}

#[test]
fn test_partial_narrowing() {
    // One round is not enough to propagate the bound back through the loop head.
    let result = solve_capped(&["entry", "head", "body", "exit"], 1);
    assert_eq!(result[&"head"], Infinite);
    assert_eq!(result[&"body"], finite(CAP));
}

#[test]
fn test_result_independent_of_init_order() {
    let expected = solve_capped(&["entry", "head", "body", "exit"], 3);
    assert_eq!(solve_capped(&["exit", "body", "head", "entry"], 3), expected);
    assert_eq!(solve_capped(&["body", "entry", "exit", "head"], 3), expected);
    assert_eq!(solve_capped(&["entry"], 3), expected);
}
