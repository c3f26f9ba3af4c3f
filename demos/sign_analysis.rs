use std::collections::HashMap;

use clap::Parser;

use fixpoint_rs::graph::Graph;
use fixpoint_rs::lattice::{MapLattice, SignElement, SignLattice};
use fixpoint_rs::mapping::Mapping;
use fixpoint_rs::solver::{SimpleMapSolver, Transfer, WorklistFixpointSolver};
use fixpoint_rs::types::NodeId;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Initial value of `x`.
    #[arg(value_name = "INT", default_value = "5", allow_negative_numbers = true)]
    init: i64,

    /// Also run the naive solver and compare.
    #[clap(long)]
    naive: bool,

    /// Show solver logs.
    #[clap(long)]
    debug: bool,
}

type Env = Mapping<&'static str, SignElement>;

/// Right-hand sides of the demo program.
#[derive(Debug)]
enum Stmt {
    Init(i64),
    Cond,
    Decrement,
    Square,
}

struct Signs {
    ops: SignLattice,
    stmts: HashMap<NodeId, Stmt>,
}

impl Transfer<NodeId, Env> for Signs {
    fn transfer(&self, node: &NodeId, env: Env) -> Env {
        let x = *env.get(&"x");
        match self.stmts.get(node) {
            Some(Stmt::Init(value)) => env.updated("x", self.ops.abs(*value)),
            Some(Stmt::Decrement) => env.updated("x", self.ops.minus(&x, &self.ops.abs(1))),
            Some(Stmt::Square) => env.updated("y", self.ops.times(&x, &x)),
            Some(Stmt::Cond) | None => env,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    // x = init
    // while (x > 0) { x = x - 1 }
    // y = x * x
    let stmts = vec![
        (NodeId::fresh(), Stmt::Init(args.init), "x = init"),
        (NodeId::fresh(), Stmt::Cond, "while (x > 0)"),
        (NodeId::fresh(), Stmt::Decrement, "x = x - 1"),
        (NodeId::fresh(), Stmt::Square, "y = x * x"),
    ];
    let ids: Vec<NodeId> = stmts.iter().map(|(id, _, _)| *id).collect();
    let labels: HashMap<NodeId, &str> = stmts.iter().map(|(id, _, label)| (*id, *label)).collect();

    let mut graph = Graph::new();
    graph.add_edge(ids[0], ids[1]);
    graph.add_edge(ids[1], ids[2]);
    graph.add_edge(ids[2], ids[1]);
    graph.add_edge(ids[1], ids[3]);
    print!("graph:\n{}", graph);

    let signs = Signs {
        ops: SignLattice::new(),
        stmts: stmts.into_iter().map(|(id, stmt, _)| (id, stmt)).collect(),
    };

    let transfer = |node: &NodeId, env: Env| signs.transfer(node, env);

    let time_solve = std::time::Instant::now();
    let mut solver = WorklistFixpointSolver::new(MapLattice::new(SignLattice::new()), &graph, transfer).with_init([ids[0]]);
    let result = solver.solve();
    println!(
        "worklist solver: {} iterations in {:.3}s",
        solver.iterations(),
        time_solve.elapsed().as_secs_f64()
    );

    for id in graph.nodes() {
        println!("{:>4} {:<16} {}", id.to_string(), labels[id], result[id]);
    }

    if args.naive {
        let mut naive = SimpleMapSolver::new(MapLattice::new(SignLattice::new()), &graph, transfer);
        let expected = naive.solve();
        println!("naive solver: {} rounds", naive.iterations());
        if expected != result {
            return Err(color_eyre::eyre::eyre!("solvers disagree"));
        }
        println!("solvers agree");
    }

    Ok(())
}
