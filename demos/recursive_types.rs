use clap::{Parser, ValueEnum};
use log::info;

use fixpoint_rs::term::Term;
use fixpoint_rs::unify::Unifier;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Program {
    /// `fact(n) { return n * fact(n - 1) }`
    Factorial,
    /// `p = alloc null; *p = p`
    Pointer,
    /// `x = 1; *x = 2` (ill-typed)
    Clash,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Program to type.
    #[arg(value_enum, default_value = "pointer")]
    program: Program,
}

type Type = Term<String>;

fn tv(expr: &str) -> Type {
    Term::var(format!("[[{}]]", expr))
}

fn int() -> Type {
    Term::constant("int")
}

fn ptr(t: Type) -> Type {
    Term::app("ptr", vec![t])
}

fn constraints(program: Program) -> Vec<(Type, Type)> {
    match program {
        Program::Factorial => vec![
            (tv("fact"), Term::app("fun", vec![tv("n"), tv("r")])),
            (tv("n"), int()),
            (tv("n - 1"), int()),
            (tv("fact"), Term::app("fun", vec![tv("n - 1"), tv("fact(n - 1)")])),
            (tv("r"), tv("n * fact(n - 1)")),
            (tv("n * fact(n - 1)"), int()),
        ],
        Program::Pointer => vec![
            (tv("p"), tv("alloc null")),
            (tv("alloc null"), ptr(tv("null"))),
            (tv("p"), ptr(tv("*p"))),
            (tv("*p"), tv("p")),
        ],
        Program::Clash => vec![(tv("x"), int()), (tv("x"), ptr(tv("*x")))],
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let mut unifier = Unifier::new();
    for (lhs, rhs) in constraints(args.program) {
        info!("{} = {}", lhs, rhs);
        unifier.unify(&lhs, &rhs)?;
    }

    let mut solution: Vec<_> = unifier.calculate_solution().into_iter().collect();
    solution.sort_by_key(|(v, _)| v.to_string());
    for (v, t) in solution {
        println!("{} = {}", v, t);
    }

    Ok(())
}
