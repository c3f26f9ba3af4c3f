//! Type inference by unification, including recursive pointer types.

use test_log::test;

use fixpoint_rs::error::UnificationError;
use fixpoint_rs::term::{Term, Var};
use fixpoint_rs::unify::Unifier;

type Type = Term<String>;

/// Type variable of a program expression, written `[[e]]`.
fn tv(expr: &str) -> Type {
    Term::var(format!("[[{}]]", expr))
}

fn int() -> Type {
    Term::constant("int")
}

fn ptr(t: Type) -> Type {
    Term::app("ptr", vec![t])
}

fn fun(params: Vec<Type>, ret: Type) -> Type {
    let mut args = params;
    args.push(ret);
    Term::app("fun", args)
}

fn solution_of(u: &Unifier<String>, expr: &str) -> Type {
    let solution = u.calculate_solution();
    solution[&Var::Free(format!("[[{}]]", expr))].clone()
}

#[test]
fn test_factorial() -> Result<(), UnificationError<String>> {
    // fact(n) { if (n == 0) { r = 1 } else { r = n * fact(n - 1) } return r }
    let mut u = Unifier::new();
    u.unify(&tv("fact"), &fun(vec![tv("n")], tv("r")))?;
    u.unify(&tv("n"), &int())?;
    u.unify(&tv("0"), &int())?;
    u.unify(&tv("1"), &int())?;
    u.unify(&tv("r"), &tv("1"))?;
    u.unify(&tv("n - 1"), &int())?;
    u.unify(&tv("fact"), &fun(vec![tv("n - 1")], tv("fact(n - 1)")))?;
    u.unify(&tv("fact(n - 1)"), &int())?;
    u.unify(&tv("r"), &tv("n * fact(n - 1)"))?;

    assert_eq!(solution_of(&u, "fact"), fun(vec![int()], int()));
    assert_eq!(solution_of(&u, "fact").to_string(), "fun(int, int)");
    assert_eq!(solution_of(&u, "n * fact(n - 1)"), int());
    Ok(())
}

#[test]
fn test_self_referencing_pointer() -> Result<(), UnificationError<String>> {
    // p = alloc null; *p = p
    let mut u = Unifier::new();
    u.unify(&tv("p"), &tv("alloc null"))?;
    u.unify(&tv("alloc null"), &ptr(tv("null")))?;
    u.unify(&tv("p"), &ptr(tv("*p")))?;
    u.unify(&tv("*p"), &tv("p"))?;

    // The cycle is closed at the first variable met twice, here the pointee.
    let snull = solution_of(&u, "null");
    assert_eq!(snull.to_string(), "μ'[[null]].ptr('[[null]])");
    assert!(snull.free_vars().is_empty());

    let sp = solution_of(&u, "p");
    assert_eq!(sp, ptr(snull.clone()));
    assert!(sp.free_vars().is_empty());

    // Unfolding the binder once yields the same infinite tree.
    match &snull {
        Term::Mu { param, body } => {
            let unfolded = body.subst(&Var::Bound(param.clone()), &snull);
            assert_eq!(unfolded, ptr(snull.clone()));
        }
        _ => panic!("expected a recursive type, got {}", snull),
    }
    Ok(())
}

#[test]
fn test_polymorphic_leftover_is_bound_reference() -> Result<(), UnificationError<String>> {
    // id(x) { return x }
    let mut u = Unifier::new();
    u.unify(&tv("id"), &fun(vec![tv("x")], tv("x")))?;

    let sid = solution_of(&u, "id");
    let bx = Term::Var(Var::Bound("[[x]]".to_string()));
    assert_eq!(sid, fun(vec![bx.clone()], bx));
    Ok(())
}

#[test]
fn test_type_error() {
    // x = 1; *x = 2
    let mut u = Unifier::new();
    u.unify(&tv("x"), &int()).unwrap();
    let err = u.unify(&tv("x"), &ptr(tv("*x"))).unwrap_err();
    assert_eq!(err.left, int());
    assert_eq!(err.right, ptr(tv("*x")));
    assert_eq!(err.to_string(), "cannot unify terms: int, ptr([[*x]])");

    // The earlier constraint survives.
    assert_eq!(solution_of(&u, "x"), int());
}
