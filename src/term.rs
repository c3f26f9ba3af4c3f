//! Terms for unification.
//!
//! A [`Term`] is either a variable, a constructor application `f(t1, ..., tn)`,
//! or a recursive binder `μ'x. t` whose body may refer back to `'x`.
//! Recursive binders give a finite representation of infinite regular trees,
//! e.g. the solution of `x = f(x)` is `μ'x. f('x)`.
//!
//! Terms are plain values compared structurally: two terms with the same shape
//! are the same term everywhere (including as union-find keys).

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;

/// A term variable.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Var<T> {
    /// Ordinary unification variable.
    Free(T),
    /// Variable bound by an enclosing recursive binder, originating from `Free(name)`.
    Bound(T),
}

impl<T: Clone> Var<T> {
    pub fn name(&self) -> &T {
        match self {
            Var::Free(name) | Var::Bound(name) => name,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, Var::Bound(_))
    }

    /// The bound counterpart of this variable (idempotent).
    pub fn to_bound(&self) -> Var<T> {
        Var::Bound(self.name().clone())
    }

    /// The variable this one originates from.
    pub fn original(&self) -> Var<T> {
        Var::Free(self.name().clone())
    }
}

impl<T: Display> Display for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Free(name) => write!(f, "{}", name),
            Var::Bound(name) => write!(f, "'{}", name),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Term<T> {
    Var(Var<T>),
    App { name: String, args: Vec<Term<T>> },
    /// Recursive binder; `param` names the bound variable `Var::Bound(param)`.
    Mu { param: T, body: Box<Term<T>> },
}

impl<T> Term<T>
where
    T: Clone + Eq + Hash,
{
    pub fn var(name: T) -> Self {
        Term::Var(Var::Free(name))
    }

    pub fn app(name: impl Into<String>, args: Vec<Term<T>>) -> Self {
        Term::App {
            name: name.into(),
            args,
        }
    }

    /// Nullary application.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::app(name, Vec::new())
    }

    pub fn mu(param: T, body: Term<T>) -> Self {
        Term::Mu {
            param,
            body: Box::new(body),
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    /// Variables occurring in the term outside of binders that bind them.
    pub fn free_vars(&self) -> HashSet<Var<T>> {
        let mut vars = HashSet::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut HashSet<Var<T>>) {
        match self {
            Term::Var(v) => {
                vars.insert(v.clone());
            }
            Term::App { args, .. } => {
                for arg in args {
                    arg.collect_free_vars(vars);
                }
            }
            Term::Mu { param, body } => {
                let mut inner = body.free_vars();
                inner.remove(&Var::Bound(param.clone()));
                vars.extend(inner);
            }
        }
    }

    /// Replace every free occurrence of `var` with `term`.
    ///
    /// A binder for `var` shadows it: its body is left untouched.
    pub fn subst(&self, var: &Var<T>, term: &Term<T>) -> Term<T> {
        match self {
            Term::Var(v) if v == var => term.clone(),
            Term::Var(_) => self.clone(),
            Term::App { name, args } => Term::App {
                name: name.clone(),
                args: args.iter().map(|arg| arg.subst(var, term)).collect(),
            },
            Term::Mu { param, .. } if Var::Bound(param.clone()) == *var => self.clone(),
            Term::Mu { param, body } => Term::Mu {
                param: param.clone(),
                body: Box::new(body.subst(var, term)),
            },
        }
    }
}

impl<T: Display> Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::App { name, args } if args.is_empty() => write!(f, "{}", name),
            Term::App { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Term::Mu { param, body } => write!(f, "μ'{}.{}", param, body),
        }
    }
}
