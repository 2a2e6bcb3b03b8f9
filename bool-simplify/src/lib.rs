//! Simplification of boolean expressions, with a human-readable trace of every rewrite.
//!
//! Expressions are trees of [`Symbol`]s: variables, the constants `1` and `0`, and the operators
//! `AND`, `OR` and `NOT` applied to operands. [`Symbol::render`] turns a tree into text, with
//! configurable operator symbols (see [`fmt`]), and [`Symbol::simplify`] rewrites it using the
//! laws of boolean algebra, recording each intermediate tree as a [`Step`] (see [`simplify`]).
//!
//! ```
//! use bool_simplify::{and, not, or, Notation, Symbol};
//!
//! let expr = Symbol::from(and!("B", "C", not!("B").unwrap()).unwrap());
//! let trace = expr.simplify();
//! assert_eq!(trace.result(), &Symbol::constant(false));
//! assert_eq!(
//!     trace.render(&Notation::CStyle.options()),
//!     "B && C && !B        input\n0                   inverse law",
//! );
//! ```

pub mod error;
pub mod fmt;
pub mod simplify;
pub mod step_collector;
pub mod symbol;

pub use error::Error;
pub use fmt::{Notation, RenderOptions, RenderOptionsBuilder};
pub use simplify::{simplified, simplify, RuleKind, Step, Trace};
pub use step_collector::StepCollector;
pub use symbol::{Expr, Operator, Symbol};

/// Builds the conjunction of the given terms, converting each one with [`Into<Symbol>`].
///
/// The terms can be of different types. Returns [`Result<Expr, Error>`], failing if fewer than two
/// terms are given.
///
/// ```
/// use bool_simplify::{and, Symbol};
///
/// let expr = and!("A", true, Symbol::variable("B")).unwrap();
/// assert_eq!(expr.to_string(), "A1B");
/// assert!(and!("A").is_err());
/// ```
#[macro_export]
macro_rules! and {
    ($($term:expr),* $(,)?) => {
        $crate::symbol::Expr::new(
            $crate::symbol::Operator::And,
            vec![$($crate::symbol::Symbol::from($term)),*],
        )
    };
}

/// Builds the disjunction of the given terms, converting each one with [`Into<Symbol>`].
///
/// The terms can be of different types. Returns [`Result<Expr, Error>`], failing if fewer than two
/// terms are given.
#[macro_export]
macro_rules! or {
    ($($term:expr),* $(,)?) => {
        $crate::symbol::Expr::new(
            $crate::symbol::Operator::Or,
            vec![$($crate::symbol::Symbol::from($term)),*],
        )
    };
}

/// Builds the negation of the given term, converting it with [`Into<Symbol>`].
///
/// Returns [`Result<Expr, Error>`], failing unless exactly one term is given. Use [`Expr::not`]
/// to negate a single term infallibly.
#[macro_export]
macro_rules! not {
    ($($term:expr),* $(,)?) => {
        $crate::symbol::Expr::new(
            $crate::symbol::Operator::Not,
            vec![$($crate::symbol::Symbol::from($term)),*],
        )
    };
}
