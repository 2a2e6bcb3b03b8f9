use bool_attrs::ErrorKind;
use bool_error::ariadne::Fmt;
use bool_error::EXPR;
use crate::symbol::Operator;

/// An operator was given the wrong number of operands.
///
/// `NOT` takes exactly one operand, while `AND` and `OR` take at least two.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` operator: {} required, {} provided", operator, operator.arity(), given),
    labels = [if *operator == Operator::Not && *given > 1 {
        "these operands are extra"
    } else {
        "too few operands here"
    }],
    help = if *operator == Operator::Not {
        format!("negate a single {}; combine several with `AND` or `OR` first", "expression".fg(EXPR))
    } else {
        format!("an `{}` of a single term is the term itself; use the term directly", operator)
    },
)]
pub struct ArityMismatch {
    /// The operator that was being built.
    pub operator: Operator,

    /// The number of operands that were provided.
    pub given: usize,
}

/// A composite expression was built from an unset operator tag.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot build an expression without an operator",
    labels = ["no operator here"],
    help = format!("use one of {} to build composite expressions", "`AND`, `OR`, `NOT`".fg(EXPR)),
)]
pub struct MissingOperator {
    /// The number of operands that were provided.
    pub given: usize,
}
