//! Implementation of the rewrite rules.
//!
//! Each rule in this module is a function that takes the expression to rewrite as an argument,
//! and returns `Some(symbol)` with the rewritten symbol if the rule applies, or `None` if the rule
//! does not apply. Rules only look at the expression they are given and its direct operands; the
//! engine takes care of visiting every node of the tree.

pub mod complement;
pub mod constant;
pub mod idempotent;
pub mod order;

use crate::symbol::{Expr, Operator, Symbol};
use super::step::RuleKind;

/// A rewrite rule.
pub type Rule = fn(&Expr) -> Option<Symbol>;

/// Every rule, in the order they are tried.
///
/// After any rule rewrites an expression, the rules are tried again from the top against the
/// rewritten expression.
pub const RULES: [(RuleKind, Rule); 6] = [
    (RuleKind::Reorder, order::reorder),
    (RuleKind::NullLaw, constant::null_law),
    (RuleKind::InverseLaw, complement::inverse_law),
    (RuleKind::InvolutionLaw, complement::involution_law),
    (RuleKind::IdentityLaw, constant::identity_law),
    (RuleKind::IdempotentLaw, idempotent::idempotent_law),
];

/// Tries every rule in order, returning the output of the first rule that applies along with its
/// kind.
pub fn apply_first(expr: &Expr) -> Option<(Symbol, RuleKind)> {
    RULES.iter().find_map(|(kind, rule)| rule(expr).map(|symbol| (symbol, *kind)))
}

/// If the expression is an `AND` or `OR` expression, calls the given transformation function with
/// the operator and operands.
///
/// Returns `Some(symbol)` with the transformed symbol if a transformation was applied.
pub(crate) fn do_junction(
    expr: &Expr,
    f: impl FnOnce(Operator, &[Symbol]) -> Option<Symbol>,
) -> Option<Symbol> {
    match expr.operator() {
        Operator::And | Operator::Or => f(expr.operator(), expr.operands()),
        Operator::Not => None,
    }
}

/// If the expression is a `NOT` expression, calls the given transformation function with the
/// negated operand.
///
/// Returns `Some(symbol)` with the transformed symbol if a transformation was applied.
pub(crate) fn do_not(expr: &Expr, f: impl FnOnce(&Symbol) -> Option<Symbol>) -> Option<Symbol> {
    match (expr.operator(), expr.operands()) {
        (Operator::Not, [operand]) => f(operand),
        _ => None,
    }
}

/// Rebuilds an `AND` or `OR` expression from operands that were filtered out of a valid one,
/// collapsing it if too few operands are left to keep the operator.
///
/// - no operands: the identity constant of the operator (`1` for `AND`, `0` for `OR`)
/// - one operand: the operand itself
pub(crate) fn downgrade(operator: Operator, mut operands: Vec<Symbol>) -> Symbol {
    match operands.len() {
        0 => Symbol::Constant(operator.identity().unwrap_or_default()),
        1 => operands.swap_remove(0),
        _ => Symbol::Expr(Expr::new_unchecked(operator, operands)),
    }
}
