//! Canonical ordering of operands.

use crate::symbol::{Expr, Symbol};
use std::cmp::Ordering;
use super::do_junction;

/// Compares two operands by their canonical order: variables and constants before composite
/// expressions, then by rendered text.
pub fn canonical_order(a: &Symbol, b: &Symbol) -> Ordering {
    a.is_expr().cmp(&b.is_expr())
        .then_with(|| a.to_string().cmp(&b.to_string()))
}

/// `BA = AB`
/// `(A + B)C = C(A + B)`
///
/// Sorts the operands of an `AND` or `OR` expression into canonical order. The sort is stable,
/// and the rule only applies if the order changed.
pub fn reorder(expr: &Expr) -> Option<Symbol> {
    do_junction(expr, |operator, operands| {
        let is_sorted = operands.windows(2)
            .all(|pair| canonical_order(&pair[0], &pair[1]) != Ordering::Greater);
        if is_sorted {
            return None;
        }

        let mut new_operands = operands.to_vec();
        new_operands.sort_by(canonical_order);
        Some(Symbol::Expr(Expr::new_unchecked(operator, new_operands)))
    })
}
