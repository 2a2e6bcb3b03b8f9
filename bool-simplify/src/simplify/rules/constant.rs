//! Rules for constant operands of `AND` and `OR` expressions.

use crate::symbol::{Expr, Symbol};
use super::{do_junction, downgrade};

/// `A0 = 0`
/// `A + 1 = 1`
pub fn null_law(expr: &Expr) -> Option<Symbol> {
    do_junction(expr, |operator, operands| {
        let annihilator = operator.annihilator()?;
        operands.iter()
            .find(|operand| operand.as_constant() == Some(annihilator))
            .map(|_| Symbol::Constant(annihilator))
    })
}

/// `A1 = A`
/// `A + 0 = A`
///
/// If every operand is removed, the expression becomes the identity constant itself.
pub fn identity_law(expr: &Expr) -> Option<Symbol> {
    do_junction(expr, |operator, operands| {
        let identity = operator.identity()?;
        let new_operands = operands.iter()
            .filter(|operand| operand.as_constant() != Some(identity))
            .cloned()
            .collect::<Vec<_>>();

        if new_operands.len() == operands.len() {
            None
        } else {
            Some(downgrade(operator, new_operands))
        }
    })
}
