use crate::symbol::{Expr, Symbol};
use super::{do_junction, downgrade};

/// `AA = A`
/// `A + A = A`
///
/// Removes repeated operands, keeping the first occurrence of each.
pub fn idempotent_law(expr: &Expr) -> Option<Symbol> {
    do_junction(expr, |operator, operands| {
        let mut new_operands: Vec<Symbol> = Vec::with_capacity(operands.len());
        for operand in operands {
            if !new_operands.contains(operand) {
                new_operands.push(operand.clone());
            }
        }

        if new_operands.len() == operands.len() {
            None
        } else {
            Some(downgrade(operator, new_operands))
        }
    })
}
