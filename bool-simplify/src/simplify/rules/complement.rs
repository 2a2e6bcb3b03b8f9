//! Rules involving negation.

use crate::symbol::{Expr, Symbol};
use super::{do_junction, do_not};

/// `A!A = 0`
/// `A + !A = 1`
pub fn inverse_law(expr: &Expr) -> Option<Symbol> {
    do_junction(expr, |operator, operands| {
        let has_complement = operands.iter()
            .filter_map(Symbol::negated_operand)
            .any(|negated| operands.contains(negated));
        if has_complement {
            operator.annihilator().map(Symbol::Constant)
        } else {
            None
        }
    })
}

/// `!(!A) = A`
pub fn involution_law(expr: &Expr) -> Option<Symbol> {
    do_not(expr, |operand| operand.negated_operand().cloned())
}

#[cfg(test)]
mod tests {
    use crate::{and, not, or};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn inverse_law_and() {
        let expr = and!("B", "C", not!("B").unwrap()).unwrap();
        assert_eq!(inverse_law(&expr), Some(Symbol::constant(false)));
    }

    #[test]
    fn inverse_law_or() {
        let expr = or!(not!(and!("A", "B").unwrap()).unwrap(), and!("A", "B").unwrap()).unwrap();
        assert_eq!(inverse_law(&expr), Some(Symbol::constant(true)));
    }

    #[test]
    fn inverse_law_is_structural() {
        // `BA` is not the same operand as `AB` until it is reordered
        let expr = or!(not!(and!("A", "B").unwrap()).unwrap(), and!("B", "A").unwrap()).unwrap();
        assert_eq!(inverse_law(&expr), None);
    }

    #[test]
    fn involution() {
        let expr = Expr::not(Expr::not(or!("A", "B").unwrap()));
        assert_eq!(involution_law(&expr), Some(Symbol::from(or!("A", "B").unwrap())));
        assert_eq!(involution_law(&Expr::not("A")), None);
    }
}
