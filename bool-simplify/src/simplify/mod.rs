//! Module to simplify boolean expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a simpler,
//! equivalent one, and records every rewrite it applies as a [`Step`] in a [`Trace`].
//!
//! # Algorithm
//!
//! The tree is simplified bottom-up. The operands of an expression are simplified first, then the
//! rules in [`rules::RULES`] are tried against the expression itself, in order. Whenever a rule
//! applies, the rules are tried again from the top against the rewritten expression. An expression
//! is fully simplified once no rule applies to it. Since the operands were already fully
//! simplified, simplifying the result again does nothing.
//!
//! Every step of the trace holds the **whole** tree. When an operand is rewritten, the rewrite is
//! recorded by substituting the rewritten operand into a copy of every expression containing it.
//!
//! ```
//! use bool_simplify::{and, not, or, RuleKind, Symbol};
//!
//! let expr = Symbol::from(not!(or!("A", and!("B", "C", true).unwrap()).unwrap()).unwrap());
//! let trace = expr.simplify();
//! let steps = trace.iter()
//!     .map(|step| (step.symbol().to_string(), step.kind()))
//!     .collect::<Vec<_>>();
//! assert_eq!(steps, vec![
//!     ("!(A + BC1)".to_string(), RuleKind::Input),
//!     ("!(A + 1BC)".to_string(), RuleKind::Reorder),
//!     ("!(A + BC)".to_string(), RuleKind::IdentityLaw),
//! ]);
//! ```

pub mod rules;
pub mod step;

use crate::{step_collector::StepCollector, symbol::{Expr, Symbol}};
use log::{debug, trace};
pub use step::{RuleKind, Step, Trace};

/// Collects the steps of an operand, recording each one as a step of the expression containing
/// the operand.
struct Splice<'a> {
    /// The containing expression, with every operand before `index` already simplified.
    parent: &'a Expr,

    /// The position of the operand being simplified.
    index: usize,

    /// The collector of the containing expression.
    inner: &'a mut dyn StepCollector<Step>,
}

impl StepCollector<Step> for Splice<'_> {
    fn push(&mut self, step: Step) {
        let kind = step.kind();
        let mut parent = self.parent.clone();
        parent.replace_operand(self.index, step.into_symbol());
        self.inner.push(Step::new(Symbol::Expr(parent), kind));
    }

    fn is_recording(&self) -> bool {
        self.inner.is_recording()
    }
}

/// Base implementation of the simplification algorithm.
///
/// `depth` is the number of expressions containing the symbol, used to indent log output.
fn simplify_node(
    symbol: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
    depth: usize,
) -> Symbol {
    let Symbol::Expr(expr) = symbol else {
        return symbol.clone();
    };

    // simplify the operands first
    let mut expr = expr.clone();
    for index in 0..expr.operands().len() {
        if !expr.operands()[index].is_expr() {
            continue;
        }

        let operand = expr.operands()[index].clone();
        let simplified = simplify_node(&operand, &mut Splice {
            parent: &expr,
            index,
            inner: &mut *step_collector,
        }, depth + 1);
        expr.replace_operand(index, simplified);
    }

    // then apply rules to this expression until none apply
    let mut current = Symbol::Expr(expr);
    while let Symbol::Expr(expr) = &current {
        let Some((next, kind)) = rules::apply_first(expr) else {
            break;
        };

        debug!("{}{:<20}{}", "\t".repeat(depth), next.to_string(), kind);
        if step_collector.is_recording() {
            step_collector.push(Step::new(next.clone(), kind));
        }
        current = next;
    }

    trace!("{}fixed point: {}", "\t".repeat(depth), current);
    current
}

/// Simplifies the given symbol, returning the trace of every rewrite applied.
///
/// The first step of the trace is the [`RuleKind::Input`] step, holding a copy of the given
/// symbol. Each following step holds the whole tree after one rewrite, and the last step holds
/// the fully simplified symbol. The given symbol is never modified.
pub fn simplify(symbol: &Symbol) -> Trace {
    let mut steps = vec![Step::new(symbol.clone(), RuleKind::Input)];
    debug!("{:<20}{}", symbol.to_string(), RuleKind::Input);
    simplify_node(symbol, &mut steps, 0);
    Trace::new(steps)
}

/// Simplifies the given symbol, returning only the fully simplified symbol.
///
/// This applies the same rewrites as [`simplify`], without recording them.
pub fn simplified(symbol: &Symbol) -> Symbol {
    simplify_node(symbol, &mut (), 0)
}

#[cfg(test)]
mod tests {
    use crate::{and, not, or};
    use pretty_assertions::assert_eq;
    use test_log::test;
    use super::*;

    /// Returns the rendered symbol and kind of each step.
    fn summary(trace: &Trace) -> Vec<(String, RuleKind)> {
        trace.iter()
            .map(|step| (step.symbol().to_string(), step.kind()))
            .collect()
    }

    #[test]
    fn leaf_has_only_input() {
        let trace = simplify(&Symbol::variable("A"));
        assert_eq!(summary(&trace), vec![("A".to_string(), RuleKind::Input)]);

        let trace = simplify(&Symbol::constant(false));
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn reorder_then_identity() {
        let expr = Symbol::from(and!("C", "B", true).unwrap());
        assert_eq!(summary(&simplify(&expr)), vec![
            ("CB1".to_string(), RuleKind::Input),
            ("1BC".to_string(), RuleKind::Reorder),
            ("BC".to_string(), RuleKind::IdentityLaw),
        ]);
    }

    #[test]
    fn operand_steps_are_spliced() {
        let expr = Symbol::from(or!(
            "A",
            and!(not!(not!("B").unwrap()).unwrap(), "C").unwrap(),
        ).unwrap());
        assert_eq!(summary(&simplify(&expr)), vec![
            ("A + !(!B)C".to_string(), RuleKind::Input),
            ("A + BC".to_string(), RuleKind::InvolutionLaw),
        ]);
    }

    #[test]
    fn operands_simplified_left_to_right() {
        let expr = Symbol::from(or!(
            and!("A", true).unwrap(),
            and!("B", false).unwrap(),
        ).unwrap());
        assert_eq!(summary(&simplify(&expr)), vec![
            ("A1 + B0".to_string(), RuleKind::Input),
            ("1A + B0".to_string(), RuleKind::Reorder),
            ("A + B0".to_string(), RuleKind::IdentityLaw),
            ("A + 0B".to_string(), RuleKind::Reorder),
            ("A + 0".to_string(), RuleKind::NullLaw),
            ("0 + A".to_string(), RuleKind::Reorder),
            ("A".to_string(), RuleKind::IdentityLaw),
        ]);
    }

    #[test]
    fn rules_restart_after_each_rewrite() {
        // the idempotent law exposes a complement, which the inverse law then removes
        let expr = Symbol::from(and!(
            or!("A", "A").unwrap(),
            not!("A").unwrap(),
        ).unwrap());
        assert_eq!(summary(&simplify(&expr)), vec![
            ("(A + A)!A".to_string(), RuleKind::Input),
            ("A!A".to_string(), RuleKind::IdempotentLaw),
            ("0".to_string(), RuleKind::InverseLaw),
        ]);
    }

    #[test]
    fn input_is_not_modified() {
        let expr = Symbol::from(and!("C", "B", true).unwrap());
        let copy = expr.clone();
        let trace = simplify(&expr);
        assert_eq!(expr, copy);
        assert_eq!(trace.input(), &copy);
    }

    #[test]
    fn simplified_matches_trace_result() {
        let expr = Symbol::from(not!(or!("A", and!("B", "C", true).unwrap()).unwrap()).unwrap());
        assert_eq!(&simplified(&expr), simplify(&expr).result());
    }
}
