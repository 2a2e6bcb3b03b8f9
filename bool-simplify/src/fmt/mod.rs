//! Rendering of boolean expressions into human-readable text.
//!
//! Rendering is controlled by [`RenderOptions`], an immutable value holding the strings used for
//! each operator and for brackets. The [`Notation`] presets cover common notations, but any
//! combination of strings can be used:
//!
//! ```
//! use bool_simplify::{and, not, or, Notation, RenderOptionsBuilder, Symbol};
//!
//! let expr = Symbol::from(not!(or!("A", and!("B", "C").unwrap()).unwrap()).unwrap());
//! assert_eq!(expr.to_string(), "!(A + BC)");
//! assert_eq!(expr.render(&Notation::CStyle.options()), "!(A || B && C)");
//!
//! let options = RenderOptionsBuilder::new()
//!     .and("*")
//!     .brackets("[", "]")
//!     .build();
//! assert_eq!(expr.render(&options), "![A + B * C]");
//! ```
//!
//! # Brackets
//!
//! Each operator has a fixed precedence, from lowest to highest: `OR`, `AND`, `NOT`. An
//! expression is wrapped in brackets unless its precedence is strictly greater than the
//! precedence of the expression containing it. This produces the fewest brackets needed to read
//! the expression back unambiguously. Operands of the same operator are still bracketed, so
//! `AND(A, AND(B, C))` renders as `A(BC)`, keeping the tree structure visible.

use std::{borrow::Cow, fmt};
use crate::symbol::{Expr, Operator, Symbol};

/// The precedence of an operator, in order from lowest precedence (binds loosest) to highest
/// precedence (binds tightest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Any precedence. This is the precedence given to the outermost expression, so it is never
    /// wrapped in brackets.
    Any,

    /// Precedence of `OR`.
    Or,

    /// Precedence of `AND`.
    And,

    /// Precedence of `NOT`.
    Not,
}

/// Options controlling how a boolean expression is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// The prefix used for `NOT`.
    pub not: Cow<'static, str>,

    /// The symbol placed between the operands of `OR`.
    ///
    /// If non-empty, it is padded with a single space on each side.
    pub or: Cow<'static, str>,

    /// The symbol placed between the operands of `AND`.
    ///
    /// If non-empty, it is padded with a single space on each side. The default is empty, which
    /// juxtaposes the operands (`AB`).
    pub and: Cow<'static, str>,

    /// The opening bracket.
    pub left_bracket: Cow<'static, str>,

    /// The closing bracket.
    pub right_bracket: Cow<'static, str>,
}

impl RenderOptions {
    /// The default options: `!` for `NOT`, `+` for `OR`, juxtaposition for `AND`, and
    /// parentheses for brackets.
    pub const DEFAULT: Self = Self {
        not: Cow::Borrowed("!"),
        or: Cow::Borrowed("+"),
        and: Cow::Borrowed(""),
        left_bracket: Cow::Borrowed("("),
        right_bracket: Cow::Borrowed(")"),
    };

    /// Wraps the given [`RenderOptions`] into a builder for further customization.
    pub fn into_builder(self) -> RenderOptionsBuilder {
        RenderOptionsBuilder(self)
    }

    /// Returns the symbol placed between the operands of the given operator.
    fn separator(&self, operator: Operator) -> &str {
        match operator {
            Operator::Or => &*self.or,
            Operator::And => &*self.and,
            Operator::Not => "",
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Preset operator symbols for common notations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `!(A + BC)`
    ///
    /// This is the default notation.
    #[default]
    Default,

    /// `!(A || B && C)`
    CStyle,

    /// `not (A or B and C)`
    Written,

    /// `¬(A ∨ B ∧ C)`
    Mathematical,
}

impl Notation {
    /// Returns the `(not, or, and)` symbols of the notation.
    fn symbols(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Default => ("!", "+", ""),
            Self::CStyle => ("!", "||", "&&"),
            Self::Written => ("not ", "or", "and"),
            Self::Mathematical => ("¬", "∨", "∧"),
        }
    }

    /// Returns the [`RenderOptions`] for this notation, with parentheses for brackets.
    pub fn options(self) -> RenderOptions {
        self.inside(RenderOptions::DEFAULT)
    }

    /// Utility function to create a new [`RenderOptions`] with the same brackets as the given
    /// [`RenderOptions`], but with the operator symbols of this notation.
    pub fn inside(self, options: RenderOptions) -> RenderOptions {
        let (not, or, and) = self.symbols();
        RenderOptions {
            not: Cow::Borrowed(not),
            or: Cow::Borrowed(or),
            and: Cow::Borrowed(and),
            ..options
        }
    }
}

impl From<Notation> for RenderOptions {
    fn from(notation: Notation) -> Self {
        notation.options()
    }
}

/// Helper struct to build a [`RenderOptions`] struct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderOptionsBuilder(RenderOptions);

impl RenderOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix used for `NOT`.
    pub fn not(mut self, not: impl Into<Cow<'static, str>>) -> Self {
        self.0.not = not.into();
        self
    }

    /// Sets the symbol placed between the operands of `OR`.
    pub fn or(mut self, or: impl Into<Cow<'static, str>>) -> Self {
        self.0.or = or.into();
        self
    }

    /// Sets the symbol placed between the operands of `AND`. An empty symbol juxtaposes the
    /// operands.
    pub fn and(mut self, and: impl Into<Cow<'static, str>>) -> Self {
        self.0.and = and.into();
        self
    }

    /// Sets the opening bracket.
    pub fn left_bracket(mut self, left_bracket: impl Into<Cow<'static, str>>) -> Self {
        self.0.left_bracket = left_bracket.into();
        self
    }

    /// Sets the closing bracket.
    pub fn right_bracket(mut self, right_bracket: impl Into<Cow<'static, str>>) -> Self {
        self.0.right_bracket = right_bracket.into();
        self
    }

    /// Sets both brackets at once.
    pub fn brackets(
        self,
        left: impl Into<Cow<'static, str>>,
        right: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.left_bracket(left).right_bracket(right)
    }

    /// Sets the operator symbols to those of the given [`Notation`], keeping the brackets.
    pub fn notation(self, notation: Notation) -> Self {
        Self(notation.inside(self.0))
    }

    /// Builds the [`RenderOptions`] struct.
    pub fn build(self) -> RenderOptions {
        self.0
    }
}

/// Formatter for a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolFormatter<'a> {
    /// The symbol to format.
    pub symbol: &'a Symbol,

    /// The options to use when formatting.
    pub options: &'a RenderOptions,
}

impl SymbolFormatter<'_> {
    /// Formats a symbol contained in an expression of the given precedence.
    fn fmt_symbol(
        symbol: &Symbol,
        options: &RenderOptions,
        parent: Precedence,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match symbol {
            Symbol::Variable(name) => f.write_str(name),
            Symbol::Constant(value) => f.write_str(if *value { "1" } else { "0" }),
            Symbol::Expr(expr) => Self::fmt_expr(expr, options, parent, f),
        }
    }

    /// Formats an expression contained in an expression of the given precedence, adding brackets
    /// if the expression does not bind tighter than its parent.
    pub(crate) fn fmt_expr(
        expr: &Expr,
        options: &RenderOptions,
        parent: Precedence,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let precedence = expr.operator().precedence();
        let wrap = precedence <= parent;
        if wrap {
            f.write_str(&options.left_bracket)?;
        }

        if expr.operator() == Operator::Not {
            f.write_str(&options.not)?;
        }

        let separator = options.separator(expr.operator());
        for (i, operand) in expr.operands().iter().enumerate() {
            if i != 0 && !separator.is_empty() {
                write!(f, " {} ", separator)?;
            }
            Self::fmt_symbol(operand, options, precedence, f)?;
        }

        if wrap {
            f.write_str(&options.right_bracket)?;
        }
        Ok(())
    }
}

impl fmt::Display for SymbolFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_symbol(self.symbol, self.options, Precedence::Any, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{and, not, or, Expr};
    use pretty_assertions::assert_eq;
    use super::*;

    /// `!(A + BC)`
    fn sample() -> Symbol {
        Symbol::from(not!(or!("A", and!("B", "C").unwrap()).unwrap()).unwrap())
    }

    #[test]
    fn default_notation() {
        assert_eq!(sample().to_string(), "!(A + BC)");
        assert_eq!(sample().render(&RenderOptions::default()), "!(A + BC)");
    }

    #[test]
    fn constants_and_constant_operands() {
        let expr = Symbol::from(not!(or!("A", and!("B", "C", true).unwrap()).unwrap()).unwrap());
        assert_eq!(expr.to_string(), "!(A + BC1)");
        assert_eq!(Symbol::constant(false).to_string(), "0");
    }

    #[test]
    fn presets() {
        let expr = sample();
        assert_eq!(expr.render(&Notation::CStyle.options()), "!(A || B && C)");
        assert_eq!(expr.render(&Notation::Written.options()), "not (A or B and C)");
        assert_eq!(expr.render(&Notation::Mathematical.options()), "¬(A ∨ B ∧ C)");
        assert_eq!(expr.render(&Notation::Default.into()), "!(A + BC)");
    }

    #[test]
    fn builder_keeps_brackets_across_notations() {
        let options = RenderOptionsBuilder::new()
            .brackets("[", "]")
            .notation(Notation::CStyle)
            .build();
        assert_eq!(sample().render(&options), "![A || B && C]");

        let options = Notation::Written.options()
            .into_builder()
            .not(String::from("~"))
            .left_bracket("{")
            .right_bracket("}")
            .build();
        assert_eq!(sample().render(&options), "~{A or B and C}");
    }

    #[test]
    fn higher_precedence_children_are_not_bracketed() {
        let expr = Symbol::from(or!("C", not!(and!("B", "C").unwrap()).unwrap()).unwrap());
        assert_eq!(expr.render(&Notation::CStyle.options()), "C || !(B && C)");

        let expr = Symbol::from(and!(or!("A", "B").unwrap(), not!("C").unwrap()).unwrap());
        assert_eq!(expr.to_string(), "(A + B)!C");
    }

    #[test]
    fn equal_precedence_children_are_bracketed() {
        let expr = Symbol::from(and!("A", and!("B", "C").unwrap()).unwrap());
        assert_eq!(expr.to_string(), "A(BC)");

        let expr = Symbol::from(Expr::not(Expr::not("A")));
        assert_eq!(expr.to_string(), "!(!A)");
    }

    #[test]
    fn mixed_nesting() {
        let expr = Symbol::from(and!(
            not!(and!("A", "B").unwrap()).unwrap(),
            or!(not!("A").unwrap(), "B").unwrap(),
            or!(not!("B").unwrap(), "B").unwrap(),
        ).unwrap());
        assert_eq!(
            expr.render(&Notation::CStyle.options()),
            "!(A && B) && (!A || B) && (!B || B)",
        );
    }

    #[test]
    fn outermost_expression_is_never_bracketed() {
        let expr = Symbol::from(or!("A", "B").unwrap());
        assert_eq!(expr.to_string(), "A + B");
        assert_eq!(Expr::not("A").to_string(), "!A");
    }
}
