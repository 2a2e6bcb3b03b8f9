//! The tree representation of boolean expressions.
//!
//! A boolean expression is a tree of [`Symbol`]s. Leaves are either a [`Symbol::Variable`],
//! such as `A`, or a [`Symbol::Constant`], `1` or `0`. Inner nodes are [`Expr`]s, which apply
//! an [`Operator`] (`AND`, `OR` or `NOT`) to an ordered list of operands.
//!
//! Every [`Expr`] exclusively owns its operands, so the tree is acyclic and never shared. Cloning
//! a [`Symbol`] always deep-copies the whole subtree; the rewrite engine relies on this to keep
//! every recorded step independent of the steps that come after it.
//!
//! # Construction
//!
//! Composite nodes can only be built through validating constructors, which enforce the arity of
//! each operator:
//!
//! - `NOT` takes exactly one operand.
//! - `AND` and `OR` take at least two operands.
//!
//! The constructors accept anything that converts [`Into<Symbol>`]: a string becomes a
//! [`Symbol::Variable`], a boolean becomes a [`Symbol::Constant`], and an existing [`Symbol`] or
//! [`Expr`] is used as is. The [`and!`], [`or!`] and [`not!`] macros apply the same conversion to
//! terms of different types.
//!
//! ```
//! use bool_simplify::{and, not, or, Symbol};
//!
//! let expr = not!(or!("A", and!("B", "C").unwrap()).unwrap()).unwrap();
//! assert_eq!(expr.to_string(), "!(A + BC)");
//! assert_eq!(Symbol::from(true).to_string(), "1");
//! ```
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Symbol`] and [`Expr`] implement
//! **structural** equality: two expressions are equal if they have the same operator and their
//! operands are equal element-for-element, **in order**. `AND(A, B)` and `AND(B, A)` are not
//! equal, even though they are semantically equivalent. Only the reorder rule of the rewrite
//! engine changes the order of operands, which is how equivalent expressions end up comparing
//! equal after simplification.
//!
//! [`and!`]: crate::and
//! [`or!`]: crate::or
//! [`not!`]: crate::not

mod iter;

use bool_error::Error;
use crate::{
    error::kind::{ArityMismatch, MissingOperator},
    fmt::{Precedence, RenderOptions, SymbolFormatter},
    simplify::{self, Trace},
};
pub use iter::SymbolIter;
use log::warn;
use std::{fmt, ops::Range};

/// An operator that combines one or more operands into an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Logical disjunction.
    Or,

    /// Logical conjunction.
    And,

    /// Logical negation.
    Not,
}

impl Operator {
    /// Returns the precedence of the operator when rendering.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Or => Precedence::Or,
            Self::And => Precedence::And,
            Self::Not => Precedence::Not,
        }
    }

    /// Returns the name of the operator, such as `AND`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
            Self::Not => "NOT",
        }
    }

    /// Returns a description of the number of operands this operator requires.
    pub fn arity(self) -> &'static str {
        match self {
            Self::Not => "exactly 1 operand",
            Self::And | Self::Or => "at least 2 operands",
        }
    }

    /// Returns true if the operator accepts the given number of operands.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Not => count == 1,
            Self::And | Self::Or => count >= 2,
        }
    }

    /// Returns the identity element of the operator, the constant that can be removed from its
    /// operands without changing the result: `1` for `AND`, `0` for `OR`.
    pub fn identity(self) -> Option<bool> {
        match self {
            Self::And => Some(true),
            Self::Or => Some(false),
            Self::Not => None,
        }
    }

    /// Returns the annihilator of the operator, the constant that forces the result regardless of
    /// the other operands: `0` for `AND`, `1` for `OR`.
    pub fn annihilator(self) -> Option<bool> {
        self.identity().map(|identity| !identity)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single node of a boolean expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A named variable, such as `A`.
    Variable(String),

    /// A constant, `1` (true) or `0` (false).
    Constant(bool),

    /// An operator applied to one or more operands.
    Expr(Expr),
}

impl Symbol {
    /// Creates a variable with the given name.
    ///
    /// Variables named `0` or `1` are accepted, but a warning is logged, since a
    /// [`Symbol::Constant`] was most likely intended.
    pub fn variable(name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(value) = constant_lookalike(&name) {
            warn!(
                "variable named `{}` looks like a constant; use `Symbol::constant({})` if a constant was intended",
                name,
                value,
            );
        }
        Self::Variable(name)
    }

    /// Creates a constant with the given value.
    pub fn constant(value: bool) -> Self {
        Self::Constant(value)
    }

    /// Returns true if the symbol is an [`Expr`].
    pub fn is_expr(&self) -> bool {
        matches!(self, Self::Expr(_))
    }

    /// If the symbol is an [`Expr`], returns a reference to it.
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    /// If the symbol is a [`Symbol::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// If the symbol is a [`Symbol::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<bool> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the symbol is `NOT(x)`, returns a reference to `x`.
    pub fn negated_operand(&self) -> Option<&Symbol> {
        match self {
            Self::Expr(Expr { operator: Operator::Not, operands }) => operands.first(),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of symbols in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> SymbolIter<'_> {
        SymbolIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns a value that formats the symbol with the given render options.
    pub fn display<'a>(&'a self, options: &'a RenderOptions) -> SymbolFormatter<'a> {
        SymbolFormatter { symbol: self, options }
    }

    /// Renders the symbol into a string with the given render options.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.display(options).to_string()
    }

    /// Simplifies the symbol, returning the trace of every rewrite applied.
    ///
    /// See [`simplify::simplify`] for more information.
    pub fn simplify(&self) -> Trace {
        simplify::simplify(self)
    }
}

/// Renders the symbol with the default render options.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(&RenderOptions::DEFAULT), f)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::variable(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self::variable(name)
    }
}

impl From<bool> for Symbol {
    fn from(value: bool) -> Self {
        Self::Constant(value)
    }
}

impl From<Expr> for Symbol {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}

/// An operator applied to an ordered list of operands.
///
/// An [`Expr`] can only be built through its validating constructors, so every [`Expr`] in
/// existence satisfies the arity of its operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    operator: Operator,
    operands: Vec<Symbol>,
}

impl Expr {
    /// Creates a new expression, checking that the operator accepts the number of operands.
    pub fn new(operator: Operator, operands: Vec<Symbol>) -> Result<Self, Error> {
        if operator.accepts(operands.len()) {
            return Ok(Self { operator, operands });
        }

        let (source, spans) = call_source(operator.name(), &operands);
        let span = if operator == Operator::Not && operands.len() > 1 {
            // point at every operand after the first
            spans[1].start..spans[spans.len() - 1].end
        } else {
            operator.name().len()..source.len()
        };

        Err(Error::new(source, vec![span], ArityMismatch {
            operator,
            given: operands.len(),
        }))
    }

    /// Creates a new expression from an operator tag that may not be set.
    ///
    /// This is useful for callers that store the operator separately from the operands. Returns
    /// an error if the tag is [`None`], or if the operator does not accept the number of operands.
    pub fn from_tag(tag: Option<Operator>, operands: Vec<Symbol>) -> Result<Self, Error> {
        match tag {
            Some(operator) => Self::new(operator, operands),
            None => {
                let (source, _) = call_source("_", &operands);
                Err(Error::new(source, vec![0..1], MissingOperator {
                    given: operands.len(),
                }))
            },
        }
    }

    /// Creates the conjunction of the given terms.
    pub fn and<I, T>(terms: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<Symbol>,
    {
        Self::new(Operator::And, terms.into_iter().map(Into::into).collect())
    }

    /// Creates the disjunction of the given terms.
    pub fn or<I, T>(terms: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<Symbol>,
    {
        Self::new(Operator::Or, terms.into_iter().map(Into::into).collect())
    }

    /// Creates the negation of the given term.
    ///
    /// This cannot fail, since exactly one operand is given. Use [`Expr::new`] or the [`not!`]
    /// macro to negate a list of operands whose length is not known in advance.
    ///
    /// [`not!`]: crate::not
    pub fn not(term: impl Into<Symbol>) -> Self {
        Self { operator: Operator::Not, operands: vec![term.into()] }
    }

    /// Creates a new expression without checking the arity of the operator. The caller must
    /// uphold it.
    pub(crate) fn new_unchecked(operator: Operator, operands: Vec<Symbol>) -> Self {
        debug_assert!(operator.accepts(operands.len()));
        Self { operator, operands }
    }

    /// Returns the operator of the expression.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the operands of the expression.
    pub fn operands(&self) -> &[Symbol] {
        &self.operands
    }

    /// Consumes the expression, returning its operands.
    pub fn into_operands(self) -> Vec<Symbol> {
        self.operands
    }

    /// Replaces the operand at the given index. The operator keeps the same number of operands,
    /// so its arity still holds.
    pub(crate) fn replace_operand(&mut self, index: usize, operand: Symbol) -> Symbol {
        std::mem::replace(&mut self.operands[index], operand)
    }

    /// Simplifies the expression, returning the trace of every rewrite applied.
    ///
    /// See [`simplify::simplify`] for more information.
    pub fn simplify(&self) -> Trace {
        simplify::simplify(&Symbol::Expr(self.clone()))
    }
}

/// Renders the expression with the default render options.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SymbolFormatter::fmt_expr(self, &RenderOptions::DEFAULT, Precedence::Any, f)
    }
}

/// If the variable name is written like a constant, returns the value of that constant.
fn constant_lookalike(name: &str) -> Option<bool> {
    match name {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// Writes an operator call in functional notation, such as `NOT(A, B)`, returning the text and
/// the span of each operand within it.
fn call_source(name: &str, operands: &[Symbol]) -> (String, Vec<Range<usize>>) {
    let mut source = format!("{}(", name);
    let mut spans = Vec::with_capacity(operands.len());
    for (i, operand) in operands.iter().enumerate() {
        if i != 0 {
            source.push_str(", ");
        }
        let start = source.len();
        source.push_str(&operand.to_string());
        spans.push(start..source.len());
    }
    source.push(')');
    (source, spans)
}
