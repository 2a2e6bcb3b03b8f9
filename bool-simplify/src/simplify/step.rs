use crate::{fmt::RenderOptions, symbol::Symbol};
use std::{fmt, ops::Index, slice, vec};

/// The kind of rewrite that produced a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// The expression before any rewrite. Only the first step of a [`Trace`] has this kind.
    Input,

    /// `BA = AB`
    /// `(A + B)C = C(A + B)`
    Reorder,

    /// `A0 = 0`
    /// `A + 1 = 1`
    NullLaw,

    /// `A1 = A`
    /// `A + 0 = A`
    IdentityLaw,

    /// `A!A = 0`
    /// `A + !A = 1`
    InverseLaw,

    /// `!(!A) = A`
    InvolutionLaw,

    /// `AA = A`
    /// `A + A = A`
    IdempotentLaw,
}

impl RuleKind {
    /// Returns a human-readable label for the rule.
    pub fn label(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Reorder => "reorder",
            Self::NullLaw => "null law",
            Self::IdentityLaw => "identity law",
            Self::InverseLaw => "inverse law",
            Self::InvolutionLaw => "involution law",
            Self::IdempotentLaw => "idempotent law",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A snapshot of the whole expression after a single rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    symbol: Symbol,
    kind: RuleKind,
}

impl Step {
    /// Creates a new step.
    pub fn new(symbol: Symbol, kind: RuleKind) -> Self {
        Self { symbol, kind }
    }

    /// Returns the whole expression after the rewrite.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the kind of rewrite that was applied.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Consumes the step, returning the expression.
    pub fn into_symbol(self) -> Symbol {
        self.symbol
    }

    /// Returns a value that formats the step with the given render options.
    pub fn display<'a>(&'a self, options: &'a RenderOptions) -> StepFormatter<'a> {
        StepFormatter { step: self, options }
    }

    /// Renders the step with the given render options.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.display(options).to_string()
    }
}

/// Renders the step with the default render options.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(&RenderOptions::DEFAULT), f)
    }
}

/// Formatter for a [`Step`], in the layout used for traces: the rendered symbol left-aligned in a
/// column 20 characters wide, followed by the rule label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepFormatter<'a> {
    /// The step to format.
    pub step: &'a Step,

    /// The options to use when formatting the symbol.
    pub options: &'a RenderOptions,
}

impl fmt::Display for StepFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.step.symbol.display(self.options).to_string();
        write!(f, "{:<20}{}", symbol, self.step.kind)
    }
}

/// The ordered steps taken to simplify an expression.
///
/// A trace always has at least one step. The first step is the [`RuleKind::Input`] snapshot of
/// the expression that was simplified, and the last step holds the fully simplified expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Creates a trace from steps that begin with the input step.
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        debug_assert!(steps.first().map(Step::kind) == Some(RuleKind::Input));
        Self { steps }
    }

    /// Returns the expression before simplification.
    pub fn input(&self) -> &Symbol {
        &self.steps[0].symbol
    }

    /// Returns the fully simplified expression.
    pub fn result(&self) -> &Symbol {
        &self.steps[self.steps.len() - 1].symbol
    }

    /// Consumes the trace, returning the fully simplified expression.
    pub fn into_result(mut self) -> Symbol {
        let last = self.steps.len() - 1;
        self.steps.swap_remove(last).symbol
    }

    /// Returns every step, including the input step.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps, including the input step.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always returns false, since a trace holds at least the input step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns an iterator over the steps.
    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Renders every step on its own line with the given render options.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.steps.iter()
            .map(|step| step.render(options))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{and, fmt::Notation, or};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn step_layout() {
        let step = Step::new(Symbol::from(and!("B", "C").unwrap()), RuleKind::IdentityLaw);
        assert_eq!(step.to_string(), "BC                  identity law");
        assert_eq!(
            step.render(&Notation::CStyle.options()),
            "B && C              identity law",
        );
    }

    #[test]
    fn formatter_respects_options() {
        let step = Step::new(Symbol::from(or!("A", "B").unwrap()), RuleKind::Reorder);
        let options = Notation::Written.options();
        assert_eq!(step.display(&options).to_string(), "A or B              reorder");
        assert_eq!(step.display(&options).to_string(), step.render(&options));
    }

    #[test]
    fn long_symbols_are_not_truncated() {
        let symbol = Symbol::from(or!("Alpha", "Beta", "Gamma", "Delta").unwrap());
        let step = Step::new(symbol, RuleKind::Reorder);
        assert_eq!(step.to_string(), "Alpha + Beta + Gamma + Deltareorder");
    }

    #[test]
    fn trace_accessors() {
        let trace = Trace::new(vec![
            Step::new(Symbol::from(and!("A", "A").unwrap()), RuleKind::Input),
            Step::new(Symbol::variable("A"), RuleKind::IdempotentLaw),
        ]);
        assert_eq!(trace.len(), 2);
        assert!(!trace.is_empty());
        assert_eq!(trace.input().to_string(), "AA");
        assert_eq!(trace.result(), &Symbol::variable("A"));
        assert_eq!(trace[1].kind(), RuleKind::IdempotentLaw);
        assert_eq!(
            trace.iter().map(Step::kind).collect::<Vec<_>>(),
            vec![RuleKind::Input, RuleKind::IdempotentLaw],
        );
        assert_eq!(trace.to_string(), "AA                  input\nA                   idempotent law");
        assert_eq!(trace.into_result(), Symbol::variable("A"));
    }
}
