//! Built-in example expressions.

use bool_simplify::{and, not, or, Error, Expr, Symbol};

/// A named example expression.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    /// The name used to select the example on the command line.
    pub name: &'static str,

    /// What the example demonstrates.
    pub description: &'static str,

    /// Builds the expression.
    pub build: fn() -> Result<Symbol, Error>,
}

/// Every built-in example, in the order they are printed.
pub const EXAMPLES: &[Example] = &[
    Example {
        name: "nested",
        description: "constant inside a negated disjunction",
        build: || Ok(not!(or!("A", and!("B", "C", true)?)?)?.into()),
    },
    Example {
        name: "negated-and",
        description: "negated conjunction inside a disjunction",
        build: || Ok(or!("C", not!(and!("B", "C")?)?)?.into()),
    },
    Example {
        name: "negated-constant",
        description: "negation of a constant",
        build: || Ok(not!(true)?.into()),
    },
    Example {
        name: "mixed",
        description: "conjunction of disjunctions with negations",
        build: || Ok(and!(
            not!(and!("A", "B")?)?,
            or!(not!("A")?, "B")?,
            or!(not!("B")?, "B")?,
        )?.into()),
    },
    Example {
        name: "reorder",
        description: "operands sorted into canonical order",
        build: || Ok(and!("D", "B", "C")?.into()),
    },
    Example {
        name: "null-and",
        description: "`AND` with a 0 operand",
        build: || Ok(and!("B", "C", false)?.into()),
    },
    Example {
        name: "null-or",
        description: "`OR` with a 1 operand",
        build: || Ok(or!("B", "C", true)?.into()),
    },
    Example {
        name: "identity-and",
        description: "`AND` with a 1 operand",
        build: || Ok(and!("C", "B", true)?.into()),
    },
    Example {
        name: "identity-or",
        description: "`OR` with a 0 operand",
        build: || Ok(or!("C", "B", false)?.into()),
    },
    Example {
        name: "inverse-and",
        description: "`AND` of a term and its negation",
        build: || Ok(and!("B", "C", not!("B")?)?.into()),
    },
    Example {
        name: "inverse-or",
        description: "`OR` of a term and its negation",
        build: || Ok(or!("B", "C", not!("B")?)?.into()),
    },
    Example {
        name: "involution",
        description: "double negation",
        build: || Ok(Expr::not(Expr::not("A")).into()),
    },
    Example {
        name: "idempotent-and",
        description: "`AND` of a repeated term",
        build: || Ok(and!("A", "A")?.into()),
    },
    Example {
        name: "idempotent-or",
        description: "`OR` of a repeated term",
        build: || Ok(or!("A", "A")?.into()),
    },
    Example {
        name: "extra-operand",
        description: "`NOT` given two operands, which is rejected",
        build: || Ok(not!("A", "B")?.into()),
    },
];

/// Finds the example with the given name.
pub fn find(name: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.name == name)
}
