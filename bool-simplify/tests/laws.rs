use bool_error::Error;
use bool_simplify::{
    and,
    error::kind::ArityMismatch,
    not,
    or,
    simplified,
    Expr,
    Notation,
    Operator,
    RuleKind,
    Symbol,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use test_log::test;

/// Evaluates the expression with the given variable values.
fn eval(symbol: &Symbol, values: &HashMap<&str, bool>) -> bool {
    match symbol {
        Symbol::Variable(name) => values[name.as_str()],
        Symbol::Constant(value) => *value,
        Symbol::Expr(expr) => {
            let mut operands = expr.operands().iter().map(|operand| eval(operand, values));
            match expr.operator() {
                Operator::And => operands.all(|value| value),
                Operator::Or => operands.any(|value| value),
                Operator::Not => !operands.all(|value| value),
            }
        },
    }
}

/// Every assignment of the variables `A`, `B` and `C`.
fn assignments() -> Vec<HashMap<&'static str, bool>> {
    (0..8u8)
        .map(|bits| {
            HashMap::from([("A", bits & 1 != 0), ("B", bits & 2 != 0), ("C", bits & 4 != 0)])
        })
        .collect()
}

/// A collection of expressions exercising every rule, alone and together.
fn catalogue() -> Vec<Symbol> {
    let leaves = || -> Vec<Symbol> {
        vec![
            "A".into(),
            "B".into(),
            true.into(),
            false.into(),
            Expr::not("A").into(),
        ]
    };

    let mut symbols = leaves();
    for a in leaves() {
        for b in leaves() {
            for operator in [Operator::And, Operator::Or] {
                symbols.push(Expr::new(operator, vec![a.clone(), b.clone()]).unwrap().into());
                symbols.push(Expr::new(operator, vec![b.clone(), a.clone(), "C".into()]).unwrap().into());
            }
        }
    }

    let nested = symbols.clone();
    for (i, symbol) in nested.iter().enumerate().step_by(3) {
        let other = &nested[(i * 7 + 5) % nested.len()];
        symbols.push(Expr::not(symbol.clone()).into());
        symbols.push(Expr::not(Expr::not(symbol.clone())).into());
        symbols.push(and!(symbol.clone(), or!(other.clone(), "C").unwrap()).unwrap().into());
        symbols.push(or!(not!(symbol.clone()).unwrap(), symbol.clone(), other.clone()).unwrap().into());
    }

    symbols
}

#[test]
fn fixed_point_idempotence() {
    for symbol in catalogue() {
        let result = symbol.simplify().into_result();
        let again = result.simplify();
        assert_eq!(again.len(), 1, "`{}` is not a fixed point", result);
        assert_eq!(again[0].kind(), RuleKind::Input);
        assert_eq!(again.result(), &result);
    }
}

#[test]
fn simplification_preserves_meaning() {
    for symbol in catalogue() {
        let trace = symbol.simplify();
        for step in &trace {
            for values in assignments() {
                assert_eq!(
                    eval(step.symbol(), &values),
                    eval(&symbol, &values),
                    "`{}` and `{}` differ at {:?}",
                    symbol,
                    step.symbol(),
                    values,
                );
            }
        }
    }
}

#[test]
fn trace_shape() {
    for symbol in catalogue() {
        let trace = symbol.simplify();
        assert_eq!(trace.input(), &symbol);
        assert_eq!(trace.result(), &simplified(&symbol));
        assert!(trace.iter().skip(1).all(|step| step.kind() != RuleKind::Input));
    }
}

#[test]
fn collapsing_rules_shrink_the_tree() {
    for symbol in catalogue() {
        let trace = symbol.simplify();
        for pair in trace.steps().windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if after.kind() == RuleKind::Reorder {
                assert_eq!(after.symbol().size(), before.symbol().size());
            } else {
                assert!(after.symbol().size() < before.symbol().size());
            }
        }
    }
}

#[test]
fn ordered_structural_equality() {
    assert_eq!(and!("B", "C", false).unwrap(), and!("B", "C", false).unwrap());
    assert_ne!(and!("B", "C", false).unwrap(), and!(false, "B", "C").unwrap());
}

#[test]
fn reorder_only() {
    let trace = and!("D", "B", "C").unwrap().simplify();
    assert_eq!(trace.result(), &Symbol::from(and!("B", "C", "D").unwrap()));
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[1].kind(), RuleKind::Reorder);
}

#[test]
fn null_law() {
    let trace = and!("B", "C", false).unwrap().simplify();
    assert_eq!(trace.result(), &Symbol::constant(false));
    assert_eq!(trace[trace.len() - 1].kind(), RuleKind::NullLaw);

    let trace = or!("B", "C", true).unwrap().simplify();
    assert_eq!(trace.result(), &Symbol::constant(true));
    assert_eq!(trace[trace.len() - 1].kind(), RuleKind::NullLaw);
}

#[test]
fn identity_law() {
    let trace = and!("C", "B", true).unwrap().simplify();
    assert_eq!(trace.result(), &Symbol::from(and!("B", "C").unwrap()));

    let trace = or!("C", "B", false).unwrap().simplify();
    assert_eq!(trace.result(), &Symbol::from(or!("B", "C").unwrap()));
    assert_eq!(
        trace.iter().map(|step| step.kind()).collect::<Vec<_>>(),
        vec![RuleKind::Input, RuleKind::Reorder, RuleKind::IdentityLaw],
    );
}

#[test]
fn identity_law_only_constants() {
    assert_eq!(simplified(&and!(true, true).unwrap().into()), Symbol::constant(true));
    assert_eq!(simplified(&or!(false, false, false).unwrap().into()), Symbol::constant(false));
}

#[test]
fn inverse_law() {
    let trace = and!("B", "C", not!("B").unwrap()).unwrap().simplify();
    assert_eq!(trace.result(), &Symbol::constant(false));

    let trace = or!("B", "C", not!("B").unwrap()).unwrap().simplify();
    assert_eq!(trace.result(), &Symbol::constant(true));
    assert_eq!(trace[trace.len() - 1].kind(), RuleKind::InverseLaw);
}

#[test]
fn involution_law() {
    let trace = Expr::not(Expr::not("A")).simplify();
    assert_eq!(trace.result(), &Symbol::variable("A"));
    assert_eq!(trace[1].kind(), RuleKind::InvolutionLaw);
}

#[test]
fn idempotent_law() {
    assert_eq!(and!("A", "A").unwrap().simplify().result(), &Symbol::variable("A"));
    assert_eq!(or!("A", "A").unwrap().simplify().result(), &Symbol::variable("A"));
}

#[test]
fn render_before_and_after() {
    let expr = Symbol::from(not!(or!("A", and!("B", "C").unwrap()).unwrap()).unwrap());
    assert_eq!(expr.to_string(), "!(A + BC)");

    let expr = Symbol::from(not!(or!("A", and!("B", "C", true).unwrap()).unwrap()).unwrap());
    let trace = expr.simplify();
    assert_eq!(trace.input().to_string(), "!(A + BC1)");
    assert_eq!(trace.result().to_string(), "!(A + BC)");
    assert_eq!(
        trace.render(&Notation::Mathematical.options()),
        [
            "¬(A ∨ B ∧ C ∧ 1)    input",
            "¬(A ∨ 1 ∧ B ∧ C)    reorder",
            "¬(A ∨ B ∧ C)        identity law",
        ].join("\n"),
    );
}

#[test]
fn arity_errors() {
    let err: Error = not!("A", "B", "C").unwrap_err();
    assert_eq!(
        err.downcast_kind::<ArityMismatch>(),
        Some(&ArityMismatch { operator: Operator::Not, given: 3 }),
    );

    let mut buf = Vec::new();
    err.write_report(&mut buf).unwrap();
    let report = strip_ansi_escapes::strip_str(String::from_utf8(buf).unwrap());
    assert!(report.contains("`NOT` operator: exactly 1 operand required, 3 provided"));
    assert!(report.contains("NOT(A, B, C)"));
    assert!(report.contains("these operands are extra"));
}
