use super::super::{normalize, postfix};
use crate::{compile, simulate, Symbol};
use proptest::{collection, prelude::*};
use std::collections::BTreeSet;

/// Expression tree used to generate well-formed expressions.
#[derive(Debug, Clone)]
enum Expr {
    Lit(Symbol),
    /// Concatenation, written with an explicit `.` when the flag is set.
    Concat(Box<Expr>, Box<Expr>, bool),
    Union(Box<Expr>, Box<Expr>),
    Star(Box<Expr>),
    Group(Box<Expr>),
}

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Union(..) => 1,
            Expr::Concat(..) => 2,
            Expr::Star(_) => 3,
            Expr::Lit(_) | Expr::Group(_) => 4,
        }
    }

    /// Renders the expression, wrapping operands in parentheses only where
    /// precedence requires it.
    fn render(&self) -> String {
        let operand = |expr: &Expr, min: u8| {
            if expr.precedence() < min {
                format!("({})", expr.render())
            } else {
                expr.render()
            }
        };

        match self {
            Expr::Lit(symbol) => symbol.to_string(),
            Expr::Concat(lhs, rhs, explicit) => format!(
                "{}{}{}",
                operand(&**lhs, 2),
                if *explicit { "." } else { "" },
                operand(&**rhs, 3)
            ),
            Expr::Union(lhs, rhs) => format!("{}+{}", operand(&**lhs, 1), operand(&**rhs, 2)),
            Expr::Star(expr) => format!("{}*", operand(&**expr, 3)),
            Expr::Group(expr) => format!("({})", expr.render()),
        }
    }

    /// Returns every position in `input` a match starting at `start` can end
    /// at.
    fn ends(&self, input: &[Symbol], start: usize) -> BTreeSet<usize> {
        match self {
            Expr::Lit(Symbol::Epsilon) => BTreeSet::from([start]),
            Expr::Lit(symbol) => match input.get(start) {
                Some(next) if next == symbol => BTreeSet::from([start + 1]),
                _ => BTreeSet::new(),
            },
            Expr::Concat(lhs, rhs, _) => lhs
                .ends(input, start)
                .into_iter()
                .flat_map(|mid| rhs.ends(input, mid))
                .collect(),
            Expr::Union(lhs, rhs) => {
                let mut ends = lhs.ends(input, start);
                ends.extend(rhs.ends(input, start));
                ends
            }
            Expr::Star(expr) => {
                let mut ends = BTreeSet::from([start]);
                let mut frontier = vec![start];

                while let Some(pos) = frontier.pop() {
                    for end in expr.ends(input, pos) {
                        if ends.insert(end) {
                            frontier.push(end);
                        }
                    }
                }

                ends
            }
            Expr::Group(expr) => expr.ends(input, start),
        }
    }

    fn matches(&self, input: &str) -> bool {
        let Some(input) = input
            .chars()
            .map(Symbol::from_input)
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };

        self.ends(&input, 0).contains(&input.len())
    }
}

fn arb_expression() -> impl Strategy<Value = Expr> {
    let leaf = any::<Symbol>().prop_map(Expr::Lit);

    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone(), any::<bool>())
                .prop_map(|(lhs, rhs, explicit)| Expr::Concat(
                    Box::new(lhs),
                    Box::new(rhs),
                    explicit
                )),
            (inner.clone(), inner.clone())
                .prop_map(|(lhs, rhs)| Expr::Union(Box::new(lhs), Box::new(rhs))),
            inner.clone().prop_map(|expr| Expr::Star(Box::new(expr))),
            inner.prop_map(|expr| Expr::Group(Box::new(expr))),
        ]
    })
}

fn arb_input() -> impl Strategy<Value = String> {
    collection::vec(prop_oneof![Just('0'), Just('1')], 0..=8)
        .prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn rendering() {
    let expr = Expr::Concat(
        Box::new(Expr::Union(
            Box::new(Expr::Lit(Symbol::Zero)),
            Box::new(Expr::Lit(Symbol::One)),
        )),
        Box::new(Expr::Star(Box::new(Expr::Lit(Symbol::Zero)))),
        false,
    );

    assert_eq!(expr.render(), "(0+1)0*");
    assert!(expr.matches("100"));
    assert!(!expr.matches("01"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn all_valid_expressions_compile(expr in arb_expression()) {
        let expression = expr.render();

        prop_assert!(postfix(&expression).is_ok(), "{}", expression);
        prop_assert!(compile(&expression).is_ok(), "{}", expression);
    }

    #[test]
    fn normalizing_is_idempotent(expr in arb_expression()) {
        let normalized = normalize(&expr.render());

        prop_assert_eq!(normalize(&normalized), normalized.clone());
        prop_assert_eq!(postfix(&normalized), postfix(&expr.render()));
    }

    #[test]
    fn nfa_agrees_with_expression(
        expr in arb_expression(),
        inputs in collection::vec(arb_input(), 1..=8)
    ) {
        let expression = expr.render();
        let nfa = compile(&expression).unwrap();

        for input in inputs {
            prop_assert_eq!(
                simulate(&nfa, &input),
                expr.matches(&input),
                "`{}` on {:?}", expression, input
            );
        }
    }
}
