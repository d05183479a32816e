//! Infix to postfix translation using the [shunting-yard algorithm](https://en.wikipedia.org/wiki/Shunting_yard_algorithm).

use super::tokenizer::{OperatorKind, Token, TokenKind};
use crate::error::{ErrorKind, MalformedExpression, Result};

/// Translates a normalized infix token sequence into postfix order.
///
/// Parentheses do not survive the translation. Every operator is left
/// associative; star binds strongest, then concatenation, then union.
pub(super) fn to_postfix(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<Token>> {
    let mut output = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Literal(_) => output.push(token),
            TokenKind::Invalid(ch) => {
                return Err(MalformedExpression::new(
                    ErrorKind::InvalidCharacter(ch),
                    token.pos,
                ))
            }
            TokenKind::Operator(OperatorKind::LeftParen) => operators.push(token),
            TokenKind::Operator(OperatorKind::RightParen) => loop {
                let Some(top) = operators.pop() else {
                    return Err(MalformedExpression::new(ErrorKind::RightParen, token.pos));
                };

                if matches!(top.kind, TokenKind::Operator(OperatorKind::LeftParen)) {
                    break;
                }
                output.push(top);
            },
            TokenKind::Operator(op) => {
                while let Some(&top) = operators.last() {
                    match top.kind {
                        TokenKind::Operator(top_op)
                            if top_op != OperatorKind::LeftParen
                                && top_op.precedence() > op.precedence() =>
                        {
                            output.extend(operators.pop());
                        }
                        _ => break,
                    }
                }
                operators.push(token);
            }
        }
    }

    while let Some(top) = operators.pop() {
        if matches!(top.kind, TokenKind::Operator(OperatorKind::LeftParen)) {
            return Err(MalformedExpression::new(ErrorKind::LeftParen, top.pos));
        }
        output.push(top);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{normalize::insert_concat, tokenizer::Tokenizer},
        to_postfix,
    };
    use crate::{
        error::{ErrorKind, MalformedExpression, Result},
        prelude::W,
    };

    fn translate(input: &str) -> Result<String> {
        to_postfix(insert_concat(Tokenizer::new(input).collect()))
            .map(|tokens| W(&tokens[..]).to_string())
    }

    #[test]
    fn explicit_concat() {
        assert_eq!(translate("0.1").unwrap(), "01.");
    }

    #[test]
    fn precedence() {
        assert_eq!(translate("0+1.0").unwrap(), "010.+");
        assert_eq!(translate("0.1*").unwrap(), "01*.");
        assert_eq!(translate("0*.1").unwrap(), "0*1.");
        assert_eq!(translate("0+1*").unwrap(), "01*+");
    }

    #[test]
    fn groups() {
        assert_eq!(translate("(0+1)*").unwrap(), "01+*");
        assert_eq!(translate("0.(1+0)*.1").unwrap(), "010+*1..");
        assert_eq!(translate("((0))").unwrap(), "0");
    }

    #[test]
    fn implicit_concat() {
        assert_eq!(translate("0*1010*").unwrap(), "0*1010*....");
        assert_eq!(translate("01").unwrap(), "01.");
    }

    #[test]
    fn operators_are_passed_through_unchecked() {
        // Missing operands are found by the compiler, not the translator.
        assert_eq!(translate("+1").unwrap(), "1+");
        assert_eq!(translate("()").unwrap(), "");
    }

    #[test]
    fn unmatched_left_paren() {
        assert_eq!(
            translate("(0+1"),
            Err(MalformedExpression {
                kind: ErrorKind::LeftParen,
                pos: (0, 1)
            })
        );
    }

    #[test]
    fn unmatched_right_paren() {
        assert_eq!(
            translate("0+1)"),
            Err(MalformedExpression {
                kind: ErrorKind::RightParen,
                pos: (3, 4)
            })
        );
        assert_eq!(translate(")(").unwrap_err().kind, ErrorKind::RightParen);
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            translate("0|1"),
            Err(MalformedExpression {
                kind: ErrorKind::InvalidCharacter('|'),
                pos: (1, 2)
            })
        );
    }
}
