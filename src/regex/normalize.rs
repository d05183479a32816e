use super::tokenizer::{OperatorKind, Token, TokenKind};

/// Inserts an explicit concatenation operator between every pair of adjacent
/// tokens that are concatenated implicitly (e.g., `0(1)*1` becomes
/// `0.(1)*.1`).
///
/// No validation is done here; malformed expressions are left for the
/// translator to report.
pub(super) fn insert_concat(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len() * 2);
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        result.push(token);

        if let Some(next) = tokens.peek() {
            if needs_concat(&token, next) {
                let gap = token.pos.1;
                result.push(Token::new(
                    TokenKind::Operator(OperatorKind::Concat),
                    (gap, gap),
                ));
            }
        }
    }

    result
}

/// Whether `lhs` directly followed by `rhs` denotes a concatenation.
fn needs_concat(lhs: &Token, rhs: &Token) -> bool {
    use OperatorKind::*;

    let opens_group = matches!(rhs.kind, TokenKind::Operator(LeftParen));
    let starts_operand = !rhs.is_operator() || opens_group;

    match lhs.kind {
        TokenKind::Operator(RightParen) | TokenKind::Operator(Star) => starts_operand,
        TokenKind::Operator(_) => false,
        TokenKind::Literal(_) | TokenKind::Invalid(_) => starts_operand,
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tokenizer::Tokenizer, insert_concat};
    use crate::prelude::W;

    fn normalize(input: &str) -> String {
        W(&insert_concat(Tokenizer::new(input).collect())[..]).to_string()
    }

    #[test]
    fn adjacent_literals() {
        assert_eq!(normalize("0101"), "0.1.0.1");
        assert_eq!(normalize("0e1"), "0.e.1");
    }

    #[test]
    fn groups() {
        assert_eq!(normalize("0(1)"), "0.(1)");
        assert_eq!(normalize("(0)(1)"), "(0).(1)");
        assert_eq!(normalize("(0)1"), "(0).1");
    }

    #[test]
    fn star() {
        assert_eq!(normalize("0*1010*"), "0*.1.0.1.0*");
        assert_eq!(normalize("0*(1)"), "0*.(1)");
        assert_eq!(normalize("(01)*"), "(0.1)*");
    }

    #[test]
    fn explicit_operators_are_kept() {
        assert_eq!(normalize("0.(1+0)*.1"), "0.(1+0)*.1");
        assert_eq!(normalize("0+1"), "0+1");
    }

    #[test]
    fn single_token() {
        assert_eq!(normalize("0"), "0");
        assert_eq!(normalize("("), "(");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn unbalanced_groups_are_not_validated() {
        assert_eq!(normalize("(01"), "(0.1");
        assert_eq!(normalize("0)1"), "0).1");
    }

    #[test]
    fn inserted_tokens_have_empty_positions() {
        let tokens = insert_concat(Tokenizer::new("01").collect());

        assert_eq!(tokens[1].pos, (1, 1));
    }
}
