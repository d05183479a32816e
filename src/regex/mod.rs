//! Front end of the compiler: turns an infix expression into postfix tokens.
//!
//! Expressions are written over the symbols `0`, `1` and `e` (the empty
//! string) with the operators `.` (concatenation, may be left out), `+`
//! (union), `*` (Kleene star) and parentheses for grouping.

pub use tokenizer::{OperatorKind, Token, TokenKind};

use self::tokenizer::Tokenizer;
use crate::{error::Result, prelude::W};

mod normalize;
mod postfix;
mod tokenizer;

/// Returns `expression` with every implicit concatenation made explicit.
pub fn normalize(expression: &str) -> String {
    W(&normalize::insert_concat(Tokenizer::new(expression).collect())[..]).to_string()
}

/// Translates `expression` to its postfix form (e.g., `0.(1+0)*` becomes
/// `010+*.`).
pub fn postfix(expression: &str) -> Result<String> {
    to_postfix(expression).map(|tokens| W(&tokens[..]).to_string())
}

/// Tokenizes, normalizes and translates `expression` to postfix tokens.
pub(crate) fn to_postfix(expression: &str) -> Result<Vec<Token>> {
    let tokens = normalize::insert_concat(Tokenizer::new(expression).collect());
    let postfix = postfix::to_postfix(tokens)?;

    log::debug!("postfix of `{}`: `{}`", expression, W(&postfix[..]));

    Ok(postfix)
}

impl std::fmt::Display for W<&[Token]> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in self.0 {
            write!(f, "{}", token.kind)?;
        }

        Ok(())
    }
}
