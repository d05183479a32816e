use crate::Symbol;
use std::{iter::Enumerate, str::Chars};

/// Expression tokenizer. Every character of the input is a token on its own.
pub(super) struct Tokenizer<'a> {
    /// Iterator over the characters in the input (as defined in the rust `char`
    /// type), along with their position in the input.
    iter: Enumerate<Chars<'a>>,
}

/// Expression token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Start and end position of the token in the input text. The end position
    /// is one further than the end of the current token. Inserted tokens have
    /// an empty range.
    pub pos: (usize, usize),
}

impl Token {
    /// Creates a new [`Token`].
    pub(super) fn new(kind: TokenKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }

    pub(super) fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }
}

/// Expression token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal(Symbol),
    Operator(OperatorKind),
    Invalid(char),
}

/// Expression operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Concat,
    Union,
    Star,
    LeftParen,
    RightParen,
}

impl OperatorKind {
    /// Binding strength of the operator. Parentheses are handled by the
    /// translator and have no precedence.
    pub(super) fn precedence(self) -> u8 {
        match self {
            OperatorKind::Star => 3,
            OperatorKind::Concat => 2,
            OperatorKind::Union => 1,
            OperatorKind::LeftParen | OperatorKind::RightParen => 0,
        }
    }

    fn as_char(self) -> char {
        match self {
            OperatorKind::Concat => '.',
            OperatorKind::Union => '+',
            OperatorKind::Star => '*',
            OperatorKind::LeftParen => '(',
            OperatorKind::RightParen => ')',
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (pos, ch) = self.iter.next()?;

        let kind = match ch {
            '.' => TokenKind::Operator(OperatorKind::Concat),
            '+' => TokenKind::Operator(OperatorKind::Union),
            '*' => TokenKind::Operator(OperatorKind::Star),
            '(' => TokenKind::Operator(OperatorKind::LeftParen),
            ')' => TokenKind::Operator(OperatorKind::RightParen),
            ch => Symbol::from_char(ch).map_or(TokenKind::Invalid(ch), TokenKind::Literal),
        };

        Some(Token::new(kind, (pos, pos + 1)))
    }
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer.
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            iter: input.chars().enumerate(),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Literal(symbol) => write!(f, "{}", symbol),
            TokenKind::Operator(op) => write!(f, "{}", op.as_char()),
            TokenKind::Invalid(ch) => write!(f, "{}", ch),
        }
    }
}
