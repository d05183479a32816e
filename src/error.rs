/// Whether the compilation of an expression succeeded.
pub type Result<T> = core::result::Result<T, MalformedExpression>;

/// Information about why an expression could not be compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedExpression {
    pub kind: ErrorKind,
    /// Start and end position in the expression of the token the error was
    /// found at. The end position is one further than the end of the token.
    pub pos: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `(` that is never closed.
    LeftParen,
    /// A `)` without a matching `(`.
    RightParen,
    /// A character that is neither a symbol nor an operator.
    InvalidCharacter(char),
    /// An operator without enough operands to combine.
    MissingOperand,
    /// More than one automaton fragment was left after compilation.
    UnjoinedFragments(usize),
    /// The expression contains no symbols.
    Empty,
}

impl MalformedExpression {
    pub(crate) fn new(kind: ErrorKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ErrorKind::*;
        match self {
            LeftParen => write!(f, "unmatched LEFT_PAREN"),
            RightParen => write!(f, "unmatched RIGHT_PAREN"),
            InvalidCharacter(ch) => {
                write!(f, "expected `0`, `1`, `e` or an operator, found `{}`", ch)
            }
            MissingOperand => write!(f, "expected an operand for the operator"),
            UnjoinedFragments(count) => write!(
                f,
                "{} sub expressions are not joined by an operator",
                count
            ),
            Empty => write!(f, "expected at least one symbol"),
        }
    }
}

impl std::fmt::Display for MalformedExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ERROR] ({}, {}): {}", self.pos.0, self.pos.1, self.kind)
    }
}

impl std::error::Error for MalformedExpression {}
