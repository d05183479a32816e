//! Membership testing for regular expressions over the alphabet `{0, 1}`.
//!
//! An expression is tokenized, made explicit about concatenation, translated
//! to postfix with a shunting-yard parse and compiled to an NFA using
//! Thompson's construction. The NFA is then simulated directly over the input
//! by tracking the set of active states.
//!
//! ```
//! let nfa = thompson::compile("0.(1+0)*.1").unwrap();
//!
//! assert!(thompson::simulate(&nfa, "0101"));
//! assert!(!thompson::simulate(&nfa, "10"));
//! ```

pub use error::{ErrorKind, MalformedExpression, Result};
pub use fsm::{Description, Nfa, NfaSimulator, Simulatable, Simulate, StateId};

pub mod regex;

mod error;
mod fsm;
mod prelude;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Symbols an automaton can make transitions on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Symbol {
    Zero,
    One,
    /// Transition that consumes no input.
    Epsilon,
}

impl Symbol {
    /// Every symbol, in transition table order.
    pub const ALL: [Symbol; 3] = [Symbol::Zero, Symbol::One, Symbol::Epsilon];

    /// Returns the symbol written as `ch` in an expression.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            'e' => Some(Symbol::Epsilon),
            _ => None,
        }
    }

    /// Returns the symbol consumed by `ch` in an input string. Epsilon can
    /// never be consumed.
    pub fn from_input(ch: char) -> Option<Self> {
        match Self::from_char(ch) {
            Some(Symbol::Epsilon) | None => None,
            symbol => symbol,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Epsilon => 'e',
        }
    }

    /// Position of the symbol in a transition table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Compiles `expression` into an [`Nfa`].
///
/// Every call builds its automaton in a fresh arena, so state ids start at
/// zero for each compilation.
pub fn compile(expression: &str) -> Result<Nfa> {
    let postfix = regex::to_postfix(expression)?;
    fsm::NfaCompiler::new().compile(&postfix)
}

/// Returns whether `input` is in the language accepted by `nfa`.
pub fn simulate(nfa: &Nfa, input: &str) -> bool {
    nfa.to_simulator().run(input)
}
