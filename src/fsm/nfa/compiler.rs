use super::{
    model::{Nfa, NfaBuilder},
    StateId,
};
use crate::{
    error::{ErrorKind, MalformedExpression, Result},
    regex::{OperatorKind, Token, TokenKind},
    Symbol,
};
use indexmap::IndexSet;

/// Postfix expression to NFA compiler using Thompson's construction.
pub(crate) struct Compiler {
    /// Arena of the NFA being compiled.
    nfa: NfaBuilder,
    /// Symbols seen so far, in order of first occurrence.
    alphabet: Vec<Symbol>,
}

/// Part of the NFA that is still being constructed. The end states have no
/// outgoing transitions leaving the fragment yet.
struct Fragment {
    start: StateId,
    ends: IndexSet<StateId>,
    /// Range in the expression the fragment was compiled from.
    pos: (usize, usize),
}

impl Fragment {
    fn new(
        start: StateId,
        ends: impl IntoIterator<Item = StateId>,
        pos: (usize, usize),
    ) -> Self {
        Self {
            start,
            ends: ends.into_iter().collect(),
            pos,
        }
    }
}

impl Compiler {
    pub(crate) fn new() -> Self {
        Self {
            nfa: Nfa::builder(),
            alphabet: Vec::new(),
        }
    }

    /// Compiles the postfix `tokens` into an [`Nfa`]. The final states of the
    /// NFA are the end states of the fragment left after the last token.
    pub(crate) fn compile(mut self, tokens: &[Token]) -> Result<Nfa> {
        let mut fragments: Vec<Fragment> = Vec::new();

        for token in tokens {
            let fragment = match token.kind {
                TokenKind::Literal(symbol) => self.literal(symbol, token.pos),
                TokenKind::Operator(OperatorKind::Concat) => {
                    let (lhs, rhs) = pop_operands(&mut fragments, token)?;
                    self.concat(lhs, rhs)
                }
                TokenKind::Operator(OperatorKind::Union) => {
                    let (lhs, rhs) = pop_operands(&mut fragments, token)?;
                    self.union(lhs, rhs)
                }
                TokenKind::Operator(OperatorKind::Star) => {
                    let fragment = fragments.pop().ok_or_else(|| {
                        MalformedExpression::new(ErrorKind::MissingOperand, token.pos)
                    })?;
                    self.star(fragment, token.pos)
                }
                TokenKind::Operator(OperatorKind::LeftParen) => {
                    return Err(MalformedExpression::new(ErrorKind::LeftParen, token.pos))
                }
                TokenKind::Operator(OperatorKind::RightParen) => {
                    return Err(MalformedExpression::new(ErrorKind::RightParen, token.pos))
                }
                TokenKind::Invalid(ch) => {
                    return Err(MalformedExpression::new(
                        ErrorKind::InvalidCharacter(ch),
                        token.pos,
                    ))
                }
            };

            fragments.push(fragment);
        }

        let fragment = match fragments.len() {
            0 => return Err(MalformedExpression::new(ErrorKind::Empty, (0, 0))),
            1 => fragments.remove(0),
            count => {
                return Err(MalformedExpression::new(
                    ErrorKind::UnjoinedFragments(count),
                    fragments[1].pos,
                ))
            }
        };

        if !self.alphabet.contains(&Symbol::Epsilon) {
            self.alphabet.push(Symbol::Epsilon);
        }

        let nfa = self.nfa.build(fragment.start, fragment.ends, self.alphabet);

        log::debug!(
            "compiled NFA with {} states, start state {}, final states {:?}",
            nfa.states.len(),
            nfa.start_state,
            nfa.final_states
        );

        Ok(nfa)
    }

    /// Two new states connected by a transition on `symbol`.
    fn literal(&mut self, symbol: Symbol, pos: (usize, usize)) -> Fragment {
        if !self.alphabet.contains(&symbol) {
            self.alphabet.push(symbol);
        }

        let start = self.nfa.add_state();
        let end = self.nfa.add_state();
        self.nfa.add_transition(start, end, symbol);

        Fragment::new(start, [end], pos)
    }

    /// Connects the end states of `lhs` to the start state of `rhs`.
    fn concat(&mut self, lhs: Fragment, rhs: Fragment) -> Fragment {
        for end in lhs.ends {
            self.nfa.add_transition(end, rhs.start, Symbol::Epsilon);
        }

        Fragment::new(lhs.start, rhs.ends, span(lhs.pos, rhs.pos))
    }

    /// New start state branching into both `lhs` and `rhs`.
    fn union(&mut self, lhs: Fragment, rhs: Fragment) -> Fragment {
        let start = self.nfa.add_state();
        self.nfa.add_transition(start, lhs.start, Symbol::Epsilon);
        self.nfa.add_transition(start, rhs.start, Symbol::Epsilon);

        let pos = span(lhs.pos, rhs.pos);
        let mut ends = lhs.ends;
        ends.extend(rhs.ends);

        Fragment { start, ends, pos }
    }

    /// New state that is both the start and the only end state, looping
    /// through `fragment`.
    fn star(&mut self, fragment: Fragment, pos: (usize, usize)) -> Fragment {
        let state = self.nfa.add_state();
        self.nfa.add_transition(state, fragment.start, Symbol::Epsilon);

        for end in fragment.ends {
            self.nfa.add_transition(end, state, Symbol::Epsilon);
        }

        Fragment::new(state, [state], span(fragment.pos, pos))
    }
}

/// Pops the operands of a binary operator, left hand side first.
fn pop_operands(
    fragments: &mut Vec<Fragment>,
    operator: &Token,
) -> Result<(Fragment, Fragment)> {
    match (fragments.pop(), fragments.pop()) {
        (Some(rhs), Some(lhs)) => Ok((lhs, rhs)),
        _ => Err(MalformedExpression::new(
            ErrorKind::MissingOperand,
            operator.pos,
        )),
    }
}

fn span(lhs: (usize, usize), rhs: (usize, usize)) -> (usize, usize) {
    (lhs.0.min(rhs.0), lhs.1.max(rhs.1))
}
