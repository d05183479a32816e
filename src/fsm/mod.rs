pub use self::{
    nfa::{model::Nfa, sim::NfaSimulator, Description},
    traits::{Simulatable, Simulate},
};
pub(crate) use self::nfa::compiler::Compiler as NfaCompiler;

/// Identifier of a state, unique within a single finite-state machine.
pub type StateId = usize;

mod nfa;
mod traits;
