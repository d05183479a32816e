use super::{
    super::traits::{Simulatable, Simulate},
    model::Nfa,
    StateId,
};
use crate::Symbol;
use std::collections::BTreeSet;

/// Simulates an [`Nfa`] by tracking every state it can be in at once.
///
/// No DFA is built up front; the set of active states is recomputed for every
/// character fed to the simulator.
pub struct NfaSimulator<'a> {
    /// Nfa we are simulating.
    nfa: &'a Nfa,
    /// States reachable with the input fed so far.
    active: BTreeSet<StateId>,
}

impl<'a> NfaSimulator<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            active: nfa.closure([nfa.start_state]),
        }
    }

    /// Returns the states the simulator is currently in.
    pub fn active_states(&self) -> &BTreeSet<StateId> {
        &self.active
    }
}

impl Simulatable for Nfa {
    type Simulator<'a> = NfaSimulator<'a>;

    fn to_simulator(&self) -> Self::Simulator<'_> {
        NfaSimulator::new(self)
    }
}

impl Simulate for NfaSimulator<'_> {
    fn is_accepting(&self) -> bool {
        self.active.iter().any(|state_id| self.nfa.is_final(*state_id))
    }

    fn feed(&mut self, input: char) -> bool {
        // Characters outside of the input alphabet have no transitions, which
        // leaves the simulator without active states for the rest of the input.
        self.active = match Symbol::from_input(input) {
            Some(symbol) => self.nfa.closure(self.nfa.step(&self.active, symbol)),
            None => {
                log::debug!("`{}` is not part of the input alphabet", input);
                BTreeSet::new()
            }
        };

        log::trace!("fed `{}`, active states {:?}", input, self.active);

        self.is_accepting()
    }
}
