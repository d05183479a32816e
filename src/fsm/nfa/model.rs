use super::StateId;
use crate::Symbol;
use indexmap::IndexSet;
use std::collections::{BTreeSet, VecDeque};

/// NFA finite-state machine.
///
/// The NFA owns every state created while compiling a single expression. States
/// refer to each other by their [`StateId`], which is the index of the state in
/// the NFA.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(super) start_state: StateId,
    pub(super) states: Vec<State>,
    pub(super) final_states: Vec<StateId>,
    /// Symbols occurring in the compiled expression, in order of first
    /// occurrence, followed by epsilon.
    pub(super) alphabet: Vec<Symbol>,
}

/// A state in the NFA.
#[derive(Debug, Clone)]
pub(super) struct State {
    /// Id of the state used by other states as a pointer.
    pub(super) id: StateId,
    /// Whether the state is final.
    pub(super) fin: bool,
    pub(super) transitions: Transitions,
}

/// Transition table of a [`State`] with a destination set for every [`Symbol`].
///
/// Destinations keep their insertion order, so that the rendered and
/// serialized forms of an NFA are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Transitions([IndexSet<StateId>; 3]);

impl Nfa {
    /// Creates a builder which is used to construct an NFA.
    pub(super) fn builder() -> NfaBuilder {
        NfaBuilder::new()
    }

    /// Returns a read-only reference to the `State` in the NFA.
    ///
    /// # Panics
    ///
    /// When the [`StateId`] does not exist in the NFA.
    pub(super) fn get_state(&self, state_id: StateId) -> &State {
        self.states
            .get(state_id)
            .expect("requested state does not exist")
    }

    /// Returns an iterator over read-only references of all final states in the
    /// NFA.
    pub(super) fn get_final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.final_states.iter().map(|id| self.get_state(*id))
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// Returns an iterator over the ids of all states in the NFA, in creation
    /// order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().map(|State { id, .. }| *id)
    }

    /// Returns an iterator over the ids of all final states in the NFA.
    pub fn final_state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.final_states.iter().copied()
    }

    /// Whether the state is final.
    ///
    /// # Panics
    ///
    /// When the [`StateId`] does not exist in the NFA.
    pub fn is_final(&self, state_id: StateId) -> bool {
        self.get_state(state_id).fin
    }

    /// Symbols used by the compiled expression followed by epsilon.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    /// Returns an iterator over the destinations of the transitions on `symbol`
    /// from the given state.
    ///
    /// # Panics
    ///
    /// When the [`StateId`] does not exist in the NFA.
    pub fn targets(
        &self,
        state_id: StateId,
        symbol: Symbol,
    ) -> impl Iterator<Item = StateId> + '_ {
        self.get_state(state_id).transitions.get(symbol).iter().copied()
    }

    /// Returns the epsilon closure of `states`: every state reachable from one
    /// of the given states using only epsilon transitions, including the given
    /// states themselves.
    ///
    /// # Panics
    ///
    /// When one of the given [`StateId`]s does not exist in the NFA.
    pub fn closure(&self, states: impl IntoIterator<Item = StateId>) -> BTreeSet<StateId> {
        let mut result = BTreeSet::new();
        let mut not_visited = VecDeque::new();

        for state_id in states {
            if result.insert(state_id) {
                not_visited.push_back(state_id);
            }
        }

        while let Some(state_id) = not_visited.pop_front() {
            for &dest in self.get_state(state_id).transitions.get(Symbol::Epsilon) {
                if result.insert(dest) {
                    not_visited.push_back(dest)
                }
            }
        }

        result
    }

    /// Returns every state reachable from one of `states` with a single
    /// transition on `symbol`. Epsilon transitions are not followed.
    ///
    /// # Panics
    ///
    /// When one of the given [`StateId`]s does not exist in the NFA.
    pub fn step<'a>(
        &self,
        states: impl IntoIterator<Item = &'a StateId>,
        symbol: Symbol,
    ) -> BTreeSet<StateId> {
        states
            .into_iter()
            .flat_map(|state_id| self.get_state(*state_id).transitions.get(symbol))
            .copied()
            .collect()
    }
}

impl State {
    /// Creates a new non-final [`State`] without transitions.
    fn with_id(id: StateId) -> Self {
        Self {
            id,
            fin: false,
            transitions: Transitions::default(),
        }
    }
}

impl Transitions {
    /// Returns the destinations of the transitions on `symbol`.
    pub(super) fn get(&self, symbol: Symbol) -> &IndexSet<StateId> {
        &self.0[symbol.index()]
    }

    /// Adds a transition on `symbol` to `dest`. Returns whether the transition
    /// was new.
    fn insert(&mut self, symbol: Symbol, dest: StateId) -> bool {
        self.0[symbol.index()].insert(dest)
    }

    /// Returns an iterator over every symbol along with its destinations.
    pub(super) fn iter(&self) -> impl Iterator<Item = (Symbol, &IndexSet<StateId>)> + '_ {
        Symbol::ALL
            .into_iter()
            .map(move |symbol| (symbol, self.get(symbol)))
    }
}

/// Builder struct for the [`Nfa`]. It is the arena all states of a single
/// compilation are created in.
#[derive(Default)]
pub(super) struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    /// Creates a new [`NfaBuilder`] without any states.
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Returns the next [`StateId`] a [`State`] should have. If the state is
    /// not created, the id will not be taken.
    fn new_state_id(&self) -> StateId {
        self.states.len()
    }

    /// Builds the [`Nfa`] with the given start and final states, checks
    /// whether all transitions are valid and whether the start state exists.
    ///
    /// # Panics
    ///
    /// When a transition, the start state or a final state refers to a state
    /// that was never created.
    pub(super) fn build(
        mut self,
        start_state: StateId,
        final_states: impl IntoIterator<Item = StateId>,
        alphabet: Vec<Symbol>,
    ) -> Nfa {
        let state_count = self.states.len();
        let is_valid = |id: &StateId| *id < state_count;

        if !self
            .states
            .iter()
            .flat_map(|State { transitions, .. }| transitions.iter())
            .all(|(_, dests)| dests.iter().all(is_valid))
        {
            panic!("one or more destination states found that do not exist");
        }

        if !is_valid(&start_state) {
            panic!("start state is not a valid state");
        }

        let final_states = final_states.into_iter().collect::<IndexSet<_>>();

        for state_id in final_states.iter() {
            self.get_state_mut(*state_id).fin = true;
        }

        Nfa {
            start_state,
            states: self.states,
            final_states: final_states.into_iter().collect(),
            alphabet,
        }
    }

    /// Creates a new [`State`] for the NFA.
    pub(super) fn add_state(&mut self) -> StateId {
        let id = self.new_state_id();
        self.states.push(State::with_id(id));
        id
    }

    /// Creates a transition between two states using their [`StateId`]s.
    ///
    /// # Panics
    ///
    /// When `start` is an invalid [`StateId`].
    pub(super) fn add_transition(&mut self, start: StateId, end: StateId, symbol: Symbol) {
        self.get_state_mut(start).transitions.insert(symbol, end);
    }

    /// Returns a mutable reference to the requested [`State`].
    ///
    /// # Panics
    ///
    /// When `state_id` is not a valid [`StateId`].
    fn get_state_mut(&mut self, state_id: StateId) -> &mut State {
        self.states
            .get_mut(state_id)
            .expect("state does not exist")
    }
}
