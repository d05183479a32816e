use super::{model::Nfa, StateId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serializable description of an [`Nfa`].
///
/// The field names are the ones of the formal definition of an automaton
/// `(Q, A, T, S, F)` and must not change, since tools read them from the
/// persisted JSON document. States are named `Q<id>`, symbols by the character
/// they are written with in an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Names of all states.
    #[serde(rename = "Q")]
    pub states: Vec<String>,
    /// Name of the start state.
    #[serde(rename = "S")]
    pub start: String,
    /// Symbols used in the expression, followed by epsilon.
    #[serde(rename = "A")]
    pub alphabet: Vec<String>,
    /// Names of the final states.
    #[serde(rename = "F")]
    pub finals: Vec<String>,
    /// For every state, the destinations of its transitions on every symbol of
    /// the alphabet. Symbols without transitions map to an empty list.
    #[serde(rename = "T")]
    pub transitions: IndexMap<String, IndexMap<String, Vec<String>>>,
}

fn state_name(state_id: StateId) -> String {
    format!("Q{}", state_id)
}

impl Nfa {
    /// Describes the NFA in terms of named states and symbols.
    pub fn description(&self) -> Description {
        let transitions = self
            .state_ids()
            .map(|state_id| {
                let targets: IndexMap<String, Vec<String>> = self
                    .alphabet
                    .iter()
                    .map(|symbol| {
                        (
                            symbol.to_string(),
                            self.targets(state_id, *symbol)
                                .map(state_name)
                                .collect::<Vec<_>>(),
                        )
                    })
                    .collect();

                (state_name(state_id), targets)
            })
            .collect();

        Description {
            states: self.state_ids().map(state_name).collect(),
            start: state_name(self.start_state),
            alphabet: self.alphabet.iter().map(|symbol| symbol.to_string()).collect(),
            finals: self.final_state_ids().map(state_name).collect(),
            transitions,
        }
    }

    /// Serializes the description of the NFA to pretty printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.description())
    }
}
