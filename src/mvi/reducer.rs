use super::intent::Intent;
use super::state::ModelState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: ModelState;
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Must not perform I/O or log; callers handle side effects around it.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
