mod reducer;

use crate::environment::Environment;
use crate::store::{Effect, Reducer, Store};
pub use reducer::{reduce, AuthAction, AuthReducer, AuthState};

pub type AuthStore = Store<AuthReducer>;

impl Reducer for AuthReducer {
    type Action = AuthAction;

    type State = AuthState;

    type Environment = Environment;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        reduce(action, state, environment)
    }
}
