mod action;
mod like;
mod reducer;
mod state;

pub use action::PostAction;
pub use like::LikeUpdate;
pub use state::State;

pub use reducer::reduce;

use crate::environment::Environment;
use crate::store::{Effect, Reducer, Store};

pub type PostStore = Store<PostReducer>;

pub struct PostReducer;

impl Reducer for PostReducer {
    type Action = PostAction;

    type State = State;

    type Environment = Environment;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        reducer::reduce(action, state, environment)
    }
}
