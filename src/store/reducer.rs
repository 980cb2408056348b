use super::Effect;

pub trait Reducer {
    type Action: std::fmt::Debug + Send + 'static;

    type State: Clone;

    type Environment;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action>;
}
