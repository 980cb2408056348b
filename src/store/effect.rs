use futures_util::future::BoxFuture;
use futures_util::{Future, FutureExt};

use crate::error::Error;

/// What a reducer asks the store to do after it mutated the state.
pub enum Effect<A> {
    /// Nothing more to do
    None,
    /// Immediately reduce another action
    Action(A),
    /// Await the future, then reduce the action it resolves into
    Future(BoxFuture<'static, A>),
    /// Reject the dispatch
    Fail(Error),
}

impl<A: Send + 'static> Effect<A> {
    pub const NONE: Effect<A> = Effect::None;

    pub fn action(action: A) -> Self {
        Effect::Action(action)
    }

    pub fn future<T, F, M>(future: F, mapper: M) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> A + Send + 'static,
    {
        Effect::Future(future.map(mapper).boxed())
    }

    pub fn fail(error: Error) -> Self {
        Effect::Fail(error)
    }
}

impl<A> std::fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(_) => write!(f, "Action"),
            Effect::Future(_) => write!(f, "Future"),
            Effect::Fail(e) => f.debug_tuple("Fail").field(e).finish(),
        }
    }
}
