mod effect;
mod reducer;

pub use effect::Effect;
pub use reducer::Reducer;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;

/// Holds the state of one reducer and runs the effects its actions produce.
///
/// Clones share the same state. The lock is only held while an action is
/// reduced, never while a request is in flight, so concurrently dispatched
/// actions interleave and the merge that runs last wins.
pub struct Store<R: Reducer> {
    state: Arc<Mutex<R::State>>,
    environment: R::Environment,
}

impl<R: Reducer> Clone for Store<R>
where
    R::Environment: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            environment: self.environment.clone(),
        }
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State, environment: R::Environment) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            environment,
        }
    }

    pub fn environment(&self) -> &R::Environment {
        &self.environment
    }

    /// Reduce `action` and every action that follows from its effects.
    /// Resolves once the chain ends, or rejects with the first failure.
    pub async fn dispatch(&self, action: R::Action) -> Result<()> {
        let mut pending = VecDeque::from([action]);
        while let Some(action) = pending.pop_front() {
            let effect = R::reduce(action, &mut self.lock(), &self.environment);
            match effect {
                Effect::None => {}
                Effect::Action(next) => pending.push_back(next),
                Effect::Future(future) => pending.push_back(future.await),
                Effect::Fail(error) => return Err(error),
            }
        }
        Ok(())
    }

    pub fn with<T>(&self, action: impl FnOnce(&R::State) -> T) -> T {
        action(&self.lock())
    }

    /// A snapshot of the current state
    pub fn state(&self) -> R::State {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, R::State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
