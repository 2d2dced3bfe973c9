//! State store with reducer pattern

use crate::action::{Action, ActionSummary};
use crate::error::{ListError, Result};
use std::marker::PhantomData;

/// A reducer function that handles actions and mutates state
///
/// Returns `Ok(true)` if the state changed. A reducer that returns an error
/// must leave the state as it was.
pub type Reducer<S, A> = fn(&mut S, A) -> Result<bool>;

/// State container with Redux-like reducer pattern
///
/// The store owns the snapshot and is the single place where it is replaced.
///
/// # Example
/// ```
/// use listkeeper_core::{lists_reducer, CollectionAction, Item, List, ListAction, ListType, Store};
///
/// let lists = vec![List::new("Groceries", ListType::Shopping).with_items(vec![Item::new("Milk")])];
/// let mut store = Store::new(lists, lists_reducer);
///
/// let changed = store
///     .dispatch(ListAction::Items {
///         list: 0,
///         action: CollectionAction::SelectAll { selected: true },
///     })
///     .unwrap();
/// assert!(changed);
/// assert!(store.state()[0].items[0].is_selected);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Dispatch an action to the store
    ///
    /// Returns `Ok(true)` if the state changed.
    pub fn dispatch(&mut self, action: A) -> Result<bool> {
        (self.reducer)(&mut self.state, action)
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state
    ///
    /// Use this sparingly - prefer dispatching actions for state changes.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Take the state out of the store
    pub fn into_state(self) -> S {
        self.state
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and lets middleware observe every action before and after
/// the reducer runs.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Dispatch an action through middleware and store
    pub fn dispatch(&mut self, action: A) -> Result<bool> {
        self.middleware.before(&action);
        match self.store.dispatch(action.clone()) {
            Ok(changed) => {
                self.middleware.after(&action, changed);
                Ok(changed)
            }
            Err(error) => {
                self.middleware.on_error(&action, &error);
                Err(error)
            }
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Get a mutable reference to the state
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Get a mutable reference to the middleware
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

/// Middleware trait for observing actions
///
/// Implement this trait to add logging, auditing, or other cross-cutting
/// concerns to a store.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer accepted the action
    fn after(&mut self, action: &A, state_changed: bool);

    /// Called when the reducer rejected the action
    fn on_error(&mut self, _action: &A, _error: &ListError) {}
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs actions through `tracing`
///
/// Events carry the action's [`ActionSummary`], so actions holding a whole
/// snapshot log a short form.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Create a new logging middleware (log after only)
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Create a logging middleware that logs both before and after
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: ActionSummary> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(
                action = %action.name(),
                summary = %action.summary(),
                "Dispatching action"
            );
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                summary = %action.summary(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }

    fn on_error(&mut self, action: &A, error: &ListError) {
        tracing::warn!(
            action = %action.name(),
            summary = %action.summary(),
            error = %error,
            "Action rejected"
        );
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A> + Send>>,
}

impl<A: Action> std::fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<M: Middleware<A> + Send + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        for middleware in &mut self.middlewares {
            middleware.before(action);
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        // Reverse order for proper nesting
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(action, state_changed);
        }
    }

    fn on_error(&mut self, action: &A, error: &ListError) {
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.on_error(action, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use crate::action::{CollectionAction, ListAction};
    use crate::model::{Item, List, ListType};
    use crate::position::Position;
    use crate::reducer::lists_reducer;

    fn groceries() -> Vec<List> {
        vec![List::new("Groceries", ListType::Shopping)
            .with_items(vec![Item::new("Apples"), Item::new("Bread")])]
    }

    fn select_all() -> ListAction {
        ListAction::Items {
            list: 0,
            action: CollectionAction::SelectAll { selected: true },
        }
    }

    fn bad_add() -> ListAction {
        ListAction::Items {
            list: 0,
            action: CollectionAction::Add {
                entry: Item::new("Milk"),
                position: Position::Other,
            },
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(groceries(), lists_reducer);

        assert!(store.dispatch(select_all()).unwrap());
        assert!(!store.dispatch(select_all()).unwrap());
        assert!(store.state()[0].items.iter().all(|item| item.is_selected));
    }

    #[test]
    fn test_store_error_keeps_state() {
        let mut store = Store::new(groceries(), lists_reducer);

        assert!(store.dispatch(bad_add()).is_err());
        assert_eq!(store.into_state(), groceries());
    }

    #[test]
    fn test_store_state_mut() {
        let mut store = Store::new(groceries(), lists_reducer);

        store.state_mut().clear();
        assert!(store.state().is_empty());
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        error_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, _state_changed: bool) {
            self.after_count += 1;
        }

        fn on_error(&mut self, _action: &A, _error: &ListError) {
            self.error_count += 1;
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store =
            StoreWithMiddleware::new(groceries(), lists_reducer, CountingMiddleware::default());

        store.dispatch(select_all()).unwrap();
        let _ = store.dispatch(bad_add());

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 1);
        assert_eq!(store.middleware().error_count, 1);
    }

    #[test]
    fn test_composed_middleware_forwards_errors() {
        let mut composed = ComposedMiddleware::new();
        composed.add(LoggingMiddleware::verbose());
        composed.add(CountingMiddleware::default());

        let mut store = StoreWithMiddleware::new(groceries(), lists_reducer, composed);
        assert!(store.dispatch(bad_add()).is_err());
        assert!(store.dispatch(select_all()).unwrap());
    }

    #[derive(Clone, Debug)]
    struct Summarised(Arc<AtomicUsize>);

    impl Action for Summarised {
        fn name(&self) -> &'static str {
            "Summarised"
        }
    }

    impl ActionSummary for Summarised {
        fn summary(&self) -> String {
            self.0.fetch_add(1, Ordering::SeqCst);
            "short".to_string()
        }
    }

    fn bump(state: &mut u32, _action: Summarised) -> Result<bool> {
        *state += 1;
        Ok(true)
    }

    #[test]
    fn test_logging_middleware_logs_summary() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let calls = Arc::new(AtomicUsize::new(0));

        tracing::subscriber::with_default(subscriber, || {
            let mut store = StoreWithMiddleware::new(0, bump, LoggingMiddleware::verbose());
            store.dispatch(Summarised(calls.clone())).unwrap();
        });

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
