//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    api_error::StructuredError,
    config::SeedSource,
    notification::{Notification, example_notifications},
    seed::seed_store,
    transaction::TransactionStore,
};

/// The state of the server.
///
/// Handlers take the sub-state they need through [axum::extract::FromRef].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every transaction, newest first.
    pub transactions: Arc<Mutex<TransactionStore>>,

    /// The notifications shown on the notifications page.
    pub notifications: Arc<Mutex<Vec<Notification>>>,

    /// What the dashboard remembers between requests.
    pub view_state: Arc<Mutex<ViewState>>,
}

impl AppState {
    /// Create a new [AppState] with the transactions from `seed`.
    ///
    /// # Errors
    /// Returns an error if the seed transactions cannot be loaded.
    pub fn new(seed: &SeedSource) -> Result<Self, Error> {
        Ok(Self::with_store(seed_store(seed)?))
    }

    /// Create a new [AppState] around an existing store.
    pub fn with_store(store: TransactionStore) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(store)),
            notifications: Arc::new(Mutex::new(example_notifications())),
            view_state: Arc::new(Mutex::new(ViewState::default())),
        }
    }
}

/// The outcome of the last transaction change made through the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// The error from the last failed create, delete or update.
    ///
    /// Cleared by the next successful change.
    pub last_error: Option<StructuredError>,
}

impl ViewState {
    /// Remember the outcome of a change to the transactions.
    pub fn record_outcome<T>(&mut self, outcome: &Result<T, StructuredError>) {
        self.last_error = outcome.as_ref().err().cloned();
    }
}

/// Acquire `mutex`, logging and converting a poisoned lock.
pub(crate) fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, Error> {
    mutex
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire the {name} lock: {error}"))
        .map_err(|_| Error::StateLockError)
}
