//! The state shared by the transaction endpoints.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{
    AppState, Error,
    api_error::StructuredError,
    app_state::{ViewState, lock},
    transaction::{Transaction, TransactionStore, store::ListQuery},
};

/// The state needed to list and change transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    pub transactions: Arc<Mutex<TransactionStore>>,
    pub view_state: Arc<Mutex<ViewState>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            view_state: state.view_state.clone(),
        }
    }
}

impl TransactionState {
    /// The transactions matching `query`, newest first.
    pub fn list(&self, query: &ListQuery) -> Result<Vec<Transaction>, Error> {
        Ok(lock(&self.transactions, "transaction store")?.list(query))
    }

    /// Apply `operation` to the store and remember whether it failed.
    ///
    /// The error of a failed operation becomes the dashboard's last error,
    /// a successful one clears it.
    pub fn change<T>(
        &self,
        operation: impl FnOnce(&mut TransactionStore) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let result = lock(&self.transactions, "transaction store")
            .and_then(|mut store| operation(&mut store));

        let outcome = result.as_ref().map(|_| ()).map_err(|error| {
            tracing::warn!("transaction change failed: {error}");
            StructuredError::from(error.clone())
        });
        self.record(&outcome)?;

        result
    }

    /// Remember the outcome of a change that failed before reaching the store.
    pub fn record<T>(&self, outcome: &Result<T, StructuredError>) -> Result<(), Error> {
        lock(&self.view_state, "view state")?.record_outcome(outcome);

        Ok(())
    }
}
