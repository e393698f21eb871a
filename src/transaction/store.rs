//! The in-memory transaction store and the query used to list transactions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Error,
    transaction::{
        core::{Category, Transaction, TransactionInput, TransactionType},
        validation::FieldErrors,
    },
};

/// Holds the transactions for the lifetime of the server process.
///
/// Transactions are kept newest first by insertion, which is also the
/// default display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `transactions` in the given order.
    ///
    /// # Errors
    /// Returns [Error::DuplicateTransactionId] if two transactions share an ID.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Result<Self, Error> {
        for (index, transaction) in transactions.iter().enumerate() {
            if transactions[..index]
                .iter()
                .any(|other| other.id == transaction.id)
            {
                return Err(Error::DuplicateTransactionId(transaction.id.clone()));
            }
        }

        Ok(Self { transactions })
    }

    /// Every transaction, newest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The transactions matching the filters in `query`, newest first.
    pub fn list(&self, query: &ListQuery) -> Vec<Transaction> {
        let matching = self.transactions.iter().filter(|transaction| {
            query
                .transaction_type
                .is_none_or(|kind| transaction.transaction_type == kind)
                && query
                    .category
                    .is_none_or(|category| transaction.category == category)
        });

        match query.limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        }
    }

    /// Store a validated transaction under a freshly generated ID.
    pub fn create(&mut self, input: TransactionInput) -> Transaction {
        let transaction = Transaction::new(Uuid::new_v4().to_string(), input);
        self.transactions.insert(0, transaction.clone());

        transaction
    }

    /// Remove the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if no transaction has that ID.
    pub fn remove(&mut self, id: &str) -> Result<Transaction, Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        Ok(self.transactions.remove(index))
    }

    /// Updating transactions is not supported.
    ///
    /// # Errors
    /// Always returns [Error::UpdateNotSupported].
    pub fn update(&mut self, id: &str, _input: TransactionInput) -> Result<Transaction, Error> {
        tracing::debug!("rejected update of transaction {id}");
        Err(Error::UpdateNotSupported)
    }
}

/// Filters for listing transactions.
///
/// Every filter is optional. Empty strings in a query string mean "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ListQuery {
    /// The maximum number of transactions to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Only return transactions of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Only return transactions in this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// The raw query string parameters for [ListQuery].
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde(default)]
    limit: Option<String>,
    #[serde(default, rename = "type")]
    transaction_type: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl ListQueryParams {
    /// Validate the raw parameters.
    ///
    /// # Errors
    /// Returns the messages for each invalid parameter, keyed by parameter name.
    pub fn parse(self) -> Result<ListQuery, FieldErrors> {
        let mut errors = FieldErrors::new();

        let limit = match non_empty(self.limit) {
            None => None,
            Some(text) => match text.parse::<usize>() {
                Ok(limit) if limit > 0 => Some(limit),
                _ => {
                    errors.insert(
                        "limit".to_owned(),
                        vec!["Limit must be a positive whole number".to_owned()],
                    );
                    None
                }
            },
        };

        let transaction_type = match non_empty(self.transaction_type) {
            None => None,
            Some(name) => {
                let parsed = TransactionType::from_name(&name);
                if parsed.is_none() {
                    errors.insert(
                        "type".to_owned(),
                        vec![format!("Unknown transaction type \"{name}\"")],
                    );
                }
                parsed
            }
        };

        let category = match non_empty(self.category) {
            None => None,
            Some(name) => {
                let parsed = Category::from_name(&name);
                if parsed.is_none() {
                    errors.insert(
                        "category".to_owned(),
                        vec![format!("Unknown category \"{name}\"")],
                    );
                }
                parsed
            }
        };

        if errors.is_empty() {
            Ok(ListQuery {
                limit,
                transaction_type,
                category,
            })
        } else {
            Err(errors)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

impl ListQuery {
    /// Render the set filters as a URL query string without the leading '?'.
    ///
    /// Unset filters are omitted, so an empty query produces an empty string.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_else(|error| {
            tracing::error!("could not encode list query {self:?}: {error}");
            String::new()
        })
    }

    /// Append the query string for this query to `path`, if any filter is set.
    pub fn to_url(&self, path: &str) -> String {
        let query = self.to_query_string();

        if query.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{query}")
        }
    }

    /// A copy of this query with the type filter replaced.
    pub fn with_type(self, transaction_type: Option<TransactionType>) -> Self {
        Self {
            transaction_type,
            ..self
        }
    }

    /// Whether no filter is set.
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }
}
